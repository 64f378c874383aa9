use crate::domain::RefinementParams;

/// Opening of the line that carries the user's free-form suggestions.
pub const SUGGESTIONS_DIRECTIVE: &str =
    "The user added the following suggestions, which you must honor in the rewrite:";

/// Header that introduces the user's text at the end of every prompt.
pub const TEXT_HEADER: &str = "Text to rewrite:\n";

/// Builds the single instruction string sent to the model.
///
/// Labels (not keys) of every parameter are embedded. The suggestions line is
/// only present when suggestions are non-blank.
pub fn build_prompt(
    original_text: &str,
    params: &RefinementParams,
    suggestions: Option<&str>,
) -> String {
    let language = params.language.label();
    let purpose = params.purpose.label();
    let tone = params.tone.label();
    let length = params.length.label();

    let mut prompt = format!(
        "You are an experienced editor and copywriter. Rewrite the text below so that it \
         works as: {purpose}.\n\n\
         Requirements:\n\
         - Write the result in {language}.\n\
         - Correct every language, spelling, grammar and punctuation error.\n\
         - Purpose: {purpose}.\n\
         - Tone: {tone}.\n\
         - Desired length: {length}.\n\
         - Substantively rewrite the text to fit this purpose, tone and length. Do not \
         limit yourself to superficial edits such as swapping a few words.\n"
    );

    if let Some(suggestions) = suggestions.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("- {SUGGESTIONS_DIRECTIVE} {suggestions}\n"));
    }

    prompt.push_str(
        "\nReturn ONLY the rewritten text. Do not add any preamble, explanation, comments, \
         surrounding quotation marks or markdown code fences.\n\n",
    );
    prompt.push_str(TEXT_HEADER);
    prompt.push_str(original_text);

    prompt
}
