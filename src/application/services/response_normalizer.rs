use regex::Regex;
use std::sync::LazyLock;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[^`\n]*\r?\n").unwrap());

const CLOSING_FENCE: &str = "```";

const QUOTE_PAIRS: [(char, char); 3] = [('"', '"'), ('\u{201C}', '\u{201D}'), ('\u{201E}', '\u{201D}')];

/// Strips incidental wrapping from raw model output: surrounding whitespace,
/// one enclosing pair of double quotes, then a markdown code fence.
pub fn normalize_response(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = strip_enclosing_quotes(trimmed);

    match strip_code_fence(unquoted) {
        Some(inner) => inner.trim().to_string(),
        None => unquoted.trim().to_string(),
    }
}

fn strip_enclosing_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return text;
    };

    if QUOTE_PAIRS.contains(&(first, last)) {
        &text[first.len_utf8()..text.len() - last.len_utf8()]
    } else {
        text
    }
}

fn strip_code_fence(text: &str) -> Option<String> {
    let opening = OPENING_FENCE.find(text)?;
    let body = &text[opening.end()..];
    let close = body.rfind(CLOSING_FENCE)?;

    let mut kept = body[..close].to_string();

    // Anything on the lines after the closing fence is content, not fence.
    let after_fence = &body[close + CLOSING_FENCE.len()..];
    if let Some((_, trailing)) = after_fence.split_once('\n') {
        if !trailing.trim().is_empty() {
            kept.push('\n');
            kept.push_str(trailing);
        }
    }

    Some(kept)
}
