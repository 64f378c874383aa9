use text_refiner::application::services::{SUGGESTIONS_DIRECTIVE, TEXT_HEADER, build_prompt};
use text_refiner::domain::{DesiredLength, Language, Purpose, RefinementParams, Tone};

fn params() -> RefinementParams {
    RefinementParams::new(
        Language::German,
        Purpose::BlogArticle,
        Tone::Humorous,
        DesiredLength::Concise,
    )
}

fn every_params() -> Vec<RefinementParams> {
    let mut all = Vec::new();
    for &language in Language::ALL.iter() {
        for &purpose in Purpose::ALL.iter() {
            for &tone in Tone::ALL.iter() {
                for &length in DesiredLength::ALL.iter() {
                    all.push(RefinementParams::new(language, purpose, tone, length));
                }
            }
        }
    }
    all
}

#[test]
fn given_every_param_combination_when_building_prompt_then_embeds_every_label() {
    let combinations = every_params();
    assert_eq!(combinations.len(), 3 * 8 * 8 * 5);

    for params in &combinations {
        let prompt = build_prompt("Hallo Welt", params, None);

        for label in [
            params.language.label(),
            params.purpose.label(),
            params.tone.label(),
            params.length.label(),
        ] {
            assert!(prompt.contains(label), "{label:?} missing for {params:?}");
        }
    }
}

#[test]
fn given_every_param_combination_when_building_prompt_then_directive_follows_suggestions() {
    for params in &every_params() {
        assert!(
            build_prompt("text", params, Some("x")).contains(SUGGESTIONS_DIRECTIVE),
            "directive missing for {params:?}"
        );
        assert!(!build_prompt("text", params, None).contains(SUGGESTIONS_DIRECTIVE));
        assert!(!build_prompt("text", params, Some("  ")).contains(SUGGESTIONS_DIRECTIVE));
    }
}

#[test]
fn given_text_when_building_prompt_then_text_closes_the_prompt() {
    let prompt = build_prompt("Hallo Welt", &params(), None);
    assert!(prompt.ends_with(&format!("{TEXT_HEADER}Hallo Welt")));
}

#[test]
fn given_no_suggestions_when_building_prompt_then_omits_directive() {
    let prompt = build_prompt("text", &params(), None);
    assert!(!prompt.contains(SUGGESTIONS_DIRECTIVE));
}

#[test]
fn given_blank_suggestions_when_building_prompt_then_omits_directive() {
    let prompt = build_prompt("text", &params(), Some("   \n"));
    assert!(!prompt.contains(SUGGESTIONS_DIRECTIVE));
}

#[test]
fn given_suggestions_when_building_prompt_then_includes_directive_and_text() {
    let prompt = build_prompt("text", &params(), Some("mention the deadline"));

    assert!(prompt.contains(SUGGESTIONS_DIRECTIVE));
    assert!(prompt.contains("mention the deadline"));
}

#[test]
fn given_any_params_when_building_prompt_then_asks_for_bare_output() {
    let prompt = build_prompt("text", &RefinementParams::default(), None);

    assert!(prompt.contains("Return ONLY the rewritten text"));
    assert!(prompt.contains("grammar"));
}
