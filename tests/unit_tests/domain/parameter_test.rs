use text_refiner::domain::{DesiredLength, Language, Purpose, RefinementParams, Tone};

#[test]
fn given_default_params_when_created_then_match_initial_selection() {
    let params = RefinementParams::default();

    assert_eq!(params.language, Language::Polish);
    assert_eq!(params.purpose, Purpose::EmailToClient);
    assert_eq!(params.tone, Tone::Formal);
    assert_eq!(params.length, DesiredLength::OriginalLength);
}

#[test]
fn given_enumerations_when_listed_then_have_expected_sizes() {
    assert_eq!(Language::ALL.len(), 3);
    assert_eq!(Purpose::ALL.len(), 8);
    assert_eq!(Tone::ALL.len(), 8);
    assert_eq!(DesiredLength::ALL.len(), 5);
}

#[test]
fn given_every_key_when_parsed_then_round_trips_to_same_variant() {
    for language in Language::ALL {
        assert_eq!(language.key().parse::<Language>(), Ok(language));
    }
    for purpose in Purpose::ALL {
        assert_eq!(purpose.key().parse::<Purpose>(), Ok(purpose));
    }
    for tone in Tone::ALL {
        assert_eq!(tone.key().parse::<Tone>(), Ok(tone));
    }
    for length in DesiredLength::ALL {
        assert_eq!(length.key().parse::<DesiredLength>(), Ok(length));
    }
}

#[test]
fn given_mixed_case_key_when_parsing_then_is_case_insensitive() {
    assert_eq!("GERMAN".parse::<Language>(), Ok(Language::German));
}

#[test]
fn given_unknown_key_when_parsing_then_returns_error() {
    let result = "klingon".parse::<Language>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("klingon"));
}

#[test]
fn given_length_when_displayed_then_uses_label() {
    assert_eq!(DesiredLength::VeryShort.to_string(), "Very short (e.g. a tweet)");
}

#[test]
fn given_partial_json_when_deserializing_params_then_fills_defaults() {
    let params: RefinementParams =
        serde_json::from_str(r#"{"tone":"humorous","language":"english"}"#).unwrap();

    assert_eq!(params.tone, Tone::Humorous);
    assert_eq!(params.language, Language::English);
    assert_eq!(params.purpose, Purpose::EmailToClient);
}
