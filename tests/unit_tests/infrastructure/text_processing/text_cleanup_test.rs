use text_refiner::infrastructure::text_processing::tidy_extracted_text;

#[test]
fn given_blank_line_runs_when_tidying_then_collapses_to_single_blank_line() {
    assert_eq!(tidy_extracted_text("a\n\n\n\nb"), "a\n\nb");
}

#[test]
fn given_trailing_spaces_and_crlf_when_tidying_then_strips_them() {
    assert_eq!(tidy_extracted_text("a  \r\nb\t\r\n"), "a\nb");
}

#[test]
fn given_decomposed_characters_when_tidying_then_composes_them() {
    assert_eq!(tidy_extracted_text("e\u{0301}"), "\u{00e9}");
}

#[test]
fn given_leading_blank_lines_when_tidying_then_drops_them() {
    assert_eq!(tidy_extracted_text("\n\n  \nbody"), "body");
}
