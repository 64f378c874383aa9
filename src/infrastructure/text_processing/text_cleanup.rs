use unicode_normalization::UnicodeNormalization;

/// Tidies text pulled out of binary documents: NFC composition, `\n` line
/// endings, no trailing spaces and at most one blank line in a row.
pub fn tidy_extracted_text(raw: &str) -> String {
    let composed: String = raw.nfc().collect();

    let mut result = String::with_capacity(composed.len());
    let mut blank_run = 0usize;

    for line in composed.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }

        if !result.is_empty() {
            result.push_str(if blank_run > 0 { "\n\n" } else { "\n" });
        }
        result.push_str(line);
        blank_run = 0;
    }

    result
}
