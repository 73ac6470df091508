use regex::Regex;

/// Normalize extracted document text before rendering.
///
/// Strips byte-order marks, unifies line endings, collapses runs of blank
/// lines down to a single one and applies the rebranding substitution.
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize(text: &str, rebrand_from: &str, rebrand_to: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace('\u{feff}', "");
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    // Keep paragraph breaks, drop any extra blank lines between them
    let re_newlines = Regex::new(r"\n{3,}").unwrap();
    let text = re_newlines.replace_all(&text, "\n\n");

    let text = text.replace(rebrand_from, rebrand_to);

    text.trim().to_string()
}
