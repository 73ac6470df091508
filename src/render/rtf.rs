use crate::config::ManualConfig;

/// Escape literal text for RTF: backslashes are doubled, each newline gains
/// an explicit `\line` control word.
fn rtf_escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\n', "\n\\line ")
}

/// Build the minimal RTF companion: title, edition, authors, entity and
/// prologue only. The extracted document corpus stays in the HTML artifact.
pub fn build_rtf(config: &ManualConfig) -> String {
    let authors = config.authors.join(" · ");

    format!(
        "{{\\rtf1\\ansi\\deff0\\fs22 {} \\line {} \\line Autores: {} \\line \\line {} \\line \\line {} }}",
        rtf_escape(&config.title),
        rtf_escape(&config.edition),
        rtf_escape(&authors),
        rtf_escape(&config.entity),
        rtf_escape(&config.prologue),
    )
}
