use chrono::{Datelike, Local};

use super::Section;
use crate::config::ManualConfig;

/// Escape the five HTML-reserved characters for safe insertion into body
/// content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a normalized text block in a paragraph container.
///
/// Blank lines become paragraph boundaries, remaining single newlines become
/// `<br/>`. Empty text still yields an empty `<p></p>` so every declared
/// slot stays visible in the output.
pub fn paragraphs(text: &str) -> String {
    let text = escape_html(text)
        .replace("\n\n", "</p><p>")
        .replace('\n', "<br/>");
    format!("<p>{text}</p>")
}

fn section_block(section: &Section) -> String {
    let mut block = Vec::new();

    let heading = format!("<section><h2>{}</h2>", escape_html(&section.heading));
    match &section.anchor {
        Some(id) => block.push(format!(
            "<a class=\"anchor\" id=\"{}\"></a>{}",
            escape_html(id),
            heading
        )),
        None => block.push(heading),
    }

    for slot in &section.slots {
        if !slot.subheading.is_empty() {
            block.push(format!("<h3>{}</h3>", escape_html(&slot.subheading)));
        }
        block.push(paragraphs(&slot.body));
    }
    block.push("</section>".to_string());

    block.join("\n")
}

/// Assemble the complete HTML document: head with inline styling, cover
/// block, the concatenated sections and a footer with the current year.
pub fn build_html(config: &ManualConfig, sections: &[Section]) -> String {
    let authors = config.authors.join(" · ");
    let year = Local::now().year();
    let body = sections
        .iter()
        .map(section_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    let top = format!(
        r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8"/>
<title>{title_tag}</title>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<style>
  :root{{ --ink:#111; --muted:#444; --brand:#0f172a; }}
  body{{ font-family: Cambria, Georgia, "Times New Roman", serif; color:var(--ink); line-height:1.55; margin:0; }}
  .page{{ max-width: 900px; margin: 40px auto; padding: 0 28px; }}
  header.cover{{ text-align:center; margin-top:80px; }}
  .logo{{ width:200px; margin:0 auto 18px; display:block; }}
  h1{{ font-size:30px; margin:0 0 10px; }}
  h2{{ font-size:24px; margin:30px 0 8px; color:var(--brand); }}
  h3{{ font-size:19px; margin:18px 0 6px; color:#1f2937; }}
  .subtitle{{ font-style:italic; color:var(--muted); }}
  .authors, .credits{{ color:var(--muted); }}
  .authors{{ margin:18px 0 28px; }}
  .hr{{ height:1px; background:#e5e7eb; margin:28px 0; }}
  footer{{ color:#555; margin:32px 0 60px; }}
  a.anchor{{ display:block; position:relative; top:-90px; visibility:hidden; }}
  @media print {{ .page{{ margin:15mm auto; padding:0 }} }}
</style>
</head>
<body>
<div class="page">
  <header class="cover">
    <img class="logo" src="{logo}" alt="{brand}"/>
    <h1>{title}</h1>
    <div class="subtitle">{edition}</div>
    <div class="authors"><strong>Autores:</strong><br/>{authors}</div>
    <div class="credits"><em>{entity}</em></div>
  </header>
  <div class="hr"></div>
"#,
        title_tag = escape_html(&config.output_basename),
        logo = escape_html(&config.logo),
        brand = escape_html(&config.rebrand_to),
        title = escape_html(&config.title),
        edition = escape_html(&config.edition),
        authors = escape_html(&authors),
        entity = escape_html(&config.entity),
    );

    let bottom = format!(
        r#"
  <div class="hr"></div>
  <footer class="small">© {year} {entity}</footer>
</div>
</body>
</html>"#,
        year = year,
        entity = escape_html(&config.entity),
    );

    top + &body + &bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Slot;

    #[test]
    fn test_escape_html_covers_all_five_reserved_characters() {
        assert_eq!(
            escape_html(r#"<p class="x">a & 'b'</p>"#),
            "&lt;p class=&quot;x&quot;&gt;a &amp; &#x27;b&#x27;&lt;/p&gt;"
        );
        assert_eq!(escape_html("sin cambios"), "sin cambios");
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(paragraphs("uno\n\ndos"), "<p>uno</p><p>dos</p>");
        assert_eq!(paragraphs("uno\ndos"), "<p>uno<br/>dos</p>");
        assert_eq!(paragraphs(""), "<p></p>");
    }

    #[test]
    fn test_paragraphs_escape_before_wrapping() {
        assert_eq!(paragraphs("a<b\n\nc"), "<p>a&lt;b</p><p>c</p>");
    }

    #[test]
    fn test_section_block_skips_empty_subheading() {
        let section = Section {
            heading: "2. Marco normativo".to_string(),
            anchor: None,
            slots: vec![
                Slot {
                    subheading: "2.1 Legislación".to_string(),
                    body: "texto".to_string(),
                },
                Slot {
                    subheading: String::new(),
                    body: String::new(),
                },
            ],
        };

        let block = section_block(&section);
        assert!(block.contains("<h2>2. Marco normativo</h2>"));
        assert!(block.contains("<h3>2.1 Legislación</h3>"));
        // The empty slot still renders an empty paragraph container
        assert_eq!(block.matches("<h3>").count(), 1);
        assert!(block.contains("<p></p>"));
    }

    #[test]
    fn test_section_block_anchor() {
        let section = Section {
            heading: "Prólogo".to_string(),
            anchor: Some("prologo".to_string()),
            slots: vec![Slot {
                subheading: String::new(),
                body: "texto".to_string(),
            }],
        };

        let block = section_block(&section);
        assert!(block.starts_with(r#"<a class="anchor" id="prologo"></a><section>"#));
    }

    #[test]
    fn test_build_html_cover_and_footer() {
        let config = ManualConfig::default();
        let html = build_html(&config, &[]);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Manual-MEDIAZION-2025_ES</title>"));
        assert!(html.contains(r#"<img class="logo" src="logo.png" alt="MEDIAZION"/>"#));
        assert!(html.contains("Mario Rondán Braida · Sara Garrido García"));
        // Entity contains no reserved characters, so it appears verbatim
        assert!(html.contains("MEDIAZION – Centro Institucional"));
        assert!(html.contains("@media print"));
        assert!(html.ends_with("</html>"));
    }
}
