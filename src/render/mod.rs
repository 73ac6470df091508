pub mod html;
pub mod rtf;

pub use html::{build_html, escape_html, paragraphs};
pub use rtf::build_rtf;

/// A fully resolved block of the manual, ready to render.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    /// Optional in-page anchor id placed before the section.
    pub anchor: Option<String>,
    pub slots: Vec<Slot>,
}

/// A resolved slot: sub-heading (possibly empty) plus normalized body text.
#[derive(Debug, Clone)]
pub struct Slot {
    pub subheading: String,
    pub body: String,
}
