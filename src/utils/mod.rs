pub mod docx_parser;
pub mod pdf_parser;
pub mod text_processor;

pub use docx_parser::extract_text_from_docx;
pub use pdf_parser::extract_text_from_pdf;
pub use text_processor::normalize;
