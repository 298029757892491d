//! Input parsing: lenient numeric fields and quote documents.

mod document;
mod numeric;

pub use document::{document_to_json, parse_document, parse_document_file, save_document_file};
pub use numeric::*;
