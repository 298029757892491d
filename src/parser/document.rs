//! Quote document loading and saving.

use crate::config::{SCHEMA_VERSION, SUPPORTED_SCHEMA_MAJOR};
use crate::error::{QuoteError, Result};
use crate::model::QuoteDocument;
use std::path::Path;

/// Parse a quote document from JSON text.
pub fn parse_document(content: &str) -> Result<QuoteDocument> {
    let doc: QuoteDocument = serde_json::from_str(content)?;

    match doc.schema_major() {
        Some(major) if major == SUPPORTED_SCHEMA_MAJOR => {}
        _ => {
            return Err(QuoteError::UnsupportedVersion {
                found: doc.version,
                supported: SUPPORTED_SCHEMA_MAJOR,
            })
        }
    }

    tracing::debug!(
        "Parsed document v{}: {} window(s), {} corner(s)",
        doc.version,
        doc.windows.len(),
        doc.corners.len()
    );

    Ok(doc)
}

/// Load a quote document from a JSON file.
pub fn parse_document_file(path: &Path) -> Result<QuoteDocument> {
    use std::fs;

    if !path.exists() {
        return Err(QuoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(QuoteError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_document(&content)
}

/// Serialize a quote document as pretty-printed JSON.
pub fn document_to_json(doc: &QuoteDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a quote document to a JSON file, stamped with the current schema
/// version.
pub fn save_document_file(doc: &QuoteDocument, path: &Path) -> Result<()> {
    let doc = QuoteDocument {
        version: SCHEMA_VERSION.to_string(),
        ..doc.clone()
    };
    let json = document_to_json(&doc)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::{raw, FrameMode};

    #[test]
    fn test_parse_document_with_text_numbers() {
        let json = r#"{
            "_v": "1.2.0",
            "kerf": "0,3",
            "units": "cm",
            "windows": [
                { "name": "Salon", "w": "150", "h": 180, "mode": "full",
                  "frame": { "len_bar": 200, "price_bar": "50" } }
            ]
        }"#;

        let doc = parse_document(json).unwrap();
        assert_eq!(doc.kerf, raw("0,3"));
        assert_eq!(doc.windows.len(), 1);
        assert_eq!(doc.windows[0].w, raw("150"));
        assert_eq!(doc.windows[0].mode, Some(FrameMode::Full));
        assert!(doc.corners.is_empty());
    }

    #[test]
    fn test_parse_document_rejects_future_version() {
        let err = parse_document(r#"{"_v":"2.0.0"}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedVersion);
    }

    #[test]
    fn test_parse_document_requires_version() {
        let err = parse_document(r#"{"windows":[]}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
    }

    #[test]
    fn test_parse_document_malformed() {
        let err = parse_document("{ not json").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
    }

    #[test]
    fn test_parse_document_file_missing() {
        let err = parse_document_file(Path::new("/nonexistent/quote.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileNotFound);
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = QuoteDocument {
            global_discount: raw(5.0),
            ..Default::default()
        };
        let json = document_to_json(&doc).unwrap();
        assert_eq!(parse_document(&json).unwrap(), doc);
    }

    #[test]
    fn test_save_restamps_schema_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");

        let doc = parse_document(r#"{"_v":"1.0.0","kerf":3}"#).unwrap();
        save_document_file(&doc, &path).unwrap();

        let saved = parse_document_file(&path).unwrap();
        assert_eq!(saved.version, SCHEMA_VERSION);
        assert_eq!(saved.kerf, raw(3.0));
        // the caller's document is left as loaded
        assert_eq!(doc.version, "1.0.0");
    }
}
