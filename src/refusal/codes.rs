use serde::Serialize;

/// Reasons an ingestion or query is refused outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefusalCode {
    /// Declared format tag is not one the extractor knows.
    #[serde(rename = "E_UNSUPPORTED_FORMAT")]
    UnsupportedFormat,
    /// Bytes cannot be decoded as the declared format.
    #[serde(rename = "E_DOCUMENT_PARSE")]
    DocumentParse,
    /// The document yielded no item candidates.
    #[serde(rename = "E_EMPTY_EXTRACTION")]
    EmptyExtraction,
    /// Unreadable input file or invalid command-line value.
    #[serde(rename = "E_BAD_INPUT")]
    BadInput,
    /// Request store or invoice log could not be read or written.
    #[serde(rename = "E_STORE")]
    Store,
}

impl RefusalCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RefusalCode::UnsupportedFormat => "E_UNSUPPORTED_FORMAT",
            RefusalCode::DocumentParse => "E_DOCUMENT_PARSE",
            RefusalCode::EmptyExtraction => "E_EMPTY_EXTRACTION",
            RefusalCode::BadInput => "E_BAD_INPUT",
            RefusalCode::Store => "E_STORE",
        }
    }

    /// Human-readable summary used as the envelope message.
    pub fn message(self) -> &'static str {
        match self {
            RefusalCode::UnsupportedFormat => "Unsupported document format",
            RefusalCode::DocumentParse => "Document could not be parsed",
            RefusalCode::EmptyExtraction => "No items could be extracted from the document",
            RefusalCode::BadInput => "Invalid input",
            RefusalCode::Store => "Store access failed",
        }
    }
}
