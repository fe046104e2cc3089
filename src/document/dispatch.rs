use crate::document::{
    DelimitedDocument, Document, DocumentFormat, PdfDocument, SpreadsheetDocument, SpreadsheetKind,
};
use std::path::Path;

/// Tags a caller may declare explicitly instead of relying on the extension.
pub const SUPPORTED_FORMAT_TAGS: &[&str] = &["pdf", "xlsx", "xls", "csv", "txt", "text"];

/// Map a file extension to a format. Unknown extensions fall back to
/// delimited text.
pub fn format_from_extension(extension: &str) -> DocumentFormat {
    let extension = extension.trim_start_matches('.').to_lowercase();

    match extension.as_str() {
        "pdf" => DocumentFormat::TabularDocument,
        "xlsx" => DocumentFormat::Spreadsheet(SpreadsheetKind::Xlsx),
        "xls" => DocumentFormat::Spreadsheet(SpreadsheetKind::Xls),
        _ => DocumentFormat::DelimitedText,
    }
}

/// Map an upload filename to a format using its extension.
pub fn format_from_filename(filename: &str) -> DocumentFormat {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    format_from_extension(extension)
}

/// Resolve an explicitly declared format tag. Unlike extension dispatch,
/// an unrecognized tag is an error.
pub fn format_from_tag(tag: &str) -> Result<DocumentFormat, String> {
    let normalized = tag.trim().trim_start_matches('.').to_lowercase();
    if !SUPPORTED_FORMAT_TAGS.contains(&normalized.as_str()) {
        return Err(format!(
            "unsupported format tag '{tag}' (expected one of: {})",
            SUPPORTED_FORMAT_TAGS.join(", ")
        ));
    }

    Ok(format_from_extension(&normalized))
}

/// Parse an upload, choosing the format from its filename.
pub fn open_document(bytes: Vec<u8>, filename: &str) -> Result<Document, String> {
    open_document_with_format(bytes, format_from_filename(filename))
}

/// Parse an upload as the given format.
pub fn open_document_with_format(bytes: Vec<u8>, format: DocumentFormat) -> Result<Document, String> {
    match format {
        DocumentFormat::TabularDocument => Ok(Document::Pdf(PdfDocument::open(&bytes)?)),
        DocumentFormat::Spreadsheet(kind) => {
            Ok(Document::Spreadsheet(SpreadsheetDocument::open(bytes, kind)?))
        }
        DocumentFormat::DelimitedText => Ok(Document::Delimited(DelimitedDocument::open(bytes)?)),
    }
}
