pub mod delimited;
pub mod dispatch;
pub mod pdf;
pub mod xlsx;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dispatch::{format_from_filename, open_document, open_document_with_format};
use std::fmt;

/// Spreadsheet container flavour. Both are read through calamine's
/// auto-detecting reader; the tag only records what the caller declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    Xlsx,
    Xls,
}

/// Declared shape of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Paginated text (PDF). Candidates come from table-row inference.
    TabularDocument,
    Spreadsheet(SpreadsheetKind),
    /// Plain text split on newline, comma or semicolon. Also the fallback for
    /// untyped uploads.
    DelimitedText,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::TabularDocument => f.write_str("tabular-document"),
            DocumentFormat::Spreadsheet(SpreadsheetKind::Xlsx) => f.write_str("spreadsheet/xlsx"),
            DocumentFormat::Spreadsheet(SpreadsheetKind::Xls) => f.write_str("spreadsheet/xls"),
            DocumentFormat::DelimitedText => f.write_str("delimited-text"),
        }
    }
}

/// A parsed upload, one variant per format.
pub enum Document {
    Pdf(PdfDocument),
    Spreadsheet(SpreadsheetDocument),
    Delimited(DelimitedDocument),
}

impl Document {
    pub fn format(&self) -> DocumentFormat {
        match self {
            Document::Pdf(_) => DocumentFormat::TabularDocument,
            Document::Spreadsheet(d) => DocumentFormat::Spreadsheet(d.kind),
            Document::Delimited(_) => DocumentFormat::DelimitedText,
        }
    }

    /// Flatten the document into its ordered token sequence.
    pub fn tokens(&self) -> Result<Vec<String>, String> {
        self.tokens_with_progress(&mut |_, _| {})
    }

    /// Like [`Document::tokens`], reporting `(pages_done, pages_total)` after
    /// each PDF page. Other formats report a single unit of work.
    pub fn tokens_with_progress(
        &self,
        on_page: &mut dyn FnMut(u64, u64),
    ) -> Result<Vec<String>, String> {
        match self {
            Document::Pdf(d) => d.tokens_with_progress(on_page),
            Document::Spreadsheet(d) => {
                let tokens = d.tokens();
                on_page(1, 1);
                Ok(tokens)
            }
            Document::Delimited(d) => {
                let tokens = d.tokens();
                on_page(1, 1);
                Ok(tokens)
            }
        }
    }
}

pub struct PdfDocument {
    pub(crate) inner: lopdf::Document,
}

pub struct SpreadsheetDocument {
    pub kind: SpreadsheetKind,
    pub(crate) first_sheet: calamine::Range<calamine::Data>,
}

#[derive(Debug)]
pub struct DelimitedDocument {
    pub content: String,
}
