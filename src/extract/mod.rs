pub mod candidates;
pub mod invoice_number;

pub use candidates::extract_candidates;
pub use invoice_number::{NumberSource, ResolvedNumber, UNRESOLVED_NUMBER, resolve_invoice_number};

use crate::document::DocumentFormat;

/// Candidate item names for a token sequence of the given format.
///
/// Only paginated documents go through table-row inference. Spreadsheet and
/// delimited-text tokens are already filtered per cell/fragment and are used
/// as candidates directly.
pub fn item_candidates(format: DocumentFormat, tokens: &[String]) -> Vec<String> {
    match format {
        DocumentFormat::TabularDocument => extract_candidates(tokens),
        DocumentFormat::Spreadsheet(_) | DocumentFormat::DelimitedText => tokens.to_vec(),
    }
}
