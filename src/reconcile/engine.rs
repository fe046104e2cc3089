use crate::matching::matches_any;
use crate::model::{Organization, RequestDocument};
use serde::Serialize;
use std::fmt;

/// Items of one request document that picked up the invoice number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifiedDocument {
    pub document_id: String,
    pub item_ids: Vec<String>,
}

/// Result of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The full collection, other organizations' documents included.
    pub documents: Vec<RequestDocument>,
    /// Items that newly received the invoice number in this run.
    pub matches_found: usize,
    pub modified: Vec<ModifiedDocument>,
}

/// Nothing was extracted from the upload, so there is nothing to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyExtraction;

impl fmt::Display for EmptyExtraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no item candidates were extracted from the document")
    }
}

/// Link `invoice_number` to every item of `org` whose name soft-matches one
/// of `candidates`.
///
/// Takes the whole collection and returns the whole collection. Documents of
/// other organizations are passed through untouched, and an item that already
/// carries the number is left alone, so running the same upload twice changes
/// nothing the second time.
pub fn reconcile(
    documents: Vec<RequestDocument>,
    org: Organization,
    invoice_number: &str,
    candidates: &[String],
) -> Result<Reconciliation, EmptyExtraction> {
    if candidates.is_empty() {
        return Err(EmptyExtraction);
    }

    let mut matches_found = 0;
    let mut modified = Vec::new();
    let mut updated = Vec::with_capacity(documents.len());

    for mut document in documents {
        if document.org != org {
            updated.push(document);
            continue;
        }

        let mut item_ids = Vec::new();
        for item in &mut document.items {
            if item.invoice_numbers.contains(invoice_number)
                || !matches_any(&item.name, candidates)
            {
                continue;
            }
            item.invoice_numbers.push_unique(invoice_number);
            item_ids.push(item.id.clone());
        }

        if !item_ids.is_empty() {
            matches_found += item_ids.len();
            modified.push(ModifiedDocument {
                document_id: document.id.clone(),
                item_ids,
            });
        }
        updated.push(document);
    }

    Ok(Reconciliation {
        documents: updated,
        matches_found,
        modified,
    })
}
