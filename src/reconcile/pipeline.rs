use crate::document::dispatch::{SUPPORTED_FORMAT_TAGS, format_from_tag};
use crate::document::{Document, DocumentFormat, format_from_filename, open_document_with_format};
use crate::extract::{NumberSource, ResolvedNumber, item_candidates, resolve_invoice_number};
use crate::model::{InvoiceRecord, Organization};
use crate::progress::{ProgressEvent, WarningEvent, report_progress, report_warning_code};
use crate::reconcile::engine::{ModifiedDocument, reconcile};
use crate::refusal::{OUTPUT_VERSION, RefusalCode, RefusalEnvelope, build_envelope};
use crate::store::{InvoiceLog, RequestStore};
use serde::Serialize;
use serde_json::json;
use std::time::Instant;

pub const W_NO_INVOICE_NUMBER: &str = "W_NO_INVOICE_NUMBER";
pub const W_NO_MATCHES: &str = "W_NO_MATCHES";
pub const W_SPARSE_TEXT: &str = "W_SPARSE_TEXT";

/// One uploaded file.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Uploaded file name; its extension picks the format and its digits are
    /// the invoice-number fallback.
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Explicit format tag overriding the extension.
    pub declared_format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Compute everything but leave the request store and invoice log alone.
    pub dry_run: bool,
    /// Emit page progress events to stderr.
    pub progress: bool,
}

/// Everything read out of an upload before any store is touched.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub file: String,
    pub format: String,
    pub invoice_number: String,
    pub invoice_number_source: NumberSource,
    pub tokens: Vec<String>,
    pub candidates: Vec<String>,
    #[serde(skip)]
    pub warnings: Vec<WarningEvent>,
}

/// Outcome line printed after a completed ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub version: String,
    pub outcome: String,
    pub file: String,
    pub org: Organization,
    pub format: String,
    pub invoice_number: String,
    pub invoice_number_source: NumberSource,
    pub candidates: Vec<String>,
    pub matches_found: usize,
    pub documents_modified: Vec<ModifiedDocument>,
    /// Id of the appended invoice record; absent on a dry run.
    pub invoice_id: Option<String>,
    pub dry_run: bool,
    pub warnings: Vec<WarningEvent>,
}

/// Parse an upload and derive its invoice number and item candidates.
///
/// Fails with `E_UNSUPPORTED_FORMAT` for an unknown declared tag and
/// `E_DOCUMENT_PARSE` when the bytes do not decode as the chosen format.
pub fn extract_upload(upload: &Upload, options: &IngestOptions) -> Result<Extraction, RefusalEnvelope> {
    let format = resolve_format(upload)?;
    let document = open_document_with_format(upload.bytes.clone(), format).map_err(|error| {
        parse_refusal(&upload.filename, format, error)
    })?;

    let started = Instant::now();
    let tokens = document
        .tokens_with_progress(&mut |processed, total| {
            if options.progress {
                report_progress(&ProgressEvent::new(
                    &upload.filename,
                    "extract",
                    processed,
                    Some(total),
                    started,
                ));
            }
        })
        .map_err(|error| parse_refusal(&upload.filename, format, error))?;

    let mut warnings = Vec::new();
    if let Some(message) = sparse_text_message(&document, tokens.len()) {
        warn(&mut warnings, &upload.filename, W_SPARSE_TEXT, &message);
    }

    let ResolvedNumber { number, source } = resolve_invoice_number(&tokens, &upload.filename);
    if source == NumberSource::Unresolved {
        warn(
            &mut warnings,
            &upload.filename,
            W_NO_INVOICE_NUMBER,
            &format!("no invoice number in document body or filename; recording '{number}'"),
        );
    }

    let candidates = item_candidates(format, &tokens);

    Ok(Extraction {
        file: upload.filename.clone(),
        format: format.to_string(),
        invoice_number: number,
        invoice_number_source: source,
        tokens,
        candidates,
        warnings,
    })
}

/// Reconcile one upload against the request collection for `org`.
///
/// Nothing is written unless extraction and reconciliation both succeed. On
/// success the updated collection is stored (when any item changed) and one
/// invoice record is appended, even when nothing matched. A failed append
/// restores the collection as it was loaded.
pub fn ingest(
    upload: &Upload,
    org: Organization,
    requests: &mut dyn RequestStore,
    invoices: &mut dyn InvoiceLog,
    options: &IngestOptions,
) -> Result<IngestReport, RefusalEnvelope> {
    let Extraction {
        file,
        format,
        invoice_number,
        invoice_number_source,
        tokens,
        candidates,
        mut warnings,
    } = extract_upload(upload, options)?;

    let documents = requests.load_all().map_err(store_refusal)?;
    let previous = if options.dry_run {
        Vec::new()
    } else {
        documents.clone()
    };
    let reconciliation =
        reconcile(documents, org, &invoice_number, &candidates).map_err(|error| {
            build_envelope(
                RefusalCode::EmptyExtraction,
                json!({
                    "file": file,
                    "format": format,
                    "tokens": tokens.len(),
                    "error": error.to_string(),
                }),
                None,
            )
        })?;

    if reconciliation.matches_found == 0 {
        warn(
            &mut warnings,
            &file,
            W_NO_MATCHES,
            &format!(
                "{} candidates matched no {org} request items",
                candidates.len()
            ),
        );
    }

    let mut invoice_id = None;
    if !options.dry_run {
        let record = InvoiceRecord::new(
            file.as_str(),
            invoice_number.as_str(),
            upload.bytes.len() as u64,
            &upload.bytes,
            chrono::Utc::now().to_rfc3339(),
        )
        .map_err(store_refusal)?;

        let replaced = !reconciliation.modified.is_empty();
        if replaced {
            requests
                .replace_all(&reconciliation.documents)
                .map_err(store_refusal)?;
        }
        if let Err(error) = invoices.append(&record) {
            if replaced && let Err(restore_error) = requests.replace_all(&previous) {
                return Err(store_refusal(format!(
                    "{error}; failed to restore request store: {restore_error}"
                )));
            }
            return Err(store_refusal(error));
        }
        invoice_id = Some(record.id);
    }

    Ok(IngestReport {
        version: OUTPUT_VERSION.to_owned(),
        outcome: "RECONCILED".to_owned(),
        file,
        org,
        format,
        invoice_number,
        invoice_number_source,
        candidates,
        matches_found: reconciliation.matches_found,
        documents_modified: reconciliation.modified,
        invoice_id,
        dry_run: options.dry_run,
        warnings,
    })
}

fn resolve_format(upload: &Upload) -> Result<DocumentFormat, RefusalEnvelope> {
    match upload.declared_format.as_deref() {
        Some(tag) => format_from_tag(tag).map_err(|error| {
            build_envelope(
                RefusalCode::UnsupportedFormat,
                json!({
                    "file": upload.filename,
                    "format": tag,
                    "supported": SUPPORTED_FORMAT_TAGS,
                    "error": error,
                }),
                Some(format!(
                    "reconcile extract '{}' --format pdf",
                    upload.filename
                )),
            )
        }),
        None => Ok(format_from_filename(&upload.filename)),
    }
}

fn parse_refusal(filename: &str, format: DocumentFormat, error: String) -> RefusalEnvelope {
    build_envelope(
        RefusalCode::DocumentParse,
        json!({
            "file": filename,
            "format": format.to_string(),
            "error": error,
        }),
        None,
    )
}

fn store_refusal(error: String) -> RefusalEnvelope {
    build_envelope(RefusalCode::Store, json!({ "error": error }), None)
}

fn sparse_text_message(document: &Document, token_count: usize) -> Option<String> {
    let Document::Pdf(pdf) = document else {
        return None;
    };
    let page_count = pdf.page_count();
    if page_count > 0 && token_count == 0 {
        Some(format!(
            "PDF has {page_count} pages but no extractable text; possibly a scanned document"
        ))
    } else {
        None
    }
}

fn warn(warnings: &mut Vec<WarningEvent>, path: &str, code: &str, message: &str) {
    report_warning_code(path, Some(code), message);
    warnings.push(WarningEvent::new(path, Some(code), message));
}
