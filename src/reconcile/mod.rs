pub mod engine;
pub mod pipeline;

pub use engine::{EmptyExtraction, ModifiedDocument, Reconciliation, reconcile};
pub use pipeline::{Extraction, IngestOptions, IngestReport, Upload, extract_upload, ingest};
