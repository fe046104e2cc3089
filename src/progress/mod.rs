pub mod reporter;

pub use reporter::{ProgressEvent, WarningEvent, report_progress, report_warning_code};
