pub mod export;
pub mod stats;
pub mod views;

pub use export::{CSV_HEADER, export_csv};
pub use stats::{ApprovalStats, approval_stats, format_file_size};
pub use views::{RegistryFilter, departments, filter};
