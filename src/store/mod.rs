pub mod invoices;
pub mod query;
pub mod requests;

pub use invoices::{InvoiceLog, JsonlInvoiceLog, MemoryInvoiceLog};
pub use requests::{JsonRequestStore, MemoryRequestStore, RequestStore};

use std::path::{Path, PathBuf};

pub const REQUESTS_FILE: &str = "requests.json";
pub const INVOICES_FILE: &str = "invoices.jsonl";

/// Resolve the store directory from `$RECONCILE_STORE` or default.
pub fn store_dir() -> PathBuf {
    store_dir_from_env(|key| std::env::var(key).ok())
}

pub(crate) fn store_dir_from_env<F>(get_env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = get_env("RECONCILE_STORE")
        && !path.trim().is_empty()
    {
        return path.into();
    }

    if let Some(home) = get_env("HOME")
        && !home.trim().is_empty()
    {
        return PathBuf::from(home).join(".reconcile");
    }

    PathBuf::from(".reconcile")
}

/// File-backed request store and invoice log under one directory.
pub fn open_store(dir: &Path) -> (JsonRequestStore, JsonlInvoiceLog) {
    (
        JsonRequestStore::new(dir.join(REQUESTS_FILE)),
        JsonlInvoiceLog::new(dir.join(INVOICES_FILE)),
    )
}
