use crate::model::InvoiceRecord;
use crate::store::InvoiceLog;

/// All invoice records, newest upload first.
pub fn query(log: &dyn InvoiceLog) -> Result<Vec<InvoiceRecord>, String> {
    let mut records = log.records()?;
    // Stable sort on RFC 3339 strings; equal timestamps keep newest-appended first.
    records.reverse();
    records.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
    Ok(records)
}

/// The most recently appended invoice record.
pub fn last(log: &dyn InvoiceLog) -> Result<Option<InvoiceRecord>, String> {
    let mut records = log.records()?;
    Ok(records.pop())
}

pub fn count(log: &dyn InvoiceLog) -> Result<u64, String> {
    Ok(log.records()?.len() as u64)
}

/// Records whose number or filename contains `text` (case-insensitive),
/// newest upload first. Blank text matches everything.
pub fn search(log: &dyn InvoiceLog, text: &str) -> Result<Vec<InvoiceRecord>, String> {
    let needle = text.trim().to_lowercase();
    Ok(query(log)?
        .into_iter()
        .filter(|record| {
            needle.is_empty()
                || record.number.to_lowercase().contains(&needle)
                || record.filename.to_lowercase().contains(&needle)
        })
        .collect())
}
