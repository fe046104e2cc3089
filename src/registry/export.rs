use crate::model::RequestDocument;
use std::io::Write;

pub const CSV_HEADER: [&str; 9] = [
    "No",
    "Applicant",
    "Date",
    "Item",
    "Unit",
    "Qty",
    "Details",
    "Object",
    "Invoice",
];

/// Write one CSV row per request item, every field quoted. Linked invoice
/// numbers are joined with `", "`. Returns the number of item rows written.
pub fn export_csv<'a, I>(documents: I, out: &mut dyn Write) -> Result<usize, String>
where
    I: IntoIterator<Item = &'a RequestDocument>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);
    writer
        .write_record(CSV_HEADER)
        .map_err(|error| format!("failed to write CSV header: {error}"))?;

    let mut rows = 0;
    for document in documents {
        for item in &document.items {
            let invoices = item.invoice_numbers.join(", ");
            writer
                .write_record([
                    document.number.as_str(),
                    document.applicant.as_str(),
                    document.date.as_str(),
                    item.name.as_str(),
                    item.unit.as_str(),
                    item.qty.as_str(),
                    item.details.as_str(),
                    document.object_name.as_str(),
                    invoices.as_str(),
                ])
                .map_err(|error| {
                    format!(
                        "failed to write CSV row for request '{}': {error}",
                        document.number
                    )
                })?;
            rows += 1;
        }
    }

    writer
        .flush()
        .map_err(|error| format!("failed to flush CSV output: {error}"))?;
    Ok(rows)
}
