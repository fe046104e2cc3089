use serde::Serialize;
use std::io::Write;

/// Write records to an output stream, one JSON object per line.
pub fn write_jsonl<T: Serialize>(out: &mut dyn Write, records: &[T]) -> Result<(), String> {
    for record in records {
        write_record(out, record)?;
    }

    out.flush()
        .map_err(|error| format!("failed to flush JSONL output: {error}"))?;

    Ok(())
}

/// Write a single record as one JSON line.
pub fn write_json_line<T: Serialize>(out: &mut dyn Write, record: &T) -> Result<(), String> {
    write_jsonl(out, std::slice::from_ref(record))
}

fn write_record<T: Serialize>(out: &mut dyn Write, record: &T) -> Result<(), String> {
    serde_json::to_writer(&mut *out, record)
        .map_err(|error| format!("failed to serialize JSON record: {error}"))?;
    out.write_all(b"\n")
        .map_err(|error| format!("failed to write JSONL newline: {error}"))
}
