use crate::model::InvoiceRecord;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Append-only log of processed invoice files.
pub trait InvoiceLog {
    fn append(&mut self, record: &InvoiceRecord) -> Result<(), String>;

    /// Every record, in append order.
    fn records(&self) -> Result<Vec<InvoiceRecord>, String>;
}

/// Invoice log stored as JSONL, one record per line.
#[derive(Debug, Clone)]
pub struct JsonlInvoiceLog {
    path: PathBuf,
}

impl JsonlInvoiceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InvoiceLog for JsonlInvoiceLog {
    fn append(&mut self, record: &InvoiceRecord) -> Result<(), String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "failed to create invoice log directory '{}': {error}",
                    parent.display()
                )
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|error| {
                format!(
                    "failed to open invoice log '{}': {error}",
                    self.path.display()
                )
            })?;

        let line = record.to_jsonl()?;
        file.write_all(line.as_bytes()).map_err(|error| {
            format!(
                "failed to append invoice record to '{}': {error}",
                self.path.display()
            )
        })?;
        file.flush().map_err(|error| {
            format!(
                "failed to flush invoice log '{}': {error}",
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn records(&self) -> Result<Vec<InvoiceRecord>, String> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(format!(
                    "failed to open invoice log '{}': {error}",
                    self.path.display()
                ));
            }
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_index, line_result) in reader.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line_result.map_err(|error| {
                format!(
                    "failed to read invoice log '{}' at line {}: {error}",
                    self.path.display(),
                    line_number
                )
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str::<InvoiceRecord>(&line).map_err(|error| {
                format!(
                    "invalid invoice record at '{}' line {}: {error}",
                    self.path.display(),
                    line_number
                )
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryInvoiceLog {
    pub records: Vec<InvoiceRecord>,
}

impl InvoiceLog for MemoryInvoiceLog {
    fn append(&mut self, record: &InvoiceRecord) -> Result<(), String> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<InvoiceRecord>, String> {
        Ok(self.records.clone())
    }
}
