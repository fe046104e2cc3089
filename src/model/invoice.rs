use blake3::Hasher;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One processed invoice file. Records are appended once and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: String,
    #[serde(rename = "name")]
    pub filename: String,
    pub number: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    /// RFC 3339 timestamp of the ingestion.
    pub upload_date: String,
}

#[derive(Serialize)]
struct InvoiceRecordIdPayload<'a> {
    filename: &'a str,
    number: &'a str,
    size: u64,
    content_hash: &'a str,
    upload_date: &'a str,
}

impl InvoiceRecord {
    /// Build a record for a successfully ingested file.
    ///
    /// The id is a blake3 digest over the file content hash and the record
    /// fields, so two uploads of the same file at different times get
    /// distinct ids.
    pub fn new(
        filename: impl Into<String>,
        number: impl Into<String>,
        size: u64,
        content: &[u8],
        upload_date: impl Into<String>,
    ) -> Result<Self, String> {
        let filename = filename.into();
        let number = number.into();
        let upload_date = upload_date.into();
        let content_hash = blake3::hash(content).to_hex().to_string();

        let payload = InvoiceRecordIdPayload {
            filename: &filename,
            number: &number,
            size,
            content_hash: &content_hash,
            upload_date: &upload_date,
        };
        let encoded = serde_json::to_vec(&payload)
            .map_err(|error| format!("failed to encode invoice record ID payload: {error}"))?;
        let mut hasher = Hasher::new();
        hasher.update(&encoded);

        Ok(Self {
            id: format!("blake3:{}", hasher.finalize().to_hex()),
            file_type: file_type_tag(&filename),
            filename,
            number,
            size,
            upload_date,
        })
    }

    pub fn to_jsonl(&self) -> Result<String, String> {
        let json = serde_json::to_string(self)
            .map_err(|error| format!("failed to serialize invoice record: {error}"))?;
        Ok(format!("{json}\n"))
    }
}

/// File-type tag recorded for an upload: the lowercased extension, or `unknown`.
pub fn file_type_tag(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|extension| extension.to_str())
        .filter(|extension| !extension.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "unknown".to_owned())
}
