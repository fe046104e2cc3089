use crate::model::{Organization, RequestDocument};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistence for the request collection.
///
/// Reconciliation always reads the whole collection and writes back a full
/// replacement; there is no incremental update.
pub trait RequestStore {
    fn load_all(&self) -> Result<Vec<RequestDocument>, String>;

    fn replace_all(&mut self, documents: &[RequestDocument]) -> Result<(), String>;

    /// Documents of one organization, in stored order.
    fn get_all(&self, org: Organization) -> Result<Vec<RequestDocument>, String> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|document| document.org == org)
            .collect())
    }
}

/// Request collection kept as a single JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonRequestStore {
    path: PathBuf,
}

impl JsonRequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RequestStore for JsonRequestStore {
    /// A missing file is an empty collection.
    fn load_all(&self) -> Result<Vec<RequestDocument>, String> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(format!(
                    "failed to read request store '{}': {error}",
                    self.path.display()
                ));
            }
        };

        serde_json::from_slice(&content).map_err(|error| {
            format!(
                "invalid request store JSON at '{}': {error}",
                self.path.display()
            )
        })
    }

    /// Written to a sibling `.tmp` file, then renamed over the store.
    fn replace_all(&mut self, documents: &[RequestDocument]) -> Result<(), String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "failed to create store directory '{}': {error}",
                    parent.display()
                )
            })?;
        }

        let encoded = serde_json::to_vec_pretty(documents)
            .map_err(|error| format!("failed to serialize request store: {error}"))?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, encoded).map_err(|error| {
            format!(
                "failed to write request store '{}': {error}",
                temp_path.display()
            )
        })?;
        fs::rename(&temp_path, &self.path).map_err(|error| {
            format!(
                "failed to replace request store '{}': {error}",
                self.path.display()
            )
        })
    }
}

/// In-memory request collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryRequestStore {
    pub documents: Vec<RequestDocument>,
}

impl MemoryRequestStore {
    pub fn new(documents: Vec<RequestDocument>) -> Self {
        Self { documents }
    }
}

impl RequestStore for MemoryRequestStore {
    fn load_all(&self) -> Result<Vec<RequestDocument>, String> {
        Ok(self.documents.clone())
    }

    fn replace_all(&mut self, documents: &[RequestDocument]) -> Result<(), String> {
        self.documents = documents.to_vec();
        Ok(())
    }
}
