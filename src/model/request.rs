use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organization scope a request document belongs to.
///
/// Fixed when the document is created; every reconciliation run is scoped to
/// exactly one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organization {
    #[serde(rename = "FERGANA")]
    Fergana,
    #[serde(rename = "UCHKUPRIK")]
    Uchkuprik,
}

impl Organization {
    pub fn as_str(self) -> &'static str {
        match self {
            Organization::Fergana => "FERGANA",
            Organization::Uchkuprik => "UCHKUPRIK",
        }
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organization {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "FERGANA" => Ok(Organization::Fergana),
            "UCHKUPRIK" => Ok(Organization::Uchkuprik),
            other => Err(format!(
                "unknown organization '{other}' (expected FERGANA or UCHKUPRIK)"
            )),
        }
    }
}

/// Tri-state approval. Persisted as `true` / `false` / `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Approval {
    Approved,
    Rejected,
    #[default]
    Pending,
}

impl From<Option<bool>> for Approval {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Approval::Approved,
            Some(false) => Approval::Rejected,
            None => Approval::Pending,
        }
    }
}

impl From<Approval> for Option<bool> {
    fn from(value: Approval) -> Self {
        match value {
            Approval::Approved => Some(true),
            Approval::Rejected => Some(false),
            Approval::Pending => None,
        }
    }
}

/// Insertion-ordered, duplicate-free list of invoice numbers linked to an item.
///
/// Only ever grows. Deserializing collapses repeated values, keeping the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct InvoiceNumbers(Vec<String>);

impl InvoiceNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, number: &str) -> bool {
        self.0.iter().any(|existing| existing == number)
    }

    /// Append `number` unless already present. Returns whether it was added.
    pub fn push_unique(&mut self, number: &str) -> bool {
        if self.contains(number) {
            return false;
        }
        self.0.push(number.to_owned());
        true
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Vec<String>> for InvoiceNumbers {
    fn from(values: Vec<String>) -> Self {
        let mut numbers = InvoiceNumbers::new();
        for value in &values {
            numbers.push_unique(value);
        }
        numbers
    }
}

impl From<InvoiceNumbers> for Vec<String> {
    fn from(value: InvoiceNumbers) -> Self {
        value.0
    }
}

/// One line of a purchase request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestItem {
    pub id: String,
    pub name: String,
    pub unit: String,
    /// Free text; not necessarily numeric ("2 шт", "по факту").
    pub qty: String,
    pub issue_date: String,
    pub details: String,
    pub invoice_numbers: InvoiceNumbers,
}

/// A purchase request with its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    pub id: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub object_name: String,
    pub org: Organization,
    #[serde(default)]
    pub items: Vec<RequestItem>,
    #[serde(default)]
    pub approved: Approval,
    #[serde(default)]
    pub approved_by: String,
    #[serde(default)]
    pub checked_by: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
}
