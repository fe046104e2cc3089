use crate::model::{Organization, RequestDocument};
use std::collections::BTreeSet;

/// Registry filter. Empty fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct RegistryFilter {
    pub department: Option<String>,
    pub text: Option<String>,
}

/// Sorted distinct non-empty departments.
pub fn departments(documents: &[RequestDocument]) -> Vec<String> {
    documents
        .iter()
        .map(|document| document.department.as_str())
        .filter(|department| !department.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Documents of `org` passing `filter`, in stored order.
///
/// The department must match exactly. Search text matches the applicant or
/// any item name case-insensitively, or appears verbatim in the request
/// number.
pub fn filter<'a>(
    documents: &'a [RequestDocument],
    org: Organization,
    filter: &RegistryFilter,
) -> Vec<&'a RequestDocument> {
    let department = filter.department.as_deref().filter(|value| !value.is_empty());
    let needle = filter
        .text
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase);

    documents
        .iter()
        .filter(|document| document.org == org)
        .filter(|document| department.is_none_or(|department| document.department == department))
        .filter(|document| match &needle {
            Some(needle) => matches_text(document, needle),
            None => true,
        })
        .collect()
}

fn matches_text(document: &RequestDocument, needle: &str) -> bool {
    document.applicant.to_lowercase().contains(needle)
        || document.number.contains(needle)
        || document
            .items
            .iter()
            .any(|item| item.name.to_lowercase().contains(needle))
}
