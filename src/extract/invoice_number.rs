use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Placeholder number recorded when neither the body nor the filename has one.
pub const UNRESOLVED_NUMBER: &str = "???";

static NUMBER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:№|No)\s*([0-9]+)").expect("invoice number marker pattern is valid")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Where a resolved invoice number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberSource {
    Body,
    Filename,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNumber {
    pub number: String,
    pub source: NumberSource,
}

/// Derive the invoice number for an upload.
///
/// The first `№`/`No` marker followed by digits in the space-joined body
/// wins; an earlier unrelated marker (a contract number, say) is taken as the
/// invoice number. Failing that, the first digit run in the filename, and
/// failing that [`UNRESOLVED_NUMBER`].
pub fn resolve_invoice_number<S: AsRef<str>>(tokens: &[S], filename: &str) -> ResolvedNumber {
    let body = tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    if let Some(number) = NUMBER_MARKER
        .captures(&body)
        .and_then(|captures| captures.get(1))
    {
        return ResolvedNumber {
            number: number.as_str().to_owned(),
            source: NumberSource::Body,
        };
    }

    if let Some(number) = DIGIT_RUN.find(filename) {
        return ResolvedNumber {
            number: number.as_str().to_owned(),
            source: NumberSource::Filename,
        };
    }

    ResolvedNumber {
        number: UNRESOLVED_NUMBER.to_owned(),
        source: NumberSource::Unresolved,
    }
}
