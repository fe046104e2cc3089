/// Command outcome determining exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reconciled with at least one match, or a query that found something (exit 0).
    Matched,
    /// Reconciled with zero matches, a non-match, or an empty query (exit 1).
    NoMatch,
    /// Refusal or CLI error (exit 2).
    Refusal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Matched => 0,
            Outcome::NoMatch => 1,
            Outcome::Refusal => 2,
        }
    }

    pub fn from_found(found: bool) -> Self {
        if found {
            Outcome::Matched
        } else {
            Outcome::NoMatch
        }
    }
}
