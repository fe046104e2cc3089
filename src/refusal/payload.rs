use crate::refusal::codes::RefusalCode;
use serde::Serialize;
use serde_json::Value;

/// Version tag carried by every envelope and report this tool prints.
pub const OUTPUT_VERSION: &str = "reconcile.v0";

/// Refusal envelope emitted to stdout on exit 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefusalEnvelope {
    pub version: String,
    pub outcome: String,
    pub refusal: RefusalBody,
}

/// Detail within a refusal envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefusalBody {
    pub code: RefusalCode,
    pub message: String,
    pub detail: Value,
    pub next_command: Option<String>,
}

pub fn build_envelope(
    code: RefusalCode,
    detail: Value,
    next_command: Option<String>,
) -> RefusalEnvelope {
    RefusalEnvelope {
        version: OUTPUT_VERSION.to_owned(),
        outcome: "REFUSAL".to_owned(),
        refusal: RefusalBody {
            code,
            message: code.message().to_owned(),
            detail,
            next_command,
        },
    }
}

impl RefusalEnvelope {
    pub fn code(&self) -> RefusalCode {
        self.refusal.code
    }

    pub fn to_value(&self) -> Result<Value, String> {
        serde_json::to_value(self)
            .map_err(|error| format!("failed to serialize refusal envelope: {error}"))
    }
}
