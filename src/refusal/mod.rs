pub mod codes;
pub mod payload;

pub use codes::RefusalCode;
pub use payload::{OUTPUT_VERSION, RefusalBody, RefusalEnvelope, build_envelope};
