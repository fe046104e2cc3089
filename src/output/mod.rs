pub mod jsonl;

pub use jsonl::{write_json_line, write_jsonl};
