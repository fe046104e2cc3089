pub mod args;
pub mod exit;

pub use args::{Cli, Command, InvoicesAction};
pub use exit::Outcome;
