use crate::model::Organization;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reconcile", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Store directory holding requests.json and invoices.jsonl
    /// (default: $RECONCILE_STORE, then ~/.reconcile)
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Emit progress to stderr
    #[arg(long, global = true)]
    pub progress: bool,

    /// Print operator.json and exit
    #[arg(long)]
    pub describe: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile an invoice file against the organization's request items
    Ingest {
        /// Invoice document (.pdf, .xlsx, .xls, .csv, .txt)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Organization scope (FERGANA or UCHKUPRIK)
        #[arg(long)]
        org: Organization,

        /// Override the format implied by the file extension
        #[arg(long, value_name = "TAG")]
        format: Option<String>,

        /// Report what would change without writing the store
        #[arg(long)]
        dry_run: bool,
    },
    /// Print tokens, invoice number and candidates for a file
    Extract {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Override the format implied by the file extension
        #[arg(long, value_name = "TAG")]
        format: Option<String>,
    },
    /// Soft-match two item names
    Match {
        a: String,
        b: String,
    },
    /// Query the invoice log
    Invoices {
        #[command(subcommand)]
        action: Option<InvoicesAction>,
    },
    /// List or export the organization's request registry
    Registry {
        #[arg(long)]
        org: Organization,

        /// Exact department name
        #[arg(long)]
        department: Option<String>,

        /// Case-insensitive text over applicant, number and item names
        #[arg(long)]
        search: Option<String>,

        /// Write item rows as CSV to this file instead of listing documents
        #[arg(long, value_name = "OUT")]
        csv: Option<PathBuf>,
    },
    /// Approval counts for the organization's requests
    Stats {
        #[arg(long)]
        org: Organization,
    },
}

#[derive(Subcommand)]
pub enum InvoicesAction {
    /// List invoice records, newest first
    List {
        /// Case-insensitive text over invoice number and filename
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the last appended invoice record
    Last,
    /// Count invoice records
    Count,
}
