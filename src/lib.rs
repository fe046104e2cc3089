#![forbid(unsafe_code)]

pub mod cli;
pub mod document;
pub mod extract;
pub mod matching;
pub mod model;
pub mod output;
pub mod progress;
pub mod reconcile;
pub mod refusal;
pub mod registry;
pub mod store;

use cli::Outcome;
use refusal::{RefusalCode, RefusalEnvelope, build_envelope};
use serde::Serialize;
use serde_json::json;
use std::path::Path;

/// Run the reconcile CLI. Returns an exit code (0, 1, or 2).
pub fn run() -> u8 {
    use clap::Parser;
    use cli::{Cli, Command};

    // Parse CLI args (handles --version and --help via clap, then exits)
    let cli = Cli::parse();

    if cli.describe {
        return handle_describe();
    }

    let store_dir = cli.store.clone().unwrap_or_else(store::store_dir);

    let outcome = match cli.command {
        Some(Command::Ingest {
            file,
            org,
            format,
            dry_run,
        }) => handle_ingest(
            &file,
            org,
            format,
            &store_dir,
            reconcile::IngestOptions {
                dry_run,
                progress: cli.progress,
            },
        ),
        Some(Command::Extract { file, format }) => handle_extract(&file, format, cli.progress),
        Some(Command::Match { a, b }) => handle_match(&a, &b),
        Some(Command::Invoices { action }) => handle_invoices(action, &store_dir),
        Some(Command::Registry {
            org,
            department,
            search,
            csv,
        }) => handle_registry(
            org,
            registry::RegistryFilter {
                department,
                text: search,
            },
            csv.as_deref(),
            &store_dir,
        ),
        Some(Command::Stats { org }) => handle_stats(org, &store_dir),
        None => {
            eprintln!("Error: a subcommand is required (try --help)");
            Outcome::Refusal
        }
    };

    outcome.exit_code()
}

/// Handle --describe flag: print operator metadata and exit.
fn handle_describe() -> u8 {
    let operator = json!({
        "name": "reconcile",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Link invoice documents to purchase-request items by soft name matching",
        "author": "CMD+RVL",
        "pipeline_role": "reconciler",
        "input_format": "pdf | xlsx | xls | csv | txt",
        "output_format": "JSON",
        "stdin_support": false,
        "file_support": true,
        "refusal_codes": [
            RefusalCode::UnsupportedFormat.as_str(),
            RefusalCode::DocumentParse.as_str(),
            RefusalCode::EmptyExtraction.as_str(),
            RefusalCode::BadInput.as_str(),
            RefusalCode::Store.as_str(),
        ],
        "warning_codes": [
            reconcile::pipeline::W_NO_INVOICE_NUMBER,
            reconcile::pipeline::W_NO_MATCHES,
            reconcile::pipeline::W_SPARSE_TEXT,
        ]
    });

    if let Ok(json) = serde_json::to_string_pretty(&operator) {
        println!("{}", json);
        0
    } else {
        eprintln!("Error: Failed to serialize operator metadata");
        2
    }
}

fn handle_ingest(
    file: &Path,
    org: model::Organization,
    format: Option<String>,
    store_dir: &Path,
    options: reconcile::IngestOptions,
) -> Outcome {
    let upload = match read_upload(file, format) {
        Ok(upload) => upload,
        Err(refusal) => return refuse(&refusal),
    };

    let (mut requests, mut invoices) = store::open_store(store_dir);
    match reconcile::ingest(&upload, org, &mut requests, &mut invoices, &options) {
        Ok(report) => {
            let found = report.matches_found > 0;
            emit(&report, found)
        }
        Err(refusal) => refuse(&refusal),
    }
}

fn handle_extract(file: &Path, format: Option<String>, progress: bool) -> Outcome {
    let upload = match read_upload(file, format) {
        Ok(upload) => upload,
        Err(refusal) => return refuse(&refusal),
    };

    let options = reconcile::IngestOptions {
        dry_run: true,
        progress,
    };
    match reconcile::extract_upload(&upload, &options) {
        Ok(extraction) => {
            let found = !extraction.candidates.is_empty();
            emit(&extraction, found)
        }
        Err(refusal) => refuse(&refusal),
    }
}

fn handle_match(a: &str, b: &str) -> Outcome {
    let matched = matching::soft_match(a, b);
    println!("{matched}");
    Outcome::from_found(matched)
}

fn handle_invoices(action: Option<cli::InvoicesAction>, store_dir: &Path) -> Outcome {
    use cli::InvoicesAction;
    use store::query;

    let (_, log) = store::open_store(store_dir);

    match action.unwrap_or(InvoicesAction::List { search: None }) {
        InvoicesAction::List { search } => {
            let records = match search.as_deref() {
                Some(text) => query::search(&log, text),
                None => query::query(&log),
            };
            match records {
                Ok(records) => {
                    let found = !records.is_empty();
                    emit_lines(&records, found)
                }
                Err(error) => refuse(&store_refusal(store_dir, error)),
            }
        }
        InvoicesAction::Last => match query::last(&log) {
            Ok(Some(record)) => emit(&record, true),
            Ok(None) => {
                eprintln!("No invoice records found");
                Outcome::NoMatch
            }
            Err(error) => refuse(&store_refusal(store_dir, error)),
        },
        InvoicesAction::Count => match query::count(&log) {
            Ok(count) => {
                println!("{}", count);
                Outcome::Matched
            }
            Err(error) => refuse(&store_refusal(store_dir, error)),
        },
    }
}

fn handle_registry(
    org: model::Organization,
    filter: registry::RegistryFilter,
    csv_out: Option<&Path>,
    store_dir: &Path,
) -> Outcome {
    use store::RequestStore;

    let (requests, _) = store::open_store(store_dir);
    let documents = match requests.load_all() {
        Ok(documents) => documents,
        Err(error) => return refuse(&store_refusal(store_dir, error)),
    };
    let selected = registry::filter(&documents, org, &filter);

    let Some(csv_path) = csv_out else {
        let found = !selected.is_empty();
        return emit_lines(&selected, found);
    };

    match write_csv_export(csv_path, selected.iter().copied()) {
        Ok(rows) => emit(
            &json!({
                "csv": csv_path.display().to_string(),
                "org": org,
                "documents": selected.len(),
                "rows": rows,
            }),
            rows > 0,
        ),
        Err(error) => refuse(&build_envelope(
            RefusalCode::BadInput,
            json!({ "path": csv_path.display().to_string(), "error": error }),
            None,
        )),
    }
}

fn handle_stats(org: model::Organization, store_dir: &Path) -> Outcome {
    use store::{InvoiceLog, RequestStore};

    let (requests, log) = store::open_store(store_dir);
    let documents = match requests.get_all(org) {
        Ok(documents) => documents,
        Err(error) => return refuse(&store_refusal(store_dir, error)),
    };
    let invoices = match log.records() {
        Ok(records) => records,
        Err(error) => return refuse(&store_refusal(store_dir, error)),
    };

    let stats = registry::approval_stats(&documents);
    let invoice_bytes: u64 = invoices.iter().map(|record| record.size).sum();
    emit(
        &json!({
            "org": org,
            "departments": registry::departments(&documents),
            "approved": stats.approved,
            "rejected": stats.rejected,
            "pending": stats.pending,
            "total": stats.total(),
            "invoice_files": invoices.len(),
            "invoice_size": registry::format_file_size(invoice_bytes),
        }),
        stats.total() > 0,
    )
}

fn read_upload(file: &Path, format: Option<String>) -> Result<reconcile::Upload, RefusalEnvelope> {
    let bytes = std::fs::read(file).map_err(|error| {
        build_envelope(
            RefusalCode::BadInput,
            json!({
                "path": file.display().to_string(),
                "error": format!("failed to read input file: {error}"),
            }),
            None,
        )
    })?;
    let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    Ok(reconcile::Upload {
        filename,
        bytes,
        declared_format: format,
    })
}

fn write_csv_export<'a>(
    path: &Path,
    documents: impl IntoIterator<Item = &'a model::RequestDocument>,
) -> Result<usize, String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|error| {
            format!("failed to create directory '{}': {error}", parent.display())
        })?;
    }
    let mut file = std::fs::File::create(path)
        .map_err(|error| format!("failed to create CSV file '{}': {error}", path.display()))?;
    registry::export_csv(documents, &mut file)
}

fn store_refusal(store_dir: &Path, error: String) -> RefusalEnvelope {
    build_envelope(
        RefusalCode::Store,
        json!({ "store": store_dir.display().to_string(), "error": error }),
        None,
    )
}

/// Print a single JSON line to stdout.
fn emit<T: Serialize>(record: &T, found: bool) -> Outcome {
    let mut stdout = std::io::stdout().lock();
    match output::write_json_line(&mut stdout, record) {
        Ok(()) => Outcome::from_found(found),
        Err(error) => {
            eprintln!("Error: {error}");
            Outcome::Refusal
        }
    }
}

/// Print records to stdout as JSONL.
fn emit_lines<T: Serialize>(records: &[T], found: bool) -> Outcome {
    let mut stdout = std::io::stdout().lock();
    match output::write_jsonl(&mut stdout, records) {
        Ok(()) => Outcome::from_found(found),
        Err(error) => {
            eprintln!("Error: {error}");
            Outcome::Refusal
        }
    }
}

/// Print a refusal envelope to stdout.
fn refuse(refusal: &RefusalEnvelope) -> Outcome {
    if let Ok(json) = serde_json::to_string(refusal) {
        println!("{}", json);
    }
    Outcome::Refusal
}
