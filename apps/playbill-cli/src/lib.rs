//! # playbill-cli
//!
//! Loads a play catalog and invoices from JSON and prints one statement per
//! invoice.
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Resolve configuration (env + defaults)
//! 3. Initialize tracing (stderr, so stdout stays the report)
//! 4. Load `plays.json` and `invoices.json`
//! 5. Compute and render every statement
//!
//! ## Fixture Shapes
//! ```text
//! plays.json     { "hamlet": { "name": "Hamlet", "type": "tragedy" }, ... }
//! invoices.json  [ { "customer": "BigCo",
//!                    "performances": [ { "playID": "hamlet", "audience": 55 } ] } ]
//! ```

pub mod config;
pub mod error;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use playbill_core::{
    compute_statement, Html, Invoice, PlainText, PlayCatalog, StatementData, StatementRenderer,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

/// Command-line flags.
#[derive(Parser, Debug, Default)]
#[command(name = "playbill", version, about = "Print theater billing statements")]
pub struct Cli {
    /// Play catalog (defaults to <data dir>/plays.json)
    #[arg(long)]
    pub plays: Option<PathBuf>,

    /// Invoice list (defaults to <data dir>/invoices.json)
    #[arg(long)]
    pub invoices: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only print the statement for this customer
    #[arg(long)]
    pub customer: Option<String>,
}

/// Binary entry point.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(&err);
        }
    };

    init_tracing(&config.log_filter);

    match execute(&cli, &config) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()) {
                error!("Failed to write output: {}", err);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = ?err.code(), "{}", err);
            eprintln!("{}", err);
            ExitCode::from(&err)
        }
    }
}

/// Loads fixtures, computes every selected statement, renders them.
///
/// Any failing invoice aborts the run; nothing is printed for the others.
pub fn execute(cli: &Cli, config: &CliConfig) -> Result<String, CliError> {
    let plays_path = cli.plays.clone().unwrap_or_else(|| config.plays_path());
    let invoices_path = cli.invoices.clone().unwrap_or_else(|| config.invoices_path());
    let format = cli.format.unwrap_or(config.format);

    let plays: PlayCatalog = load_json(&plays_path)?;
    let invoices: Vec<Invoice> = load_json(&invoices_path)?;
    info!(
        plays = plays.len(),
        invoices = invoices.len(),
        "Fixtures loaded"
    );

    let selected: Vec<&Invoice> = match &cli.customer {
        Some(customer) => {
            let matching: Vec<&Invoice> =
                invoices.iter().filter(|i| &i.customer == customer).collect();
            if matching.is_empty() {
                return Err(CliError::CustomerNotFound(customer.clone()));
            }
            matching
        }
        None => invoices.iter().collect(),
    };

    let statements = selected
        .into_iter()
        .map(|invoice| compute_statement(invoice, &plays))
        .collect::<Result<Vec<_>, _>>()?;

    render(&statements, format, config)
}

fn render(
    statements: &[StatementData],
    format: OutputFormat,
    config: &CliConfig,
) -> Result<String, CliError> {
    let renderer: Box<dyn StatementRenderer> = match format {
        OutputFormat::Text => Box::new(PlainText::new(config.currency.clone())),
        OutputFormat::Html => Box::new(Html::new(config.currency.clone())),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(statements).map_err(CliError::Serialize)?;
            json.push('\n');
            return Ok(json);
        }
    };

    let rendered: Vec<String> = statements.iter().map(|s| renderer.render(s)).collect();
    Ok(rendered.join("\n"))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    debug!(path = %path.display(), "Loading fixture");

    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Installs the fmt subscriber on stderr.
///
/// ## Log Levels
/// - `PLAYBILL_LOG=debug` - per-performance enrichment lines
/// - Default: `info,playbill=debug`
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
