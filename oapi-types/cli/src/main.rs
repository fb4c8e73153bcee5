//! CLI for generating type declarations from OpenAPI/Swagger schemas.
//!
//! ## Usage
//!
//! ```bash
//! # Generate types from a Swagger 2.x or OpenAPI 3.x schema
//! openapi2types -i petstore.json -o src/types.ts
//!
//! # Only properties listed in `required` are non-optional
//! openapi2types -i petstore.json -o src/types.ts --required-policy openapi
//!
//! # Print the generated types instead of writing them
//! openapi2types -i petstore.json -o src/types.ts --dry-run
//! ```

mod console;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use oapi_types_lib::{GenerateConfig, RequiredPolicy, RunOutcome, TypesError, validate_input_path};
use owo_colors::Style;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::console::{ConsoleObserver, StatusStream};

/// Generate type declarations from an OpenAPI/Swagger JSON schema
#[derive(Parser, Debug)]
#[command(name = "openapi2types", version, about, long_about = None)]
struct Cli {
    /// JSON schema path
    #[arg(short, long, value_name = "SCHEMA_PATH", value_parser = validate_input_path)]
    input: PathBuf,

    /// Output path
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    output: PathBuf,

    /// How a definition's `required` list decides which properties are optional
    #[arg(long, value_enum, default_value_t = RequiredPolicyArg::Compat)]
    required_policy: RequiredPolicyArg,

    /// Print the generated types to stdout without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RequiredPolicyArg {
    /// Every property is required unless the definition lists others as required
    Compat,
    /// Only properties listed in `required` are required
    #[value(name = "openapi")]
    OpenApi,
}

impl From<RequiredPolicyArg> for RequiredPolicy {
    fn from(value: RequiredPolicyArg) -> Self {
        match value {
            RequiredPolicyArg::Compat => Self::Compat,
            RequiredPolicyArg::OpenApi => Self::OpenApi,
        }
    }
}

impl Cli {
    fn config(&self) -> GenerateConfig {
        GenerateConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            required_policy: self.required_policy.into(),
            dry_run: self.dry_run,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Types(#[from] TypesError),

    #[error("failed to print generated types: {0}")]
    Stdout(#[source] io::Error),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(config: &GenerateConfig, console: &mut ConsoleObserver) -> Result<RunOutcome, CliError> {
    let outcome = oapi_types_lib::run(config, console)?;

    if config.dry_run {
        io::stdout()
            .write_all(outcome.text.as_bytes())
            .map_err(CliError::Stdout)?;
    } else if let Some(path) = &outcome.output {
        let summary = format!(
            "Types have been saved to {} ({} written, {} skipped)",
            path.display(),
            outcome.written,
            outcome.skipped
        );
        console.line(&console.paint(summary, Style::new().bright_green()));
    }

    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    debug!(?config, "configuration resolved");

    let stream = if config.dry_run {
        StatusStream::Stderr
    } else {
        StatusStream::Stdout
    };
    let mut console = ConsoleObserver::new(stream);

    match execute(&config, &mut console) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", console.paint("error:", Style::new().red().bold()));
            ExitCode::FAILURE
        }
    }
}
