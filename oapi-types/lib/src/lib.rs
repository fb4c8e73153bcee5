//! Type declaration generator for OpenAPI/Swagger JSON schemas.
//!
//! Reads one schema document and emits a text file of `export type`
//! declarations, one per named definition:
//!
//! - Swagger/OpenAPI 2.x documents are read from `definitions`
//! - OpenAPI 3.x documents are read from `components.schemas`
//!
//! ## Modules
//!
//! - [`schema`] - Serde model of the consumed parts of a document
//! - [`loader`] - Reading and parsing the schema file
//! - [`generate`] - Version dispatch and whole-document generation
//! - [`emit`] - Text emission for individual definitions and properties
//! - [`events`] - Progress events and observers
//! - [`config`] - Run configuration and argument validation
//! - [`output`] - Atomic file writing
//!
//! ## Example Usage
//!
//! ```
//! use oapi_types_lib::{NullObserver, RequiredPolicy, generate_types, loader::parse_schema};
//!
//! let schema = parse_schema(r#"{"swagger":"2.0","definitions":{"pet":{"properties":{"name":{"type":"string"}}}}}"#)
//!     .unwrap()
//!     .unwrap();
//! let generation = generate_types(&schema, RequiredPolicy::Compat, &mut NullObserver);
//!
//! assert_eq!(generation.text, "export type Pet = {\n\tname: string;\n}\n\n");
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod events;
pub mod generate;
pub mod loader;
pub mod output;
pub mod schema;

use std::path::PathBuf;

use tracing::{debug, info};

pub use config::{GenerateConfig, RequiredPolicy, validate_input_path};
pub use error::TypesError;
pub use events::{EntryKind, GenerationEvent, GenerationObserver, NullObserver, TracingObserver};
pub use generate::{Generation, generate_types};
pub use schema::{DefinitionSource, SchemaDocument, SchemaVersion};

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// The generated declarations (also returned in dry-run mode).
    pub text: String,
    /// Number of declarations written.
    pub written: usize,
    /// Number of entries that produced no declaration.
    pub skipped: usize,
    /// The file that was written, if any.
    pub output: Option<PathBuf>,
}

/// Loads the configured schema, generates types and writes the output file.
///
/// The output file is only written when a definitions mapping was found; an
/// empty schema, an unsupported version, or a missing/empty mapping leaves
/// the output path untouched. In dry-run mode nothing is written.
///
/// ## Errors
///
/// Returns an error if the schema cannot be read or parsed, or if the output
/// file cannot be written.
pub fn run(
    config: &GenerateConfig,
    observer: &mut dyn GenerationObserver,
) -> Result<RunOutcome, TypesError> {
    let Some(schema) = loader::load_schema(&config.input)? else {
        observer.on_event(&GenerationEvent::EmptySchema {
            path: config.input.clone(),
        });
        return Ok(RunOutcome::default());
    };

    let generation = generate_types(&schema, config.required_policy, observer);
    let mut outcome = RunOutcome {
        written: generation.written,
        skipped: generation.skipped,
        ..RunOutcome::default()
    };

    if generation.source.is_some() {
        if config.dry_run {
            debug!(path = %config.output.display(), "dry run, output not written");
        } else {
            output::write_atomic(&config.output, &generation.text)?;
            info!(
                path = %config.output.display(),
                written = generation.written,
                "types written"
            );
            outcome.output = Some(config.output.clone());
        }
    }

    outcome.text = generation.text;
    Ok(outcome)
}
