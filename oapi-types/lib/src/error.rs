//! Error types for the type generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a schema or writing generated types.
#[derive(Debug, Error)]
pub enum TypesError {
    /// The schema path does not point at a `.json` file.
    #[error("Argument check failed: input file `{path}` is not a .json format")]
    InvalidInputExtension { path: PathBuf },

    /// Failed to read the schema file.
    #[error("Failed to read schema `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON, or a consumed field has the wrong shape.
    #[error("Failed to parse schema `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the generated types.
    #[error("Failed to write output file `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
