//! Run configuration.
//!
//! A [`GenerateConfig`] is built once at process start (the CLI builds it from
//! its parsed arguments) and handed to [`crate::run`].

use std::path::PathBuf;

use crate::error::TypesError;

/// Extension the schema path must carry.
const SCHEMA_EXTENSION: &str = ".json";

/// How a property's optionality is derived from its definition's `required` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredPolicy {
    /// Listed properties are required; when the list is absent or empty,
    /// every property is required.
    #[default]
    Compat,
    /// Only listed properties are required; no list means nothing is required.
    OpenApi,
}

impl RequiredPolicy {
    /// Returns `true` when `property` should be emitted without a `?`.
    pub fn is_required(self, property: &str, required: Option<&[String]>) -> bool {
        let listed = required.is_some_and(|names| names.iter().any(|n| n == property));
        match self {
            Self::Compat => listed || required.is_none_or(<[String]>::is_empty),
            Self::OpenApi => listed,
        }
    }
}

/// Checks that a schema path ends in `.json`.
///
/// Used directly as a clap `value_parser`, so a bad path is reported as a
/// usage error before any file is touched.
///
/// ## Errors
///
/// Returns [`TypesError::InvalidInputExtension`] for any other extension.
pub fn validate_input_path(value: &str) -> Result<PathBuf, TypesError> {
    if value.ends_with(SCHEMA_EXTENSION) {
        Ok(PathBuf::from(value))
    } else {
        Err(TypesError::InvalidInputExtension {
            path: PathBuf::from(value),
        })
    }
}

/// Everything a single generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Path of the `.json` schema to read.
    pub input: PathBuf,
    /// Path the generated types are written to.
    pub output: PathBuf,
    pub required_policy: RequiredPolicy,
    /// Generate without writing the output file.
    pub dry_run: bool,
}

impl GenerateConfig {
    /// Creates a config with the default required policy.
    ///
    /// ## Errors
    ///
    /// Returns [`TypesError::InvalidInputExtension`] when `input` does not end in `.json`.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<Self, TypesError> {
        let input = input.into();
        let input = validate_input_path(&input.to_string_lossy())?;

        Ok(Self {
            input,
            output: output.into(),
            required_policy: RequiredPolicy::default(),
            dry_run: false,
        })
    }

    pub fn with_required_policy(mut self, policy: RequiredPolicy) -> Self {
        self.required_policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
