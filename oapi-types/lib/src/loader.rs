//! Schema loading.

use std::fs;
use std::path::Path;

use serde::de::{Error as _, Unexpected};
use serde_json::Value;
use tracing::debug;

use crate::error::TypesError;
use crate::schema::SchemaDocument;

/// Reads and parses the schema at `path`.
///
/// ## Returns
///
/// `Ok(None)` when the document is empty (`null`, `false`, `0` or `""`).
///
/// ## Errors
///
/// Returns [`TypesError::Read`] if the file cannot be read and
/// [`TypesError::Parse`] if it is not JSON or the document is not an object.
pub fn load_schema(path: &Path) -> Result<Option<SchemaDocument>, TypesError> {
    let contents = fs::read_to_string(path).map_err(|source| TypesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "schema read");

    parse_schema(&contents).map_err(|source| TypesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses schema text, returning `None` for an empty document.
///
/// Nodes inside the document are read leniently; only a non-object document
/// is rejected.
pub fn parse_schema(contents: &str) -> Result<Option<SchemaDocument>, serde_json::Error> {
    let value: Value = serde_json::from_str(contents)?;
    if is_empty_document(&value) {
        return Ok(None);
    }

    if value.is_object() {
        return serde_json::from_value(value).map(Some);
    }

    let unexpected = match &value {
        Value::Array(_) => Unexpected::Seq,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::String(s) => Unexpected::Str(s),
        _ => Unexpected::Other("number"),
    };
    Err(serde_json::Error::invalid_type(unexpected, &"a schema object"))
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
