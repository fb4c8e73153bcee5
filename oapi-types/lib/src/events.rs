//! Structured progress events emitted during generation.
//!
//! The generator never writes to the console. It reports what happened to a
//! caller-supplied [`GenerationObserver`]; the CLI turns events into status
//! lines, tests record them, and [`TracingObserver`] forwards them to `tracing`.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::schema::DefinitionSource;

/// What kind of declaration was written for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `export type Name = ... & { ... }`
    Object,
    /// `export type Name = Item[]`
    ArrayAlias,
}

/// A single observable outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// The schema file held `null`, `false`, `0` or `""`.
    EmptySchema { path: PathBuf },
    /// The version field is missing or starts with neither `2` nor `3`.
    UnsupportedVersion { version: Option<String> },
    /// The selected mapping is absent or has no entries.
    NoDefinitions { source: DefinitionSource },
    /// A declaration was emitted for `name`.
    Written { name: String, kind: EntryKind },
    /// An object definition whose merged property set is empty.
    SkippedEmpty { name: String },
    /// An array definition without an `items.$ref`.
    SkippedArrayWithoutItems { name: String },
}

/// Receives events as the generator walks a schema.
pub trait GenerationObserver {
    fn on_event(&mut self, event: &GenerationEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GenerationObserver for NullObserver {
    fn on_event(&mut self, _event: &GenerationEvent) {}
}

/// Forwards events to `tracing`: skips and unsupported versions at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn on_event(&mut self, event: &GenerationEvent) {
        match event {
            GenerationEvent::EmptySchema { path } => {
                info!(path = %path.display(), "schema file is empty");
            }
            GenerationEvent::UnsupportedVersion { version } => {
                warn!(
                    version = version.as_deref().unwrap_or("<missing>"),
                    "unsupported schema version, nothing generated"
                );
            }
            GenerationEvent::NoDefinitions { source } => {
                info!(%source, "no definitions in schema");
            }
            GenerationEvent::Written { name, kind } => {
                debug!(name = %name, ?kind, "type written");
            }
            GenerationEvent::SkippedEmpty { name } => {
                warn!(name = %name, "definition has no properties, skipped");
            }
            GenerationEvent::SkippedArrayWithoutItems { name } => {
                warn!(name = %name, "array definition has no items reference, skipped");
            }
        }
    }
}

/// Records every event in order.
impl GenerationObserver for Vec<GenerationEvent> {
    fn on_event(&mut self, event: &GenerationEvent) {
        self.push(event.clone());
    }
}
