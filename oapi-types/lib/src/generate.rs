//! Version dispatch and whole-document generation.
//!
//! The document's version string selects which mapping is walked:
//!
//! | Version  | Mapping              |
//! |----------|----------------------|
//! | `2*`     | `definitions`        |
//! | `3*`     | `components.schemas` |
//! | other    | none, reported as [`GenerationEvent::UnsupportedVersion`] |

use crate::config::RequiredPolicy;
use crate::emit::{SkipReason, write_definition};
use crate::events::{GenerationEvent, GenerationObserver};
use crate::schema::{DefinitionSource, SchemaDocument, SchemaVersion};

/// The result of generating types for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// The generated declarations.
    pub text: String,
    /// The mapping that was walked; `None` when there was nothing to walk.
    pub source: Option<DefinitionSource>,
    /// Number of declarations written.
    pub written: usize,
    /// Number of entries that produced no declaration.
    pub skipped: usize,
}

/// Generates type declarations for every entry of the document's mapping.
///
/// Pure: the document is not modified and nothing is written outside the
/// returned [`Generation`]. Progress is reported to `observer`.
pub fn generate_types(
    schema: &SchemaDocument,
    policy: RequiredPolicy,
    observer: &mut dyn GenerationObserver,
) -> Generation {
    let source = match schema.version() {
        SchemaVersion::Legacy => DefinitionSource::Definitions,
        SchemaVersion::Modern => DefinitionSource::ComponentsSchemas,
        SchemaVersion::Unsupported(version) => {
            observer.on_event(&GenerationEvent::UnsupportedVersion { version });
            return Generation::default();
        }
    };

    let definitions = match schema.definitions_for(source) {
        Some(definitions) if !definitions.is_empty() => definitions,
        _ => {
            observer.on_event(&GenerationEvent::NoDefinitions { source });
            return Generation::default();
        }
    };

    let mut generation = Generation {
        source: Some(source),
        ..Generation::default()
    };

    for (name, definition) in definitions {
        let event = match write_definition(&mut generation.text, name, definition, policy) {
            Ok(kind) => {
                generation.written += 1;
                GenerationEvent::Written {
                    name: name.clone(),
                    kind,
                }
            }
            Err(SkipReason::NoProperties) => {
                generation.skipped += 1;
                GenerationEvent::SkippedEmpty { name: name.clone() }
            }
            Err(SkipReason::NoItemsReference) => {
                generation.skipped += 1;
                GenerationEvent::SkippedArrayWithoutItems { name: name.clone() }
            }
        };
        observer.on_event(&event);
    }

    generation
}
