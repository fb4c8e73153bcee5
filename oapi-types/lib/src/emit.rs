//! Text emission for individual definitions.
//!
//! Each definition becomes one block appended to an output buffer:
//!
//! ```text
//! export type Name = Base1 & Base2 & {
//! 	// [format] description
//! 	propertyName: Type;
//! 	readonly otherProperty?: OtherType | null;
//! }
//!
//! ```
//!
//! Array definitions become a single alias line, `export type Name = Item[]`,
//! followed by a blank line.

use indexmap::IndexMap;

use crate::config::RequiredPolicy;
use crate::events::EntryKind;
use crate::schema::{Definition, Property, capitalize, ref_type_name};

/// Why a definition produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The merged property set is empty.
    NoProperties,
    /// An array definition has no `items.$ref`.
    NoItemsReference,
}

/// A definition's effective shape once its `allOf` parts are merged.
#[derive(Debug, Default)]
pub struct MergedDefinition<'a> {
    /// Capitalized names of referenced definitions to intersect with.
    pub bases: Vec<String>,
    /// Own properties followed by inline `allOf` properties, last write wins.
    pub properties: IndexMap<&'a str, &'a Property>,
}

/// Merges a definition's own properties with its `allOf` parts.
///
/// A later part overwrites a same-named earlier property; the overwritten key
/// keeps its original position.
pub fn merge_all_of(definition: &Definition) -> MergedDefinition<'_> {
    let mut merged = MergedDefinition::default();

    for (name, property) in definition.properties.iter().flatten() {
        merged.properties.insert(name.as_str(), property);
    }

    for part in definition.all_of.iter().flatten() {
        if let Some(reference) = part.reference() {
            merged.bases.push(ref_type_name(reference));
        }
        for (name, property) in part.properties.iter().flatten() {
            merged.properties.insert(name.as_str(), property);
        }
    }

    merged
}

/// Resolves the type expression of a property.
///
/// A direct `$ref` resolves to the capitalized referenced name. Otherwise
/// `string` maps to `string`, `integer` to `number`, `array` to the item
/// reference followed by `[]`, and anything else to `unknown`, with
/// ` | null` appended for nullable properties.
pub fn resolve_property_type(property: &Property) -> String {
    if let Some(reference) = property.reference() {
        return ref_type_name(reference);
    }

    let mut resolved = match property.primitive() {
        Some("string") => "string".to_string(),
        Some("integer") => "number".to_string(),
        Some("array") => match property.item_reference() {
            Some(reference) => format!("{}[]", ref_type_name(reference)),
            None => "unknown[]".to_string(),
        },
        _ => "unknown".to_string(),
    };

    if property.is_nullable() {
        resolved.push_str(" | null");
    }

    resolved
}

/// Appends the comment line (if any) and the member line for one property.
pub fn write_property(out: &mut String, name: &str, property: &Property, required: bool) {
    let format = property.format();
    let description = property.description();

    if format.is_some() || description.is_some() {
        out.push_str("\t//");
        if let Some(format) = format {
            out.push_str(&format!(" [{format}]"));
        }
        if let Some(description) = description {
            out.push(' ');
            out.push_str(description);
        }
        out.push('\n');
    }

    out.push('\t');
    if property.is_read_only() {
        out.push_str("readonly ");
    }
    out.push_str(name);
    out.push_str(if required { ": " } else { "?: " });
    out.push_str(&resolve_property_type(property));
    out.push_str(";\n");
}

/// Appends the declaration for one named definition.
///
/// ## Returns
///
/// The kind of declaration written, or why nothing was written.
pub fn write_definition(
    out: &mut String,
    name: &str,
    definition: &Definition,
    policy: RequiredPolicy,
) -> Result<EntryKind, SkipReason> {
    if definition.is_array() {
        write_array_alias(out, name, definition)
    } else {
        write_object(out, name, definition, policy)
    }
}

fn write_array_alias(
    out: &mut String,
    name: &str,
    definition: &Definition,
) -> Result<EntryKind, SkipReason> {
    let reference = definition
        .items
        .as_ref()
        .and_then(|items| items.reference())
        .ok_or(SkipReason::NoItemsReference)?;

    out.push_str(&format!(
        "export type {} = {}[]\n\n",
        capitalize(name),
        ref_type_name(reference)
    ));

    Ok(EntryKind::ArrayAlias)
}

fn write_object(
    out: &mut String,
    name: &str,
    definition: &Definition,
    policy: RequiredPolicy,
) -> Result<EntryKind, SkipReason> {
    let merged = merge_all_of(definition);
    if merged.properties.is_empty() {
        return Err(SkipReason::NoProperties);
    }

    let mut bases = merged.bases.join(" & ");
    if !bases.is_empty() {
        bases.push_str(" & ");
    }

    out.push_str(&format!("export type {} = {bases}{{\n", capitalize(name)));

    let required = definition.required.as_deref();
    for (property_name, property) in &merged.properties {
        let is_required = policy.is_required(property_name, required);
        write_property(out, property_name, property, is_required);
    }

    out.push_str("}\n\n");

    Ok(EntryKind::Object)
}
