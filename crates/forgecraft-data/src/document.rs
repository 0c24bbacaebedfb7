//! Field readers and definition parsing for forge data documents.
//!
//! Documents arrive as already-decoded [`serde_json::Value`] trees (RON and
//! TOML sources are normalized into the same tree by the loader). Fields are
//! read individually so every failure names the offending field, and material
//! names are resolved against the block registry at parse time -- a
//! definition either resolves completely or is not produced at all.

use forgecraft_core::definition::{DEFAULT_FUEL_CAPACITY, DefinitionError, ForgeDefinition};
use forgecraft_core::registry::BlockRegistry;
use serde_json::Value;

/// A single-document parse failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("malformed field '{field}': expected {expected}")]
    MalformedField {
        field: &'static str,
        expected: &'static str,
    },

    /// A material name did not resolve in the block registry. Carries the
    /// offending string for the load report.
    #[error("invalid material: '{name}'")]
    InvalidMaterial { name: String },
}

impl From<DefinitionError> for ParseError {
    fn from(err: DefinitionError) -> Self {
        match err {
            DefinitionError::ZeroTier => ParseError::MalformedField {
                field: "tier",
                expected: "integer >= 1",
            },
            DefinitionError::DegenerateSpeed(_) => ParseError::MalformedField {
                field: "speed_multiplier",
                expected: "positive finite number",
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

fn require_u32(doc: &Value, field: &'static str) -> Result<u32, ParseError> {
    match doc.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { field }),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(ParseError::MalformedField {
                field,
                expected: "non-negative integer",
            }),
    }
}

fn optional_u32(doc: &Value, field: &'static str, default: u32) -> Result<u32, ParseError> {
    match doc.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(ParseError::MalformedField {
                field,
                expected: "non-negative integer",
            }),
    }
}

fn optional_f32(doc: &Value, field: &'static str, default: f32) -> Result<f32, ParseError> {
    match doc.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_f64()
            .map(|f| f as f32)
            .ok_or(ParseError::MalformedField {
                field,
                expected: "number",
            }),
    }
}

fn require_str<'a>(doc: &'a Value, field: &'static str) -> Result<&'a str, ParseError> {
    match doc.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { field }),
        Some(value) => value.as_str().ok_or(ParseError::MalformedField {
            field,
            expected: "string identifier",
        }),
    }
}

// ---------------------------------------------------------------------------
// Definition parsing
// ---------------------------------------------------------------------------

/// Parse one forge document into a validated definition.
///
/// Numeric-domain checks (tier >= 1, multiplier > 0, derived smelt time) are
/// enforced by [`ForgeDefinition::new`]; this function reads and types the
/// fields and resolves material references.
pub fn parse_definition(
    doc: &Value,
    blocks: &BlockRegistry,
) -> Result<ForgeDefinition, ParseError> {
    let tier = require_u32(doc, "tier")?;
    let speed_multiplier = optional_f32(doc, "speed_multiplier", 1.0)?;
    let fuel_capacity = optional_u32(doc, "fuel_capacity", DEFAULT_FUEL_CAPACITY)?;

    let material_name = require_str(doc, "material")?;
    let material = blocks
        .resolve(material_name)
        .map_err(|_| ParseError::InvalidMaterial {
            name: material_name.to_string(),
        })?;

    let additional_materials = match doc.get("additional_materials") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(names)) => {
            let mut resolved = Vec::with_capacity(names.len());
            for name in names {
                let name = name.as_str().ok_or(ParseError::MalformedField {
                    field: "additional_materials",
                    expected: "array of string identifiers",
                })?;
                resolved.push(blocks.resolve(name).map_err(|_| {
                    ParseError::InvalidMaterial {
                        name: name.to_string(),
                    }
                })?);
            }
            resolved
        }
        Some(_) => {
            return Err(ParseError::MalformedField {
                field: "additional_materials",
                expected: "array of string identifiers",
            });
        }
    };

    Ok(ForgeDefinition::new(
        tier,
        speed_multiplier,
        fuel_capacity,
        material,
        additional_materials,
    )?)
}
