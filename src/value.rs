//! # Attribute Value Representation
//!
//! Node attribute data is a dynamically typed, ordered tree of YAML scalars,
//! sequences and mappings. Rather than introducing a parallel hand-rolled
//! value type, this module builds directly on `serde_yaml::Value` /
//! `serde_yaml::Mapping` — the mapping type already preserves insertion
//! order and is exactly what the loader parses `*.fmf` files into, so the
//! pipeline never has to convert between two representations of the same
//! data (see DESIGN.md).

use serde_yaml::Value as YamlValue;

/// An attribute value: null, bool, int, float, string, list, or ordered map.
pub type Value = YamlValue;

/// An ordered string-keyed mapping, preserving first-insertion order.
pub type Map = serde_yaml::Mapping;

/// Builds a [`Value::String`] key the way node data keys are represented.
pub fn key(s: impl Into<String>) -> Value {
    Value::String(s.into())
}

/// Renders a value the way the filter/query engine needs to match it
/// against a regex pattern: scalars render as their natural text form,
/// `null` renders as the empty string.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => seq
            .iter()
            .map(to_display_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Mapping(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", to_display_string(k), to_display_string(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        Value::Tagged(tagged) => to_display_string(&tagged.value),
    }
}

/// Every string form a list value can be matched against for filtering:
/// for a sequence this is one entry per element; for anything else a
/// single-element vector of its display form.
pub fn display_candidates(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(seq) => seq.iter().map(to_display_string).collect(),
        other => vec![to_display_string(other)],
    }
}
