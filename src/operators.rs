//! # Merge Operator Algebra
//!
//! This module implements the typed merge operators that control how a
//! child node's incoming data combines with the value already present on
//! its parent: plain replace, `+` (merge), `+<` (prepend-merge), `-`
//! (reduce), `~` (regex substitute) and `-~` (regex-based remove).
//!
//! Every data key loaded from a `*.fmf` file may carry one of these as a
//! suffix; [`split_operator`] strips it and returns the base key plus the
//! operator to apply, and [`apply`] performs the combination against the
//! optional existing parent value.

use crate::error::{Error, Result};
use crate::value::Value;
use regex::Regex;
use serde_yaml::Mapping;

/// A merge operator recognised as a key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// No suffix: replace the parent value outright.
    Replace,
    /// `+`: merge (list concat, dict recurse, number add, string concat).
    Merge,
    /// `+<`: like `Merge` but prepends for lists.
    Prepend,
    /// `-`: reduce (subtract / remove / regex-blank).
    Reduce,
    /// `~`: regex substitute.
    Substitute,
    /// `-~`: regex-based remove.
    RemoveMatching,
}

impl Operator {
    pub fn suffix(self) -> &'static str {
        match self {
            Operator::Replace => "",
            Operator::Merge => "+",
            Operator::Prepend => "+<",
            Operator::Reduce => "-",
            Operator::Substitute => "~",
            Operator::RemoveMatching => "-~",
        }
    }
}

/// Splits a raw data key into its base name and operator, longest suffix
/// first so `+<` and `-~` are never mistaken for `+`/`-`.
pub fn split_operator(raw_key: &str) -> (&str, Operator) {
    if let Some(base) = raw_key.strip_suffix("+<") {
        return (base, Operator::Prepend);
    }
    if let Some(base) = raw_key.strip_suffix("-~") {
        return (base, Operator::RemoveMatching);
    }
    if let Some(base) = raw_key.strip_suffix('+') {
        return (base, Operator::Merge);
    }
    if let Some(base) = raw_key.strip_suffix('~') {
        return (base, Operator::Substitute);
    }
    if let Some(base) = raw_key.strip_suffix('-') {
        return (base, Operator::Reduce);
    }
    (raw_key, Operator::Replace)
}

fn merge_err(node: &str, key: &str, op: Operator, message: impl Into<String>) -> Error {
    Error::MergeError {
        node: node.to_string(),
        key: key.to_string(),
        operator: op.suffix().to_string(),
        message: message.into(),
    }
}

/// Applies `op` combining an existing `parent` value (if any) with the
/// incoming `child` value for diagnostics keyed on `node`/`key`.
///
/// Returns `Ok(None)` only for `-` against a key absent on the parent,
/// meaning the key must not appear in the result at all (a true no-op,
/// distinct from a present `null`).
pub fn apply(
    node: &str,
    key: &str,
    op: Operator,
    parent: Option<&Value>,
    child: Value,
) -> Result<Option<Value>> {
    match op {
        Operator::Replace => Ok(Some(child)),
        Operator::Merge => merge(node, key, parent, child, false).map(Some),
        Operator::Prepend => merge(node, key, parent, child, true).map(Some),
        Operator::Reduce => reduce(node, key, parent, child),
        Operator::Substitute => substitute(node, key, parent, child).map(Some),
        Operator::RemoveMatching => remove_matching(node, key, parent, child).map(Some),
    }
}

fn merge(node: &str, key: &str, parent: Option<&Value>, child: Value, prepend: bool) -> Result<Value> {
    let parent = match parent {
        None => return Ok(child),
        Some(p) => p,
    };
    match (parent, &child) {
        (Value::Sequence(p), Value::Sequence(c)) => {
            let mut out = p.clone();
            if prepend {
                let mut new_out = c.clone();
                new_out.extend(out);
                Ok(Value::Sequence(new_out))
            } else {
                out.extend(c.clone());
                Ok(Value::Sequence(out))
            }
        }
        (Value::Mapping(p), Value::Mapping(c)) => {
            let mut out = p.clone();
            for (k, v) in c.iter() {
                let k_str = k.as_str().unwrap_or_default();
                let (base, inner_op) = split_operator(k_str);
                let base_key = Value::String(base.to_string());
                let existing = out.get(&base_key).cloned();
                match apply(node, key, inner_op, existing.as_ref(), v.clone())? {
                    Some(merged) => {
                        out.insert(base_key, merged);
                    }
                    None => {
                        out.shift_remove(&base_key);
                    }
                }
            }
            Ok(Value::Mapping(out))
        }
        (Value::Sequence(p), Value::Mapping(c)) => {
            // a mapping distributed across every element of a parent list
            let updated: Result<Vec<Value>> = p
                .iter()
                .map(|elem| merge_mapping_into_element(node, key, elem, c))
                .collect();
            Ok(Value::Sequence(updated?))
        }
        (Value::Mapping(p), Value::Sequence(c)) => {
            // list value distributed: each element merged with parent mapping
            let updated: Result<Vec<Value>> = c
                .iter()
                .map(|elem| merge_mapping_into_element(node, key, elem, p))
                .collect();
            Ok(Value::Sequence(updated?))
        }
        (Value::Number(p), Value::Number(c)) => {
            let result = numeric_add(p, c).ok_or_else(|| {
                merge_err(node, key, Operator::Merge, "cannot add non-numeric numbers")
            })?;
            Ok(result)
        }
        (Value::String(p), Value::String(c)) => Ok(Value::String(format!("{p}{c}"))),
        (Value::Null, _) => Ok(child),
        _ => Err(merge_err(
            node,
            key,
            Operator::Merge,
            format!(
                "incompatible types for '+': {} vs {}",
                type_name(parent),
                type_name(&child)
            ),
        )),
    }
}

fn merge_mapping_into_element(node: &str, key: &str, elem: &Value, patch: &Mapping) -> Result<Value> {
    let elem_map = match elem {
        Value::Mapping(m) => m.clone(),
        Value::Null => Mapping::new(),
        _ => {
            return Err(merge_err(
                node,
                key,
                Operator::Merge,
                "cannot distribute a mapping update over a non-mapping list element",
            ))
        }
    };
    let merged = merge(node, key, Some(&Value::Mapping(elem_map)), Value::Mapping(patch.clone()), false)?;
    Ok(merged)
}

fn numeric_add(a: &serde_yaml::Number, b: &serde_yaml::Number) -> Option<Value> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(Value::Number((x + y).into()));
    }
    let x = a.as_f64()?;
    let y = b.as_f64()?;
    Some(Value::Number(serde_yaml::Number::from(x + y)))
}

fn numeric_sub(a: &serde_yaml::Number, b: &serde_yaml::Number) -> Option<Value> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(Value::Number((x - y).into()));
    }
    let x = a.as_f64()?;
    let y = b.as_f64()?;
    Some(Value::Number(serde_yaml::Number::from(x - y)))
}

fn reduce(node: &str, key: &str, parent: Option<&Value>, child: Value) -> Result<Option<Value>> {
    // `-` silently no-ops if the parent key doesn't exist at all: the key
    // stays absent from the result rather than appearing as `null`.
    let parent = match parent {
        None => return Ok(None),
        Some(p) => p,
    };
    let result = match (parent, &child) {
        (Value::Sequence(p), Value::Sequence(c)) => {
            let out: Vec<Value> = p.iter().filter(|v| !c.contains(v)).cloned().collect();
            Value::Sequence(out)
        }
        (Value::Mapping(p), Value::Sequence(c)) => {
            let mut out = p.clone();
            for k in c {
                out.shift_remove(k);
            }
            Value::Mapping(out)
        }
        (Value::Number(p), Value::Number(c)) => numeric_sub(p, c).ok_or_else(|| {
            merge_err(node, key, Operator::Reduce, "cannot subtract non-numeric numbers")
        })?,
        (Value::String(p), Value::String(pattern)) => {
            let re = Regex::new(pattern)
                .map_err(|e| merge_err(node, key, Operator::Reduce, format!("invalid regex: {e}")))?;
            Value::String(re.replace_all(p, "").into_owned())
        }
        (_, _) => {
            return Err(merge_err(
                node,
                key,
                Operator::Reduce,
                format!("incompatible types for '-': {} vs {}", type_name(parent), type_name(&child)),
            ))
        }
    };
    Ok(Some(result))
}

/// Parses a `dPATTERNdREPLACEMENTd` substitution string, where `d` is
/// whatever the first character is.
fn parse_substitution(spec: &str) -> Result<(String, String)> {
    let mut chars = spec.chars();
    let delim = chars
        .next()
        .ok_or_else(|| Error::GeneralError("empty substitution pattern".to_string()))?;
    let rest: String = chars.collect();
    let mut parts = rest.splitn(2, delim);
    let pattern = parts.next().unwrap_or_default().to_string();
    let replacement = parts
        .next()
        .ok_or_else(|| Error::GeneralError(format!("malformed substitution '{spec}', expected {delim}PATTERN{delim}REPLACEMENT{delim}")))?;
    // drop a single trailing delimiter if present, keep the rest (a
    // replacement may legitimately contain the delimiter character itself
    // past the required second occurrence only if escaped; we accept the
    // simple case used throughout real fmf data).
    let replacement = replacement.strip_suffix(delim).unwrap_or(replacement).to_string();
    Ok((pattern, replacement))
}

fn substitute_one(node: &str, key: &str, value: &str, spec: &str) -> Result<String> {
    let (pattern, replacement) = parse_substitution(spec)?;
    let re = Regex::new(&pattern)
        .map_err(|e| merge_err(node, key, Operator::Substitute, format!("invalid regex: {e}")))?;
    Ok(re.replace_all(value, replacement.as_str()).into_owned())
}

fn substitute(node: &str, key: &str, parent: Option<&Value>, child: Value) -> Result<Value> {
    let parent = parent.ok_or_else(|| {
        merge_err(node, key, Operator::Substitute, "no parent value to substitute against")
    })?;
    let specs: Vec<String> = match &child {
        Value::String(s) => vec![s.clone()],
        Value::Sequence(seq) => seq
            .iter()
            .map(|v| v.as_str().map(|s| s.to_string()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| merge_err(node, key, Operator::Substitute, "'~' list must contain only strings"))?,
        _ => {
            return Err(merge_err(
                node,
                key,
                Operator::Substitute,
                "'~' value must be a string or list of strings",
            ))
        }
    };

    match parent {
        Value::String(s) => {
            let mut out = s.clone();
            for spec in &specs {
                out = substitute_one(node, key, &out, spec)?;
            }
            Ok(Value::String(out))
        }
        Value::Sequence(seq) => {
            let mut out = Vec::with_capacity(seq.len());
            for item in seq {
                match item {
                    Value::String(s) => {
                        let mut v = s.clone();
                        for spec in &specs {
                            v = substitute_one(node, key, &v, spec)?;
                        }
                        out.push(Value::String(v));
                    }
                    other => out.push(other.clone()),
                }
            }
            Ok(Value::Sequence(out))
        }
        _ => Err(merge_err(
            node,
            key,
            Operator::Substitute,
            format!("cannot apply '~' to {}", type_name(parent)),
        )),
    }
}

fn remove_matching(node: &str, key: &str, parent: Option<&Value>, child: Value) -> Result<Value> {
    let parent = match parent {
        None => return Ok(Value::Null),
        Some(p) => p,
    };
    let patterns: Vec<String> = match &child {
        Value::String(s) => vec![s.clone()],
        Value::Sequence(seq) => seq
            .iter()
            .map(|v| v.as_str().map(|s| s.to_string()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| merge_err(node, key, Operator::RemoveMatching, "'-~' list must contain only strings"))?,
        _ => {
            return Err(merge_err(
                node,
                key,
                Operator::RemoveMatching,
                "'-~' value must be a string or list of strings",
            ))
        }
    };
    let regexes: Result<Vec<Regex>> = patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| merge_err(node, key, Operator::RemoveMatching, format!("invalid regex: {e}"))))
        .collect();
    let regexes = regexes?;
    let any_match = |s: &str| regexes.iter().any(|re| re.is_match(s));

    match parent {
        Value::Sequence(seq) => {
            let out: Vec<Value> = seq
                .iter()
                .filter(|v| !any_match(&crate::value::to_display_string(v)))
                .cloned()
                .collect();
            Ok(Value::Sequence(out))
        }
        Value::Mapping(map) => {
            let mut out = Mapping::new();
            for (k, v) in map.iter() {
                let k_str = k.as_str().unwrap_or_default();
                if !any_match(k_str) {
                    out.insert(k.clone(), v.clone());
                }
            }
            Ok(Value::Mapping(out))
        }
        Value::String(s) => {
            if any_match(s) {
                Ok(Value::String(String::new()))
            } else {
                Ok(Value::String(s.clone()))
            }
        }
        _ => Err(merge_err(
            node,
            key,
            Operator::RemoveMatching,
            format!("cannot apply '-~' to {}", type_name(parent)),
        )),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
