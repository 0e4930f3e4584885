//! # YAML Loading
//!
//! Parses a single `*.fmf` file into an ordered [`Map`]. `serde_yaml`'s own
//! `Mapping` deserialization silently keeps the last occurrence of a
//! repeated key and never reports it, so duplicate-key detection needs a
//! dedicated recursive visitor that walks the same `serde_yaml::Deserializer`
//! event stream but checks `Mapping::insert`'s return value as it builds the
//! result, instead of delegating straight to `Value`'s own `Deserialize`
//! impl.

use crate::error::{Error, FileErrorKind, Result};
use crate::value::{Map, Value};
use serde::de::{DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::Deserializer as _;
use std::fmt;
use std::fs;
use std::path::Path;

/// Reads and parses `path`, returning an empty mapping for an empty file.
pub fn load_file(path: &Path) -> Result<Map> {
    let content = fs::read_to_string(path).map_err(|e| Error::FileError {
        path: path.to_path_buf(),
        kind: FileErrorKind::Unreadable(e.to_string()),
    })?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    let value = parse_checked(&content, path)?;
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(Error::InvalidSyntax { path: path.to_path_buf() }),
    }
}

/// Marker prefix a duplicate-key visitor error is tagged with, so
/// `parse_checked` can tell a genuine duplicate key apart from any other
/// YAML parse failure and report it as [`Error::FileError`] with
/// [`FileErrorKind::DuplicateKey`] instead of a generic [`Error::YamlError`].
const DUPLICATE_KEY_MARKER: &str = "\u{0}fmf-duplicate-key\u{0}";

/// Parses `content` into a [`Value`], failing with
/// [`FileErrorKind::DuplicateKey`] the first time any single mapping in the
/// document repeats a key.
fn parse_checked(content: &str, path: &Path) -> Result<Value> {
    let deserializer = serde_yaml::Deserializer::from_str(content);
    DupCheckingSeed { path }.deserialize(deserializer).map_err(|e| {
        let message = e.to_string();
        match message.strip_prefix(DUPLICATE_KEY_MARKER) {
            Some(key) => Error::FileError {
                path: path.to_path_buf(),
                kind: FileErrorKind::DuplicateKey(key.to_string()),
            },
            None => Error::YamlError { path: path.to_path_buf(), source: e },
        }
    })
}

struct DupCheckingSeed<'a> {
    path: &'a Path,
}

impl<'de, 'a> DeserializeSeed<'de> for DupCheckingSeed<'a> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DupCheckingVisitor { path: self.path })
    }
}

#[derive(Clone, Copy)]
struct DupCheckingVisitor<'a> {
    path: &'a Path,
}

impl<'a> DupCheckingVisitor<'a> {
    fn seed(self) -> DupCheckingSeed<'a> {
        DupCheckingSeed { path: self.path }
    }
}

impl<'de, 'a> Visitor<'de> for DupCheckingVisitor<'a> {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        self.seed().deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = Vec::new();
        while let Some(item) = seq.next_element_seed(self.seed())? {
            out.push(item);
        }
        Ok(Value::Sequence(out))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut out = Map::new();
        while let Some(key) = map.next_key_seed(self.seed())? {
            let value = map.next_value_seed(self.seed())?;
            let key_display = crate::value::to_display_string(&key);
            if out.insert(key, value).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "{DUPLICATE_KEY_MARKER}{key_display}"
                )));
            }
        }
        Ok(Value::Mapping(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    fn load_str(content: &str) -> Result<Map> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        load_file(file.path())
    }

    #[test]
    fn empty_file_is_empty_mapping() {
        let map = load_str("").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn parses_simple_mapping() {
        let map = load_str("tag:\n  - a\ntest: run.sh\n").unwrap();
        assert_eq!(map.get("test").unwrap().as_str(), Some("run.sh"));
    }

    #[test]
    fn duplicate_top_level_key_is_fatal() {
        let err = load_str("tag: a\ntag: b\n").unwrap_err();
        match err {
            Error::FileError { kind: FileErrorKind::DuplicateKey(key), .. } => {
                assert_eq!(key, "tag")
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_key_in_nested_mapping_is_fatal() {
        let err = load_str("/child:\n  x: 1\n  x: 2\n").unwrap_err();
        match err {
            Error::FileError { kind: FileErrorKind::DuplicateKey(key), .. } => {
                assert_eq!(key, "x")
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn non_mapping_root_is_invalid_syntax() {
        let err = load_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, Error::InvalidSyntax { .. }));
    }
}
