//! # Persistence
//!
//! Writes a node's own data back to the file it came from. This is the
//! write path described in §4.7: the mirror image of `assembler.rs`'s read
//! path, same nesting rules, opposite direction. Only a node's own,
//! non-inherited keys are touched — [`Node::original_data`] is the source
//! of truth here, never [`Node::data`], since the latter carries whatever
//! this node inherited from its parent and writing that back out would
//! duplicate it into the child's own file.
//!
//! A node that was only ever created implicitly (a scope key with no
//! leaf keys of its own yet) has no recorded source file; writing to it
//! creates a fresh `main.fmf` under its directory.

use crate::error::{Error, FileErrorKind, Result};
use crate::node::Node;
use crate::value::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `node.original_data()` back into its primary source file.
pub fn write_node(node: &Node) -> Result<()> {
    let path = target_file(node);
    let existing = if path.is_file() {
        crate::loader::load_file(&path)?
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::FileError {
                path: parent.to_path_buf(),
                kind: FileErrorKind::Unreadable(e.to_string()),
            })?;
        }
        Map::new()
    };

    let file_node_name = file_target_node_name(&node.root(), &path);
    let segments = relative_segments(&file_node_name, &node.name())?;

    let mut updated = existing;
    replace_at(&mut updated, &segments, node.original_data().clone())?;

    let text = serde_yaml::to_string(&Value::Mapping(updated))
        .map_err(|e| Error::YamlError { path: path.clone(), source: e })?;
    fs::write(&path, text)
        .map_err(|e| Error::FileError { path, kind: FileErrorKind::Unreadable(e.to_string()) })
}

/// The file a node's own keys currently live in, or the file it would be
/// created in if it has none yet.
fn target_file(node: &Node) -> PathBuf {
    node.sources().last().cloned().unwrap_or_else(|| default_file_for(node))
}

fn default_file_for(node: &Node) -> PathBuf {
    let root = node.root();
    let rel = node.name().trim_start_matches('/');
    if rel.is_empty() {
        root.join("main.fmf")
    } else {
        root.join(rel).join("main.fmf")
    }
}

/// Mirrors `discovery::file_node_name`: the node a file's top level maps
/// to, derived from the file's path relative to the tree root.
fn file_target_node_name(root: &Path, file_path: &Path) -> String {
    let dir = file_path.parent().unwrap_or(root);
    let rel_dir = dir.strip_prefix(root).unwrap_or_else(|_| Path::new(""));

    let mut node_name = String::from("/");
    for component in rel_dir.components() {
        let segment = component.as_os_str().to_string_lossy();
        node_name = if node_name == "/" {
            format!("/{segment}")
        } else {
            format!("{node_name}/{segment}")
        };
    }

    let file_name = file_path.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default();
    if file_name == "main.fmf" {
        return node_name;
    }
    let stem = file_name.strip_suffix(".fmf").unwrap_or(&file_name);
    if node_name == "/" {
        format!("/{stem}")
    } else {
        format!("{node_name}/{stem}")
    }
}

/// The chain of scope-key segments from a file's own node down to `node`,
/// e.g. file scope `/a`, node `/a/b/c` -> `["b", "c"]`.
fn relative_segments(file_node_name: &str, node_name: &str) -> Result<Vec<String>> {
    if file_node_name == node_name {
        return Ok(Vec::new());
    }
    let suffix = node_name.strip_prefix(file_node_name).ok_or_else(|| {
        Error::GeneralError(format!("node {node_name} is not reachable from file scope {file_node_name}"))
    })?;
    Ok(suffix.trim_start_matches('/').split('/').filter(|s| !s.is_empty()).map(String::from).collect())
}

fn replace_at(map: &mut Map, segments: &[String], new_data: Map) -> Result<()> {
    let Some((head, rest)) = segments.split_first() else {
        replace_own_keys(map, new_data);
        return Ok(());
    };

    let scope_key = Value::String(format!("/{head}"));
    if map.get(&scope_key).is_none() {
        map.insert(scope_key.clone(), Value::Mapping(Map::new()));
    }
    let child_value = map.get_mut(&scope_key).expect("just inserted above if missing");
    let child_map = child_value.as_mapping_mut().ok_or_else(|| {
        Error::GeneralError(format!("scope key '/{head}' does not map to a mapping while writing back"))
    })?;
    replace_at(child_map, rest, new_data)
}

/// Drops every key at this level that isn't a nested scope key or the `/`
/// directive, then writes `new_data` in over the top — nested children and
/// the directive survive untouched.
fn replace_own_keys(map: &mut Map, new_data: Map) {
    let stale: Vec<Value> = map
        .iter()
        .filter(|(k, _)| {
            let as_str = k.as_str().unwrap_or_default();
            as_str != "/" && !as_str.starts_with('/')
        })
        .map(|(k, _)| k.clone())
        .collect();
    for key in stale {
        map.shift_remove(&key);
    }
    for (key, value) in new_data.iter() {
        map.insert(key.clone(), value.clone());
    }
}
