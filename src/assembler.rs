//! # Tree Assembly
//!
//! Walks the ordered file stream produced by [`crate::discovery`], loading
//! each file with [`crate::loader`] and merging it into the tree built from
//! [`crate::node`]. This is where scope keys (`/child: {...}`), the `/`
//! directive, and the operator algebra in [`crate::operators`] all meet.
//!
//! Two parallel accumulators are kept per node while a document is merged
//! in: `data`, which starts as a clone of the parent's data at the moment
//! the node is first created (the inheritance point), and `original_data`,
//! which starts empty and only ever accumulates this node's *own*
//! contributions — resolved through the same operator algebra, but against
//! an independent, non-inherited base. That keeps `original_data` a
//! faithful "what did this node's own files actually say" snapshot
//! regardless of what it inherited, which is what `persistence::write_node`
//! needs to round-trip a node without clobbering inherited data it never
//! owned (see DESIGN.md).

use crate::directive::Directive;
use crate::discovery::{self, DiscoveredFile};
use crate::error::{Error, Result};
use crate::loader;
use crate::node::{Node, Tree};
use crate::operators::{self, split_operator};
use crate::value::{Map, Value};
use std::path::Path;

/// Discovers every `*.fmf` file under `root` and assembles them into a
/// [`Tree`], applying directives and the merge operator algebra in
/// discovery order.
pub fn assemble(root: &Path) -> Result<Tree> {
    let files = discovery::enumerate_files(root)?;
    let tree = Tree::new(root.to_path_buf());
    for file in &files {
        assemble_file(&tree, file)?;
    }
    Ok(tree)
}

fn assemble_file(tree: &Tree, file: &DiscoveredFile) -> Result<()> {
    log::debug!("assembling {} into node {}", file.path.display(), file.node_name);
    let mapping = loader::load_file(&file.path)?;
    let target = resolve_node(tree, &file.node_name);
    assemble_mapping(&target, &mapping, &file.path)
}

/// Resolves (creating as needed) the node named `node_name`, walking down
/// from the tree root and materialising any missing segment along the way.
fn resolve_node(tree: &Tree, node_name: &str) -> Node {
    if node_name == "/" {
        return tree.root.clone();
    }
    let mut current = tree.root.clone();
    for segment in node_name.trim_start_matches('/').split('/') {
        current = current.child_or_create(segment);
    }
    current
}

/// Merges one parsed mapping into `node`, recursing into scope keys and
/// applying the `/` directive and the operator algebra to leaf keys.
fn assemble_mapping(node: &Node, mapping: &Map, file_path: &Path) -> Result<()> {
    node.push_source(file_path.to_path_buf());

    for (raw_key, value) in mapping.iter() {
        let key_str = raw_key.as_str().ok_or_else(|| Error::GeneralError(format!(
            "non-string key in {}",
            file_path.display()
        )))?;

        if key_str == "/" {
            let directive = Directive::parse(&node.name(), value)?;
            if !directive.inherit {
                node.clear_inherited_data();
            }
            node.set_directive(directive);
            continue;
        }

        if let Some(rest) = key_str.strip_prefix('/') {
            let child_mapping = value.as_mapping().ok_or_else(|| Error::InvalidDirective {
                node: node.name(),
                message: format!("scope key '{key_str}' must map to a mapping"),
            })?;
            let mut current = node.clone();
            for segment in rest.split('/').filter(|s| !s.is_empty()) {
                current = current.child_or_create(segment);
            }
            assemble_mapping(&current, child_mapping, file_path)?;
            continue;
        }

        merge_leaf_key(node, key_str, value.clone())?;
    }

    Ok(())
}

/// Applies the operator algebra for one suffixed-or-plain leaf key against
/// both of a node's accumulators: the real, parent-inherited `data`, and
/// the self-only `original_data`.
fn merge_leaf_key(node: &Node, raw_key: &str, value: Value) -> Result<()> {
    let (base, op) = split_operator(raw_key);
    let base_key = Value::String(base.to_string());

    let existing = node.data().get(&base_key).cloned();
    match operators::apply(&node.name(), base, op, existing.as_ref(), value.clone())? {
        Some(merged) => {
            node.data_mut().insert(base_key.clone(), merged);
        }
        None => {
            node.data_mut().shift_remove(&base_key);
        }
    }

    let existing_own = node.original_data().get(&base_key).cloned();
    match operators::apply(&node.name(), base, op, existing_own.as_ref(), value)? {
        Some(merged) => {
            node.original_data_mut().insert(base_key, merged);
        }
        None => {
            node.original_data_mut().shift_remove(&base_key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn init_root(root: &Path) {
        fs::create_dir_all(root.join(".fmf")).unwrap();
        fs::write(root.join(".fmf").join("version"), "1\n").unwrap();
    }

    #[test]
    fn scenario_a_simple_inheritance() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(dir.path().join("main.fmf"), "tag:\n  - a\ntest: run.sh\n").unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("c").join("main.fmf"), "tag+:\n  - b\n").unwrap();

        let tree = assemble(dir.path()).unwrap();
        let root = &tree.root;
        assert_eq!(root.data().get("tag").unwrap().as_sequence().unwrap().len(), 1);

        let c = root.child("c").unwrap();
        let tags: Vec<&str> = c
            .data()
            .get("tag")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(c.data().get("test").unwrap().as_str(), Some("run.sh"));
    }

    #[test]
    fn scenario_b_inherit_false() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(
            dir.path().join("main.fmf"),
            "x: 1\n/child:\n  \"/\":\n    inherit: false\n  y: 2\n",
        )
        .unwrap();

        let tree = assemble(dir.path()).unwrap();
        assert_eq!(tree.root.data().get("x").unwrap().as_i64(), Some(1));

        let child = tree.root.child("child").unwrap();
        assert!(!child.data().contains_key("x"));
        assert_eq!(child.data().get("y").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn scenario_c_regex_substitute() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(
            dir.path().join("main.fmf"),
            "require:\n  - python2-foo\n  - bar\n/c:\n  require~: \"/python2-/python3-/\"\n",
        )
        .unwrap();

        let tree = assemble(dir.path()).unwrap();
        let c = tree.root.child("c").unwrap();
        let reqs: Vec<&str> = c
            .data()
            .get("require")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(reqs, vec!["python3-foo", "bar"]);
    }

    #[test]
    fn operator_suffix_never_survives_assembly() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(dir.path().join("main.fmf"), "tag+:\n  - a\n").unwrap();
        let tree = assemble(dir.path()).unwrap();
        assert!(tree.root.data().contains_key("tag"));
        assert!(!tree.root.data().contains_key("tag+"));
    }

    #[test]
    fn compound_scope_key_creates_chain() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(dir.path().join("main.fmf"), "/a/b/c:\n  x: 1\n").unwrap();
        let tree = assemble(dir.path()).unwrap();
        let node = tree.root.find("/a/b/c").unwrap();
        assert_eq!(node.data().get("x").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn original_data_excludes_inherited_values() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(dir.path().join("main.fmf"), "tag:\n  - a\n").unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("c").join("main.fmf"), "other: 1\n").unwrap();

        let tree = assemble(dir.path()).unwrap();
        let c = tree.root.child("c").unwrap();
        assert!(c.data().contains_key("tag"));
        assert!(!c.original_data().contains_key("tag"));
        assert!(c.original_data().contains_key("other"));
    }
}
