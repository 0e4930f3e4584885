//! # Output Formatting
//!
//! The CLI's `--format`/`--value` surface is deliberately a small, sandboxed
//! expression language, not a general scripting capability (see Design
//! Notes in SPEC_FULL.md): it can read a node's name, root path and data
//! by dotted key path, and join a handful of those into a template string.
//! There is no way to call arbitrary code, iterate, or mutate anything
//! through this mechanism.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::value::{to_display_string, Value};

/// Evaluates a single `--value` expression against `node`, returning the
/// display form of whatever it resolves to.
///
/// Supported expressions:
/// - `name` — the node's absolute name
/// - `root` — the tree root path
/// - `data` — the node's full data mapping
/// - `data.KEY` or `data.KEY.NESTED...` — a dotted path into the data
/// - `basename(root)` — the root path's final component
pub fn eval_value_expr(node: &Node, expr: &str) -> Result<String> {
    let expr = expr.trim();
    if expr == "name" {
        return Ok(node.name());
    }
    if expr == "root" {
        return Ok(node.root().display().to_string());
    }
    if expr == "data" {
        return Ok(to_display_string(&Value::Mapping(node.data().clone())));
    }
    if let Some(inner) = expr.strip_prefix("basename(").and_then(|s| s.strip_suffix(')')) {
        let resolved = eval_value_expr(node, inner)?;
        let base = std::path::Path::new(&resolved)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(resolved);
        return Ok(base);
    }
    if let Some(path) = expr.strip_prefix("data.") {
        let value = lookup_path(node, path)?;
        return Ok(to_display_string(&value));
    }
    Err(Error::GeneralError(format!("unsupported --value expression: '{expr}'")))
}

fn lookup_path(node: &Node, path: &str) -> Result<Value> {
    let data = node.data();
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or_default();
    let Some(mut current) = data.get(first) else {
        return Ok(Value::Null);
    };
    for segment in segments {
        current = match current.as_mapping().and_then(|m| m.get(segment)) {
            Some(v) => v,
            None => return Ok(Value::Null),
        };
    }
    Ok(current.clone())
}

/// Expands a `--format` template string, replacing each `{expr}` span with
/// the result of [`eval_value_expr`] on its contents. `{{`/`}}` escape to a
/// literal brace.
pub fn expand_format(node: &Node, template: &str) -> Result<String> {
    let mut out = String::new();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut expr = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    expr.push(inner);
                }
                if !closed {
                    return Err(Error::GeneralError(format!("unterminated '{{' in format template '{template}'")));
                }
                out.push_str(&eval_value_expr(node, &expr)?);
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Tree;
    use std::path::PathBuf;

    fn sample_tree() -> Tree {
        let tree = Tree::new(PathBuf::from("/tmp/project"));
        tree.root.data_mut().insert(Value::String("summary".into()), Value::String("a test".into()));
        let nested = serde_yaml::Mapping::from_iter([(
            Value::String("sh".into()),
            Value::String("echo hi".into()),
        )]);
        tree.root.data_mut().insert(Value::String("execute".into()), Value::Mapping(nested));
        tree
    }

    #[test]
    fn name_and_root_expressions() {
        let tree = sample_tree();
        assert_eq!(eval_value_expr(&tree.root, "name").unwrap(), "/");
        assert_eq!(eval_value_expr(&tree.root, "root").unwrap(), "/tmp/project");
    }

    #[test]
    fn dotted_data_path() {
        let tree = sample_tree();
        assert_eq!(eval_value_expr(&tree.root, "data.summary").unwrap(), "a test");
        assert_eq!(eval_value_expr(&tree.root, "data.execute.sh").unwrap(), "echo hi");
    }

    #[test]
    fn missing_key_resolves_to_empty() {
        let tree = sample_tree();
        assert_eq!(eval_value_expr(&tree.root, "data.nope").unwrap(), "");
    }

    #[test]
    fn basename_of_root() {
        let tree = sample_tree();
        assert_eq!(eval_value_expr(&tree.root, "basename(root)").unwrap(), "project");
    }

    #[test]
    fn format_template_with_braces() {
        let tree = sample_tree();
        let out = expand_format(&tree.root, "{name}: {data.summary} {{literal}}").unwrap();
        assert_eq!(out, "/: a test {literal}");
    }

    #[test]
    fn unknown_expression_is_error() {
        let tree = sample_tree();
        assert!(eval_value_expr(&tree.root, "delete_everything()").is_err());
    }
}
