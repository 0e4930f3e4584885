//! # Node Directives
//!
//! The reserved `/` key inside a `*.fmf` mapping carries per-node
//! directives rather than attribute data: `inherit` (whether the node
//! starts from a clone of its parent's data) and `select` (whether the
//! node is included in a default `climb`/`prune` traversal).

use crate::error::{Error, Result};
use crate::value::Value;

/// Parsed `/` directive block for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub inherit: bool,
    pub select: Option<bool>,
}

impl Default for Directive {
    fn default() -> Self {
        Directive {
            inherit: true,
            select: None,
        }
    }
}

impl Directive {
    /// Parses a `/` block's value. Must be a mapping containing only
    /// `inherit` and/or `select`, both boolean.
    pub fn parse(node_name: &str, value: &Value) -> Result<Directive> {
        let map = value.as_mapping().ok_or_else(|| Error::InvalidDirective {
            node: node_name.to_string(),
            message: "the '/' directive block must be a mapping".to_string(),
        })?;

        let mut directive = Directive::default();
        for (key, val) in map.iter() {
            let key_str = key.as_str().ok_or_else(|| Error::InvalidDirective {
                node: node_name.to_string(),
                message: "directive keys must be strings".to_string(),
            })?;
            match key_str {
                "inherit" => {
                    directive.inherit = val.as_bool().ok_or_else(|| Error::InvalidDirective {
                        node: node_name.to_string(),
                        message: "'inherit' must be a boolean".to_string(),
                    })?;
                }
                "select" => {
                    directive.select = Some(val.as_bool().ok_or_else(|| Error::InvalidDirective {
                        node: node_name.to_string(),
                        message: "'select' must be a boolean".to_string(),
                    })?);
                }
                other => {
                    return Err(Error::InvalidDirective {
                        node: node_name.to_string(),
                        message: format!("unknown directive key '{other}'"),
                    })
                }
            }
        }
        Ok(directive)
    }

    /// Resolves the effective `select` flag given whether the node is a
    /// leaf (no children) at the time of resolution.
    pub fn effective_select(&self, is_leaf: bool) -> bool {
        self.select.unwrap_or(is_leaf)
    }
}
