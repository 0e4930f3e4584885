//! # Adjust Engine
//!
//! Applies a node's `adjust` rule list against a supplied [`Context`],
//! deep-merging each rule's patch into the node's `data` through the same
//! operator algebra the Assembler uses, whenever the rule's `when`
//! expression decides `True`. See `context.rs` for the expression
//! language and `operators.rs` for the merge algebra itself.

use crate::context::{Context, Decision, Expr};
use crate::error::{Error, Result};
use crate::node::{Node, Tree};
use crate::operators::{self, split_operator};
use crate::value::{Map, Value};

/// The reserved keys inside one `adjust` rule; everything else in the
/// rule's mapping is the patch applied to the node.
const RESERVED_RULE_KEYS: &[&str] = &["when", "continue", "because"];

/// One parsed `adjust` rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub when: Option<Expr>,
    pub cont: bool,
    pub because: Option<String>,
    pub patch: Map,
}

impl Rule {
    fn parse(raw: &Value) -> Result<Rule> {
        let map = raw
            .as_mapping()
            .ok_or_else(|| Error::GeneralError("adjust rule must be a mapping".to_string()))?;

        let when = match map.get("when") {
            Some(Value::String(s)) => Some(Expr::parse(s)?),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(Error::ContextError {
                    expr: crate::value::to_display_string(other),
                    message: "'when' must be a string expression".to_string(),
                })
            }
        };
        let cont = map.get("continue").and_then(Value::as_bool).unwrap_or(true);
        let because = map.get("because").and_then(Value::as_str).map(|s| s.to_string());

        let mut patch = Map::new();
        for (k, v) in map.iter() {
            let k_str = k.as_str().unwrap_or_default();
            if RESERVED_RULE_KEYS.contains(&k_str) {
                continue;
            }
            patch.insert(k.clone(), v.clone());
        }

        Ok(Rule { when, cont, because, patch })
    }
}

/// Options controlling one adjust pass over a tree.
#[derive(Default)]
pub struct AdjustOptions {
    /// Attribute name holding a node's rule list, e.g. `adjust`.
    pub attribute: String,
    /// Extra rules (already in raw form) appended after each node's own
    /// in-place rules, e.g. supplied by a caller outside the tree data.
    pub additional_rules: Vec<Value>,
    /// Optional per-node callback that can filter/replace the effective
    /// rule list for a node before it runs.
    pub rule_filter: Option<Box<dyn Fn(&Node, Vec<Rule>) -> Vec<Rule>>>,
}

impl AdjustOptions {
    pub fn new() -> AdjustOptions {
        AdjustOptions {
            attribute: crate::defaults::DEFAULT_ADJUST_ATTRIBUTE.to_string(),
            additional_rules: Vec::new(),
            rule_filter: None,
        }
    }
}

/// Runs the adjuster over every node in `tree`, in pre-order, against
/// `context`. Already-adjusted nodes are left untouched, which is what
/// makes re-running adjust with the same (or any) context idempotent.
pub fn adjust_tree(tree: &Tree, context: &Context, options: &AdjustOptions) -> Result<()> {
    for node in tree.root.walk() {
        adjust_node(&node, context, options)?;
    }
    Ok(())
}

fn adjust_node(node: &Node, context: &Context, options: &AdjustOptions) -> Result<()> {
    if node.adjusted() {
        return Ok(());
    }

    let mut rules = read_rules(node, &options.attribute)?;
    for raw in &options.additional_rules {
        rules.push(Rule::parse(raw)?);
    }
    if let Some(filter) = &options.rule_filter {
        rules = filter(node, rules);
    }

    for rule in rules {
        let decision = match &rule.when {
            Some(expr) => expr.eval(context),
            None => Decision::True,
        };
        if decision.is_true() {
            merge_patch(node, &rule.patch)?;
            if !rule.cont {
                break;
            }
        }
    }

    node.mark_adjusted();
    Ok(())
}

fn read_rules(node: &Node, attribute: &str) -> Result<Vec<Rule>> {
    let data = node.data();
    match data.get(attribute) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(rules)) => rules.iter().map(Rule::parse).collect(),
        Some(other) => Err(Error::GeneralError(format!(
            "'{attribute}' on node {} must be a list of rules, found {}",
            node.name(),
            crate::value::to_display_string(other)
        ))),
    }
}

fn merge_patch(node: &Node, patch: &Map) -> Result<()> {
    for (raw_key, value) in patch.iter() {
        let key_str = raw_key.as_str().ok_or_else(|| {
            Error::GeneralError(format!("non-string key in adjust patch on node {}", node.name()))
        })?;
        let (base, op) = split_operator(key_str);
        let base_key = Value::String(base.to_string());
        let existing = node.data().get(&base_key).cloned();
        match operators::apply(&node.name(), base, op, existing.as_ref(), value.clone())? {
            Some(merged) => {
                node.data_mut().insert(base_key, merged);
            }
            None => {
                node.data_mut().shift_remove(&base_key);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Tree;
    use std::path::PathBuf;

    fn set_adjust(node: &Node, yaml: &str) {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        node.data_mut().insert(Value::String("adjust".to_string()), value);
    }

    #[test]
    fn scenario_e_continue_false_short_circuits() {
        let tree = Tree::new(PathBuf::from("/tmp/root"));
        tree.root.data_mut().insert(Value::String("enabled".into()), Value::Bool(true));
        set_adjust(
            &tree.root,
            r#"
            - when: "distro == fedora"
              enabled: false
              continue: false
            - enabled: never-reached
            "#,
        );

        let mut ctx = Context::new();
        ctx.set("distro", vec!["fedora"]);
        adjust_tree(&tree, &ctx, &AdjustOptions::new()).unwrap();

        assert_eq!(tree.root.data().get("enabled").unwrap(), &Value::Bool(false));
    }

    #[test]
    fn cannot_decide_and_false_leave_node_unchanged() {
        let tree = Tree::new(PathBuf::from("/tmp/root"));
        tree.root.data_mut().insert(Value::String("x".into()), Value::Bool(true));
        set_adjust(
            &tree.root,
            r#"
            - when: "distro == centos"
              x: false
            "#,
        );
        let ctx = Context::new();
        adjust_tree(&tree, &ctx, &AdjustOptions::new()).unwrap();
        assert_eq!(tree.root.data().get("x").unwrap(), &Value::Bool(true));
    }

    #[test]
    fn rerun_with_same_context_is_idempotent() {
        let tree = Tree::new(PathBuf::from("/tmp/root"));
        set_adjust(&tree.root, "- tag+: [a]\n");
        let ctx = Context::new();
        let opts = AdjustOptions::new();
        adjust_tree(&tree, &ctx, &opts).unwrap();
        let first = tree.root.data().get("tag").cloned();
        adjust_tree(&tree, &ctx, &opts).unwrap();
        assert_eq!(tree.root.data().get("tag").cloned(), first);
    }

    #[test]
    fn additional_rules_append_after_node_rules() {
        let tree = Tree::new(PathBuf::from("/tmp/root"));
        set_adjust(&tree.root, "- tag: [a]\n");
        let ctx = Context::new();
        let mut opts = AdjustOptions::new();
        opts.additional_rules.push(serde_yaml::from_str("tag: [b]").unwrap());
        adjust_tree(&tree, &ctx, &opts).unwrap();
        let tags: Vec<&str> = tree
            .root
            .data()
            .get("tag")
            .unwrap()
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(tags, vec!["b"]);
    }
}
