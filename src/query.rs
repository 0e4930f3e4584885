//! # Traversal, Selection and the Filter-Expression Grammar
//!
//! `climb` walks a subtree yielding the nodes a default traversal should
//! see, honouring the `select` directive override described in `node.rs`
//! and `directive.rs`. `prune` layers name-regex, required-key,
//! filter-expression and arbitrary-predicate filters on top, all
//! AND-combined.
//!
//! The filter-expression grammar (`key: pattern` atoms joined by `&`/`|`,
//! with a bare pattern meaning "match the node's own name") is its own
//! small recursive-descent affair, independent of the `when`-expression
//! grammar in `context.rs` — they look similar but serve different data
//! (node attributes vs. a version context) and the distilled spec keeps
//! them as two separate languages.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::value::display_candidates;
use regex::Regex;

/// `climb(whole, sort)`: descendants of `node` (including `node` itself)
/// that pass selection, in the requested child order.
pub fn climb(node: &Node, whole: bool, sort: bool) -> Vec<Node> {
    let mut out = Vec::new();
    climb_into(node, whole, sort, &mut out);
    out
}

fn climb_into(node: &Node, whole: bool, sort: bool, out: &mut Vec<Node>) {
    if is_selected(node, whole) {
        out.push(node.clone());
    }
    let children = if sort { node.children_sorted() } else { node.children() };
    for child in children {
        climb_into(&child, whole, sort, out);
    }
}

/// Whether `node` belongs in a `climb` result: the `/` directive's
/// `select` flag wins outright when present; otherwise a leaf is
/// default-selected unconditionally and a branch only when `whole`.
fn is_selected(node: &Node, whole: bool) -> bool {
    match node.directive().select {
        Some(explicit) => explicit,
        None => {
            if node.is_leaf() {
                true
            } else {
                whole
            }
        }
    }
}

/// AND-combined selection criteria for [`prune`].
#[derive(Default)]
pub struct PruneOptions {
    pub whole: bool,
    pub sort: bool,
    pub name: Option<Regex>,
    pub required_keys: Vec<String>,
    pub filters: Vec<String>,
    pub predicates: Vec<Box<dyn Fn(&Node) -> bool>>,
}

impl PruneOptions {
    pub fn new() -> PruneOptions {
        PruneOptions::default()
    }
}

/// `climb`s from `node`, then keeps only nodes matching every configured
/// filter, in traversal order.
pub fn prune(node: &Node, options: &PruneOptions) -> Result<Vec<Node>> {
    let parsed_filters: Result<Vec<FilterExpr>> =
        options.filters.iter().map(|f| FilterExpr::parse(f)).collect();
    let parsed_filters = parsed_filters?;

    let candidates = climb(node, options.whole, options.sort);
    let out = candidates
        .into_iter()
        .filter(|n| {
            if let Some(re) = &options.name {
                if !re.is_match(&n.name()) {
                    return false;
                }
            }
            if !options.required_keys.iter().all(|k| n.data().contains_key(k.as_str())) {
                return false;
            }
            if !parsed_filters.iter().all(|f| f.matches(n)) {
                return false;
            }
            options.predicates.iter().all(|p| p(n))
        })
        .collect();
    Ok(out)
}

// ---------------------------------------------------------------------
// Filter-expression grammar
// ---------------------------------------------------------------------

/// A parsed filter expression: an OR-of-ANDs of atoms.
#[derive(Debug, Clone)]
pub struct FilterExpr {
    root: FNode,
}

#[derive(Debug, Clone)]
enum FNode {
    Atom(Atom),
    And(Box<FNode>, Box<FNode>),
    Or(Box<FNode>, Box<FNode>),
}

#[derive(Debug, Clone)]
struct Atom {
    key: Option<String>,
    pattern: Regex,
}

impl Atom {
    fn matches(&self, node: &Node) -> bool {
        match &self.key {
            None => self.pattern.is_match(&node.name()),
            Some(key) => match node.data().get(key.as_str()) {
                None => false,
                Some(value) => display_candidates(value).iter().any(|s| self.pattern.is_match(s)),
            },
        }
    }
}

impl FilterExpr {
    pub fn parse(input: &str) -> Result<FilterExpr> {
        let or_groups = split_unescaped(input, '|');
        if or_groups.iter().all(|g| g.trim().is_empty()) {
            return Err(Error::FilterError {
                expr: input.to_string(),
                message: "empty filter expression".to_string(),
            });
        }

        let mut or_terms: Vec<FNode> = Vec::new();
        for group in or_groups {
            let and_atoms = split_unescaped(&group, '&');
            let mut and_terms: Vec<FNode> = Vec::new();
            for atom_str in and_atoms {
                and_terms.push(FNode::Atom(parse_atom(atom_str.trim(), input)?));
            }
            let combined = and_terms
                .into_iter()
                .reduce(|a, b| FNode::And(Box::new(a), Box::new(b)))
                .ok_or_else(|| Error::FilterError {
                    expr: input.to_string(),
                    message: "empty '&'-clause in filter expression".to_string(),
                })?;
            or_terms.push(combined);
        }

        let root = or_terms
            .into_iter()
            .reduce(|a, b| FNode::Or(Box::new(a), Box::new(b)))
            .expect("checked non-empty above");
        Ok(FilterExpr { root })
    }

    pub fn matches(&self, node: &Node) -> bool {
        eval(&self.root, node)
    }
}

fn eval(node_expr: &FNode, node: &Node) -> bool {
    match node_expr {
        FNode::Atom(a) => a.matches(node),
        FNode::And(a, b) => eval(a, node) && eval(b, node),
        FNode::Or(a, b) => eval(a, node) || eval(b, node),
    }
}

/// Splits `s` on unescaped occurrences of `delim` (one of `|`/`&`);
/// `\|`/`\&` are unescaped into a literal delimiter character rather than
/// treated as a split point, so a pattern can match a literal `|` or `&`.
/// Any other backslash sequence (e.g. regex escapes like `\d`) passes
/// through untouched.
fn split_unescaped(s: &str, delim: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '|' || next == '&' {
                    current.push(next);
                    chars.next();
                    continue;
                }
            }
            current.push(c);
            continue;
        }
        if c == delim {
            parts.push(std::mem::take(&mut current));
            continue;
        }
        current.push(c);
    }
    parts.push(current);
    parts
}

fn parse_atom(atom: &str, whole_expr: &str) -> Result<Atom> {
    if atom.is_empty() {
        return Err(Error::FilterError {
            expr: whole_expr.to_string(),
            message: "empty filter atom".to_string(),
        });
    }
    let (key, pattern_str) = match atom.split_once(':') {
        Some((k, p)) if is_key_ident(k.trim()) => (Some(k.trim().to_string()), p.trim().to_string()),
        _ => (None, atom.to_string()),
    };
    let pattern = Regex::new(&pattern_str).map_err(|e| Error::FilterError {
        expr: whole_expr.to_string(),
        message: format!("invalid pattern '{pattern_str}': {e}"),
    })?;
    Ok(Atom { key, pattern })
}

fn is_key_ident(s: &str) -> bool {
    !s.is_empty()
        && !s.contains(char::is_whitespace)
        && s.chars().all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
