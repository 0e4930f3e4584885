//! # Shared Node Selection Arguments
//!
//! `ls` and `show` both select a set of nodes out of an assembled tree the
//! same way, so the selection flags and the logic that turns them into a
//! [`fmf::query::PruneOptions`]-driven result live here once instead of
//! being duplicated between the two command modules.
//!
//! `--condition` reuses the same `when`-expression engine `adjust` uses
//! (see `fmf::context`), but this crate's CLI never ingests a context from
//! the environment (per the design notes), so there's no `--context` flag
//! here. Instead, each node supplies its own context: every top-level
//! attribute on the node becomes a dimension bound to that attribute's
//! value(s), the same way a rule's `when` clause reads dimensions out of
//! whatever context it's handed. A node with `distro: fedora-32` satisfies
//! `--condition "distro == fedora"` on its own, without any external input.

use anyhow::Result;
use clap::Args;
use regex::Regex;
use std::path::PathBuf;

use fmf::assembler;
use fmf::context::{Context, Expr};
use fmf::discovery;
use fmf::node::Node;
use fmf::query::{self, PruneOptions};
use fmf::value::display_candidates;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Start looking for the tree root from this path. Defaults to the
    /// current directory.
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only include nodes whose name matches this regex. Repeatable; any
    /// match is enough (the patterns are OR-combined).
    #[arg(long = "name", value_name = "REGEX")]
    pub names: Vec<String>,

    /// Only include nodes matching this filter expression (`key: pattern`
    /// atoms joined by `&`/`|`). Repeatable; all filters must match
    /// (AND-combined).
    #[arg(long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    /// Only include nodes whose own attributes, read as a context, don't
    /// make this `when`-style expression evaluate to `false`. Repeatable;
    /// all conditions must hold. `CannotDecide` counts as a pass, the same
    /// way an un-decidable `adjust` rule is left alone rather than denied.
    #[arg(long = "condition", value_name = "EXPR")]
    pub conditions: Vec<String>,

    /// Print only these attributes instead of the whole node. Repeatable.
    #[arg(long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Include branch nodes as well as leaves.
    #[arg(long)]
    pub whole: bool,
}

impl SelectArgs {
    fn name_regex(&self) -> Result<Option<Regex>> {
        if self.names.is_empty() {
            return Ok(None);
        }
        let joined = self
            .names
            .iter()
            .map(|n| format!("(?:{n})"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&joined)
            .map(Some)
            .map_err(|e| fmf::suggestions::invalid_regex(&joined, &e))
    }

    /// Resolves the tree root, assembles it, and returns the nodes
    /// selected by these arguments, already filtered by `--condition`.
    pub fn select(&self) -> Result<Vec<Node>> {
        let start = self.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let root = discovery::find_root(&start)
            .map_err(|_| fmf::suggestions::root_missing(&start))?;
        let tree = assembler::assemble(&root).map_err(fmf::suggestions::enrich)?;

        let mut options = PruneOptions::new();
        options.whole = self.whole;
        options.sort = true;
        options.name = self.name_regex()?;
        options.filters = self.filters.clone();

        let nodes = query::prune(&tree.root, &options).map_err(fmf::suggestions::enrich)?;

        if self.conditions.is_empty() {
            return Ok(nodes);
        }
        let parsed: Result<Vec<Expr>> =
            self.conditions.iter().map(|c| Expr::parse(c).map_err(fmf::suggestions::enrich)).collect();
        let parsed = parsed?;
        Ok(nodes
            .into_iter()
            .filter(|n| {
                let ctx = node_context(n);
                parsed.iter().all(|e| !matches!(e.eval(&ctx), fmf::context::Decision::False))
            })
            .collect())
    }
}

/// Builds the context a node's own attributes describe, for `--condition`
/// evaluation: every top-level key becomes a dimension.
fn node_context(node: &Node) -> Context {
    let mut ctx = Context::new();
    for (key, value) in node.data().iter() {
        if let Some(name) = key.as_str() {
            ctx.set(name, display_candidates(value));
        }
    }
    ctx
}
