//! # fmf
//!
//! A library for building a hierarchical metadata tree out of YAML files
//! scattered across a directory tree, then merging, adjusting and querying
//! that tree. It is consumed by downstream test-orchestration tools that
//! attach meaning to the resulting node attributes (`test`, `require`,
//! `enabled`, ...); this crate itself only moves data from files to a tree.
//!
//! ## Core concepts
//!
//! - **Discovery** (`discovery`): finds the tree root (the nearest ancestor
//!   directory carrying `.fmf/version`) and enumerates `*.fmf` files in
//!   deterministic order.
//! - **Loader** (`loader`): parses one `*.fmf` file into a strictly-ordered
//!   mapping, rejecting duplicate keys.
//! - **Node/Tree** (`node`): the assembled tree's data model — parent-owned
//!   children, weak parent back-references, ordered attribute data.
//! - **Directive** (`directive`): the reserved `/` key's `inherit`/`select`
//!   flags.
//! - **Operators** (`operators`): the `+`, `+<`, `-`, `~`, `-~` merge
//!   algebra applied during assembly and adjust.
//! - **Assembler** (`assembler`): walks discovered files, builds the tree,
//!   applies directives and operators.
//! - **Version/Context** (`version`, `context`): the dimension/version
//!   value model and the three-valued `when`-expression language.
//! - **Adjuster** (`adjust`): conditionally merges `adjust` rule patches
//!   into node data against a `Context`.
//! - **Query** (`query`): `climb`/`prune` traversal and the filter
//!   expression grammar.
//! - **Persistence** (`persistence`): writes a node's own data back to its
//!   source file.
//! - **Format** (`format`): the small sandboxed `--format`/`--value`
//!   template expression language used by the CLI.
//!
//! ## Pipeline
//!
//! ```text
//! filesystem -> Discovery -> Loader -> Assembler -> Adjuster -> Query/Filter
//! ```
//!
//! The pipeline is single-threaded and synchronous: building a tree,
//! adjusting it, and querying it all run on one logical task, and none of
//! it suspends. The library never installs a global logger or holds any
//! process-wide mutable state of its own; it only emits through the `log`
//! facade, leaving initialization to whoever embeds it (the `fmf` binary
//! does so once, in `main`).

pub mod adjust;
pub mod assembler;
pub mod context;
pub mod defaults;
pub mod directive;
pub mod discovery;
pub mod error;
pub mod format;
pub mod loader;
pub mod node;
pub mod operators;
pub mod persistence;
pub mod query;
pub mod suggestions;
pub mod value;
pub mod version;

/// Process exit codes, shared between the library's error taxonomy and the
/// CLI binary so both agree on what a given code means.
pub mod exit_codes {
    /// Successful completion.
    pub const SUCCESS: i32 = 0;
    /// An operational error occurred (including a caught library error).
    pub const ERROR: i32 = 1;
    /// The command line itself was invalid.
    pub const USAGE: i32 = 2;
}
