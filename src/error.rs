//! # Error Handling
//!
//! This module defines the centralized error type for the `fmf` tree
//! pipeline. It uses `thiserror` to derive a comprehensive `Error` enum
//! covering the taxonomy from the error-handling design: root discovery,
//! file/loader failures, directive and merge failures, context/filter
//! failures, and a catch-all for everything else.
//!
//! Every variant carries enough context (a file path and/or node name,
//! where applicable) to produce a one-line diagnostic in non-debug mode
//! while still supporting `{:?}` in `--debug` mode via `#[source]`/`#[from]`
//! chaining.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the fmf tree pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// No ancestor directory containing `.fmf/version` was found.
    #[error("no tree root found above '{start}' (missing .fmf/version)")]
    RootMissing { start: PathBuf },

    /// A `.fmf` file or `.fmf/config` was unreadable, or a single mapping
    /// in it repeated a key.
    #[error("{path}: {kind}")]
    FileError { path: PathBuf, kind: FileErrorKind },

    /// A YAML document failed to parse.
    #[error("failed to parse YAML in {path}: {source}")]
    YamlError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The root of a `*.fmf` document was not a mapping.
    #[error("{path}: document root must be a mapping")]
    InvalidSyntax { path: PathBuf },

    /// A malformed `/` directive block.
    #[error("invalid directive in {node}: {message}")]
    InvalidDirective { node: String, message: String },

    /// An operator could not be applied because of incompatible types.
    #[error("cannot apply '{operator}' to key '{key}' on node {node}: {message}")]
    MergeError {
        node: String,
        key: String,
        operator: String,
        message: String,
    },

    /// A filter expression failed to parse.
    #[error("invalid filter expression '{expr}': {message}")]
    FilterError { expr: String, message: String },

    /// A `when` expression failed to parse or evaluate.
    #[error("invalid context expression '{expr}': {message}")]
    ContextError { expr: String, message: String },

    /// Wrapped `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped `regex::Error`.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Anything else that doesn't fit a more specific variant.
    #[error("{0}")]
    GeneralError(String),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The two ways loading a `.fmf` file or `.fmf/config` can fail short of a
/// YAML parse error: the file itself couldn't be read, or it could but one
/// of its mappings repeated a key.
#[derive(Debug)]
pub enum FileErrorKind {
    Unreadable(String),
    DuplicateKey(String),
}

impl std::fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileErrorKind::Unreadable(message) => write!(f, "{message}"),
            FileErrorKind::DuplicateKey(key) => write!(f, "duplicate key '{key}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_missing_message() {
        let err = Error::RootMissing {
            start: PathBuf::from("/tmp/project"),
        };
        assert!(err.to_string().contains("/tmp/project"));
    }

    #[test]
    fn duplicate_key_message() {
        let err = Error::FileError {
            path: PathBuf::from("main.fmf"),
            kind: FileErrorKind::DuplicateKey("tag".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("tag"));
        assert!(msg.contains("main.fmf"));
    }

    #[test]
    fn merge_error_message() {
        let err = Error::MergeError {
            node: "/c".to_string(),
            key: "tag".to_string(),
            operator: "+".to_string(),
            message: "cannot add string to mapping".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/c"));
        assert!(msg.contains("tag"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: Error = io.into();
        assert!(err.to_string().contains("nope"));
    }
}
