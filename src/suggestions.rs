//! # Error Suggestions
//!
//! Helper functions for turning a bare library error into a message with a
//! hint attached. Following CLI recommendations, errors should tell users
//! what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fmf::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("root not found starting from {}", start.display());
//!
//! // Use:
//! return Err(suggestions::root_missing(&start));
//! ```

use std::path::Path;

use crate::defaults::{FMF_DIR, VERSION_FILE};

/// Generate an error for when no tree root can be found above `start`.
pub fn root_missing(start: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No tree root found above {start}\n\n\
         hint: Run 'fmf init' to create a {fmf_dir}/{version} marker\n\
         hint: Use --path to point at a directory inside an existing tree",
        start = start.display(),
        fmf_dir = FMF_DIR,
        version = VERSION_FILE,
    )
}

/// Generate an error for a duplicate key found while loading a `*.fmf` file.
pub fn duplicate_key(path: &Path, key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Duplicate key '{key}' in {path}\n\n\
         hint: YAML mappings silently overwrite duplicate keys; fmf rejects\n\
         them instead so a typo doesn't shadow an earlier attribute",
        path = path.display()
    )
}

/// Generate an error for an invalid regex pattern (a `--name` value, a
/// filter atom's pattern, or a `~`/`-~` operator's pattern).
pub fn invalid_regex(pattern: &str, error: &regex::Error) -> anyhow::Error {
    let hint = match error {
        regex::Error::Syntax(msg) if msg.contains("unclosed") => {
            "hint: Check for unclosed brackets, parentheses, or braces"
        }
        regex::Error::Syntax(msg) if msg.contains("repetition") => {
            "hint: Repetition operators (+, *, ?) must follow a pattern"
        }
        _ => "hint: Check the pattern syntax",
    };

    anyhow::anyhow!(
        "Invalid regex pattern: {pattern}\n\
         error: {error}\n\n\
         {hint}"
    )
}

/// Generate an error for an unrecognized operator suffix on a key.
pub fn unknown_operator(key: &str) -> anyhow::Error {
    let valid_suffixes = ["+", "+<", "-", "~", "-~"];
    let suggestion = key
        .chars()
        .rev()
        .take(2)
        .collect::<String>()
        .chars()
        .rev()
        .collect::<String>();
    let hint = find_similar(&suggestion, &valid_suffixes)
        .map(|s| format!("\nhint: Did you mean a trailing '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Unrecognized operator suffix on key '{key}'{hint}\n\n\
         Valid suffixes are: {ops}",
        ops = valid_suffixes.join(", ")
    )
}

/// Generate an error for a `when` expression that failed to parse.
pub fn invalid_condition(expr: &str, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid condition '{expr}': {message}\n\n\
         hint: Conditions look like 'distro == fedora and arch != i386'\n\
         hint: Use parentheses to group 'and'/'or' explicitly"
    )
}

/// Generate an error for a filter expression that failed to parse.
pub fn invalid_filter(expr: &str, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid filter '{expr}': {message}\n\n\
         hint: Filters look like 'tag: Tier1 & enabled: true'\n\
         hint: Escape a literal '&' or '|' inside a pattern as '\\&' / '\\|'"
    )
}

/// Attaches a hint to a library error where one of the constructors above
/// applies, otherwise falls back to the error's own `Display` message.
/// Used at the CLI boundary so every command gets the same hinting without
/// each one re-matching the error taxonomy by hand.
pub fn enrich(error: crate::error::Error) -> anyhow::Error {
    use crate::error::{Error, FileErrorKind};
    match &error {
        Error::FileError { path, kind: FileErrorKind::DuplicateKey(key) } => {
            duplicate_key(path, key)
        }
        Error::RootMissing { start } => root_missing(start),
        Error::FilterError { expr, message } => invalid_filter(expr, message),
        Error::ContextError { expr, message } => invalid_condition(expr, message),
        _ => error.into(),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len().max(candidate.len()) {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
