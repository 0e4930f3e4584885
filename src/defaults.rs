//! Default values shared across the library and the CLI.
//!
//! Centralizes the handful of constants the pipeline and command surface
//! both need, so they stay consistent without duplicating literals.

use std::path::PathBuf;

/// Attribute name holding a node's adjust rule list, when the caller
/// doesn't override it.
pub const DEFAULT_ADJUST_ATTRIBUTE: &str = "adjust";

/// `.fmf` marker directory name under a tree root.
pub const FMF_DIR: &str = ".fmf";

/// File inside `.fmf` whose single-line integer content marks a tree root.
pub const VERSION_FILE: &str = "version";

/// Returns the default cache directory used by `fmf clean` and a future
/// remote-reference fetcher.
///
/// Uses the platform-appropriate cache directory:
/// - Linux: `~/.cache/fmf` (XDG Base Directory)
/// - macOS: `~/Library/Caches/fmf`
/// - Windows: `{FOLDERID_LocalAppData}\fmf`
///
/// Falls back to `.fmf-cache` in the current directory if the platform
/// cache directory cannot be determined.
///
/// Can be overridden by `fmf clean`'s `--path` flag or the `FMF_CACHE`
/// environment variable.
pub fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".fmf-cache"))
        .join("fmf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_root_ends_with_fmf() {
        let cache_root = default_cache_root();
        assert!(cache_root.ends_with("fmf"));
    }

    #[test]
    fn default_cache_root_is_absolute_or_fallback() {
        let cache_root = default_cache_root();
        assert!(
            cache_root.is_absolute() || cache_root.starts_with(".fmf-cache"),
            "expected absolute path or fallback, got: {cache_root:?}"
        );
    }
}
