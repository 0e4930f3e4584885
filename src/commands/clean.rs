//! # Clean Command Implementation
//!
//! Removes the configured cache directory. Kept for interface completeness
//! with a future remote-reference fetcher; this crate doesn't populate the
//! cache directory itself, so this is a no-op on a tree that never used
//! remote references.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use fmf::defaults::default_cache_root;

/// Remove the configured cache directory
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Cache directory to remove. Defaults to the platform cache
    /// directory, the same one `default_cache_root` resolves.
    #[arg(long, value_name = "DIR", env = "FMF_CACHE")]
    pub path: Option<PathBuf>,
}

/// Execute the `clean` command.
pub fn execute(args: CleanArgs) -> Result<()> {
    let cache_root = args.path.unwrap_or_else(default_cache_root);
    if !cache_root.exists() {
        println!("Nothing to clean: {} does not exist", cache_root.display());
        return Ok(());
    }
    std::fs::remove_dir_all(&cache_root)?;
    println!("Removed {}", cache_root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn removes_existing_cache_dir() {
        let dir = tempdir().unwrap();
        let cache = dir.path().join("cache");
        std::fs::create_dir_all(&cache).unwrap();
        let args = CleanArgs { path: Some(cache.clone()) };
        execute(args).unwrap();
        assert!(!cache.exists());
    }

    #[test]
    fn missing_cache_dir_is_a_no_op() {
        let dir = tempdir().unwrap();
        let cache = dir.path().join("nope");
        let args = CleanArgs { path: Some(cache.clone()) };
        assert!(execute(args).is_ok());
    }
}
