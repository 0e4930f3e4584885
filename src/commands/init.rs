//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which marks a directory as
//! a tree root by writing `.fmf/version`.

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use fmf::defaults::{FMF_DIR, VERSION_FILE};

/// Mark the current (or given) directory as a tree root
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize. Defaults to the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Execute the `init` command.
///
/// Creates `<path>/.fmf/version` containing `1`. Fails if `<path>/.fmf`
/// already exists, so a caller never silently clobbers an existing tree
/// root's marker.
pub fn execute(args: InitArgs) -> Result<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));
    let fmf_dir = root.join(FMF_DIR);

    if fmf_dir.exists() {
        anyhow::bail!("{} already exists", fmf_dir.display());
    }

    fs::create_dir_all(&fmf_dir)?;
    fs::write(fmf_dir.join(VERSION_FILE), "1\n")?;
    println!("Initialized empty tree root in {}", fmf_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_version_marker() {
        let dir = tempdir().unwrap();
        let args = InitArgs { path: Some(dir.path().to_path_buf()) };
        execute(args).unwrap();
        let marker = dir.path().join(".fmf").join("version");
        assert_eq!(fs::read_to_string(marker).unwrap(), "1\n");
    }

    #[test]
    fn refuses_to_overwrite_existing_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".fmf")).unwrap();
        let args = InitArgs { path: Some(dir.path().to_path_buf()) };
        assert!(execute(args).is_err());
    }
}
