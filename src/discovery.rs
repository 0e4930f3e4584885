//! # Tree Root Discovery and File Enumeration
//!
//! Finds the nearest ancestor directory carrying a `.fmf/version` marker,
//! then walks the tree under it in the deterministic order the Assembler
//! depends on: `main.fmf` first, then other `*.fmf` files lexicographically,
//! then subdirectories lexicographically, recursing the same way. This
//! ordering is fixed at discovery time and is never affected by the
//! `sort` flag on `climb`/`prune`, which only reorders query-time
//! traversal (see `query.rs`).

use crate::error::{Error, FileErrorKind, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// `.fmf/config`'s `explore.include` list: files/directories always
/// included regardless of the dot-prefix exclusion rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FmfConfig {
    #[serde(default)]
    pub explore: ExploreConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreConfig {
    #[serde(default)]
    pub include: Vec<String>,
}

/// One discovered metadata file, paired with the hierarchical node name
/// it is assembled into.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub node_name: String,
}

/// Ascends from `start` looking for the nearest ancestor containing a
/// readable `.fmf/version` file.
pub fn find_root(start: &Path) -> Result<PathBuf> {
    let mut current = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()?.join(start)
    };
    if current.is_file() {
        current = current.parent().map(|p| p.to_path_buf()).unwrap_or(current);
    }

    loop {
        let marker = current.join(".fmf").join("version");
        if marker.is_file() {
            fs::read_to_string(&marker).map_err(|e| Error::FileError {
                path: marker.clone(),
                kind: FileErrorKind::Unreadable(e.to_string()),
            })?;
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                return Err(Error::RootMissing {
                    start: start.to_path_buf(),
                })
            }
        }
    }
}

/// Reads `<root>/.fmf/config`, if present.
pub fn load_config(root: &Path) -> Result<FmfConfig> {
    let path = root.join(".fmf").join("config");
    if !path.is_file() {
        return Ok(FmfConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| Error::FileError {
        path: path.clone(),
        kind: FileErrorKind::Unreadable(e.to_string()),
    })?;
    serde_yaml::from_str(&content).map_err(|e| Error::YamlError { path, source: e })
}

/// Enumerates every `*.fmf` file under `root` in assembly order, mapping
/// each to its hierarchical node name.
pub fn enumerate_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let config = load_config(root)?;
    let mut visited = HashSet::new();
    let mut out = Vec::new();
    walk_dir(root, root, "/", &config, &mut visited, &mut out)?;
    Ok(out)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    node_name: &str,
    config: &FmfConfig,
    visited: &mut HashSet<PathBuf>,
    out: &mut Vec<DiscoveredFile>,
) -> Result<()> {
    let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    if !visited.insert(canonical) {
        log::warn!("skipping already-visited directory (symlink loop?): {}", dir.display());
        return Ok(());
    }

    let mut fmf_files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| Error::FileError {
        path: dir.to_path_buf(),
        kind: FileErrorKind::Unreadable(e.to_string()),
    })? {
        let entry = entry.map_err(|e| Error::FileError {
            path: dir.to_path_buf(),
            kind: FileErrorKind::Unreadable(e.to_string()),
        })?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            if file_name == ".fmf" {
                continue;
            }
            let always_included = config.explore.include.iter().any(|inc| inc == &file_name);
            if file_name.starts_with('.') && !always_included {
                continue;
            }
            subdirs.push((file_name, path));
        } else if path.is_file() {
            let always_included = config.explore.include.iter().any(|inc| inc == &file_name);
            if file_name.ends_with(".fmf") || always_included {
                fmf_files.push((file_name, path));
            }
        }
    }

    fmf_files.sort_by(|a, b| file_order_key(&a.0).cmp(&file_order_key(&b.0)));
    subdirs.sort_by(|a, b| a.0.cmp(&b.0));

    for (file_name, path) in fmf_files {
        let target_name = file_node_name(node_name, &file_name);
        out.push(DiscoveredFile { path, node_name: target_name });
    }

    for (dir_name, path) in subdirs {
        let child_name = if node_name == "/" {
            format!("/{dir_name}")
        } else {
            format!("{node_name}/{dir_name}")
        };
        walk_dir(root, &path, &child_name, config, visited, out)?;
    }

    Ok(())
}

/// Sort key that puts `main.fmf` before every other filename.
fn file_order_key(file_name: &str) -> (u8, &str) {
    if file_name == "main.fmf" {
        (0, file_name)
    } else {
        (1, file_name)
    }
}

/// `main.fmf` names the containing directory's own node; `X.fmf` names a
/// child node `X` under it.
fn file_node_name(dir_node_name: &str, file_name: &str) -> String {
    if file_name == "main.fmf" {
        return dir_node_name.to_string();
    }
    let stem = file_name.strip_suffix(".fmf").unwrap_or(file_name);
    if dir_node_name == "/" {
        format!("/{stem}")
    } else {
        format!("{dir_node_name}/{stem}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_root(root: &Path) {
        fs::create_dir_all(root.join(".fmf")).unwrap();
        fs::write(root.join(".fmf").join("version"), "1\n").unwrap();
    }

    #[test]
    fn finds_root_from_nested_start() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        let found = find_root(&nested).unwrap();
        assert_eq!(found.canonicalize().unwrap(), dir.path().canonicalize().unwrap());
    }

    #[test]
    #[serial_test::serial]
    fn find_root_resolves_relative_start_against_cwd() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();

        let found = find_root(Path::new("."));

        std::env::set_current_dir(original_dir).unwrap();
        assert_eq!(found.unwrap().canonicalize().unwrap(), dir.path().canonicalize().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_emits_warning() {
        testing_logger::setup();
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::create_dir_all(dir.path().join("a")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("a").join("loop")).unwrap();

        enumerate_files(dir.path()).unwrap();

        testing_logger::validate(|captured| {
            assert!(captured
                .iter()
                .any(|entry| entry.level == log::Level::Warn
                    && entry.body.contains("already-visited")));
        });
    }

    #[test]
    fn missing_root_errors() {
        let dir = tempdir().unwrap();
        let err = find_root(dir.path()).unwrap_err();
        assert!(matches!(err, Error::RootMissing { .. }));
    }

    #[test]
    fn orders_main_then_lexicographic_then_subdirs() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(dir.path().join("main.fmf"), "").unwrap();
        fs::write(dir.path().join("zeta.fmf"), "").unwrap();
        fs::write(dir.path().join("alpha.fmf"), "").unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("main.fmf"), "").unwrap();

        let files = enumerate_files(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.node_name.as_str()).collect();
        assert_eq!(names, vec!["/", "/alpha", "/zeta", "/sub"]);
    }

    #[test]
    fn dot_directories_are_excluded_unless_configured() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".hidden").join("main.fmf"), "").unwrap();
        let files = enumerate_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn explore_include_forces_dot_directory() {
        let dir = tempdir().unwrap();
        init_root(dir.path());
        fs::write(
            dir.path().join(".fmf").join("config"),
            "explore:\n  include:\n    - .hidden\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".hidden").join("main.fmf"), "").unwrap();
        let files = enumerate_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].node_name, "/.hidden");
    }
}
