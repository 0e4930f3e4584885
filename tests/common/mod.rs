//! Shared test fixtures for the CLI end-to-end test suite.
//!
//! Every test here drives the actual `fmf` binary against a throwaway
//! tree root in a temp directory, rather than calling into the library
//! directly — that's what the unit tests embedded in `src/` already do.

use assert_fs::prelude::*;
use std::path::Path;

pub mod prelude {
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TreeFixture;
}

/// A temp directory seeded as an `.fmf` tree root, with helpers for
/// dropping `*.fmf` files at arbitrary paths underneath it.
pub struct TreeFixture {
    temp_dir: assert_fs::TempDir,
}

impl TreeFixture {
    /// Creates a fresh `.fmf/version` tree root.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("failed to create temp directory");
        temp_dir
            .child(".fmf").child("version")
            .write_str("1\n")
            .expect("failed to write .fmf/version");
        Self { temp_dir }
    }

    /// An empty temp directory with no `.fmf` marker at all, for
    /// `RootMissing` tests.
    pub fn bare() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("failed to create temp directory"),
        }
    }

    /// Writes a `*.fmf` file at `relative_path` (e.g. `"main.fmf"` or
    /// `"c/main.fmf"`) with the given YAML content.
    pub fn with_fmf(self, relative_path: &str, content: &str) -> Self {
        self.temp_dir
            .child(relative_path)
            .write_str(content)
            .unwrap_or_else(|e| panic!("failed to write {relative_path}: {e}"));
        self
    }

    /// Writes `.fmf/config`.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".fmf").child("config")
            .write_str(content)
            .expect("failed to write .fmf/config");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A configured `Command` for the `fmf` binary, run with this
    /// fixture's directory as `--path`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("fmf").expect("fmf binary not built");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_fixture_writes_version_marker() {
        let fixture = TreeFixture::new();
        assert!(fixture.path().join(".fmf").join("version").exists());
    }

    #[test]
    fn bare_fixture_has_no_marker() {
        let fixture = TreeFixture::bare();
        assert!(!fixture.path().join(".fmf").exists());
    }

    #[test]
    fn with_fmf_writes_nested_files() {
        let fixture = TreeFixture::new().with_fmf("c/main.fmf", "tag: [a]\n");
        assert!(fixture.path().join("c").join("main.fmf").exists());
    }
}
