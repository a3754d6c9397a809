//! Configuration-directory resolution.
//!
//! All abacus state lives under a single per-user configuration directory,
//! `~/.config/abacus` by default. Every entry point resolves it through
//! [`default_config_dir`] and creates it with [`ensure_dir`] before touching
//! any files. Tests bypass this entirely by injecting a temporary directory
//! into the trackers.

use std::path::{Path, PathBuf};

use crate::error::{AbacusError, Result};

/// Directory name under `~/.config` that holds all persisted state.
pub const CONFIG_DIR_NAME: &str = "abacus";

/// Resolve the default configuration directory, `~/.config/abacus`.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(AbacusError::MissingHomeDir)?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Create `dir` and any missing parents. Idempotent.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| AbacusError::DirectoryCreation {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        // SAFETY: We are in a test context and this is the only test modifying HOME
        unsafe { std::env::set_var("HOME", "/tmp/test-home") };
        let dir = default_config_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/test-home/.config/abacus"));
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_dir(&nested).unwrap();
    }
}
