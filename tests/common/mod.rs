#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use majortom::MajortomContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory with its own store location
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub home: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnv {
    /// Create an environment without a store file
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        // Resolve symlinks so paths match what getcwd reports in the child
        let home = temp_dir.path().canonicalize()?;
        let config_path = home.join(".config/majortom/majortom_config.json");

        Ok(Self {
            temp_dir,
            home,
            config_path,
        })
    }

    /// Create an environment with an initialized, empty store
    pub fn initialized() -> Result<Self> {
        let env = Self::new()?;
        majortom::store::ShortcutStore::initialize(&env.config_path)?;
        Ok(env)
    }

    /// Create a directory under the home directory
    pub fn mkdir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.home.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// The binary, run with this environment's HOME and no colors
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("majortom").expect("binary should be built");
        cmd.env("HOME", &self.home)
            .env_remove("MAJORTOM_CONFIG")
            .env_remove("MAJORTOM_LOG")
            .env("MAJORTOM_COLOR", "never")
            .current_dir(&self.home);
        cmd
    }

    /// The binary, run from `dir`
    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.current_dir(dir);
        cmd
    }

    /// In-process context rooted at this environment
    pub fn context(&self, working_dir: &Path) -> MajortomContext {
        MajortomContext::new_explicit(
            self.home.clone(),
            self.config_path.clone(),
            working_dir.to_path_buf(),
        )
    }

    /// Raw store file contents
    pub fn store_text(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.config_path)?)
    }
}
