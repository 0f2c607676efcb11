//! Startup configuration.
//!
//! Two values configure the whole process: the run root (the directory the
//! batch simulation writes its per-run output directories into) and the
//! listening port. Both come from the command line; there is no config file.
//!
//! Validation is eager: [`ServeConfig::validate`] probes the run root before
//! any socket is bound, so a bad argument fails the process immediately
//! instead of serving broken pages.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("run root {0} does not exist")]
    Missing(PathBuf),
    #[error("run root {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("run root {path} is not readable: {source}")]
    Unreadable { path: PathBuf, source: io::Error },
}

/// Process configuration, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Directory containing one subdirectory per simulation run.
    pub root: PathBuf,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServeConfig {
    /// Checks that the run root exists, is a directory, and is listable.
    ///
    /// Called before binding the port so configuration errors never reach
    /// request handling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::Missing(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::NotADirectory(self.root.clone()));
        }
        // An existing directory can still be unlistable (permissions).
        fs::read_dir(&self.root).map_err(|source| ConfigError::Unreadable {
            path: self.root.clone(),
            source,
        })?;
        Ok(())
    }
}
