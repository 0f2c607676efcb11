//! Run directory enumeration.
//!
//! The batch simulation writes its output under a single root:
//!
//! ```text
//! results/                         # Run root (the CLI argument)
//! ├── baseline-2026-08-12/         # One directory per run
//! │   ├── test_config              # Config the run was launched with
//! │   ├── gdp.png                  # Chart images
//! │   └── lending.png
//! └── stress-2026-08-13/
//!     ├── test_config
//!     └── gdp.png
//! ```
//!
//! This module is the only place that touches that layout. Nothing is
//! cached: callers list fresh on every request so the view always reflects
//! the directory as it is now. Listings are sorted by path, giving a stable
//! rotation order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed name of the config file the batch process drops in each run.
pub const CONFIG_FILENAME: &str = "test_config";

/// Chart images are PNGs emitted by the batch plotting stage.
const CHART_EXTENSION: &str = "png";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list run root {path}: {source}")]
    RootUnreadable { path: PathBuf, source: io::Error },
    #[error("cannot list run directory {path}: {source}")]
    RunUnreadable { path: PathBuf, source: io::Error },
    #[error("cannot read {CONFIG_FILENAME} in {path}: {source}")]
    Config { path: PathBuf, source: io::Error },
}

/// Lists the immediate child directories of `root`, sorted by path.
///
/// Non-directory entries (stray files in the root) are skipped. An empty
/// root yields an empty list, not an error.
pub fn list_run_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    dirs.sort();
    Ok(dirs)
}

/// Lists the chart images in a run directory, sorted by path.
///
/// Zero matches is a valid result — a run that produced no charts still
/// gets a page showing its config.
pub fn list_charts(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::RunUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut charts: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_chart(p))
        .collect();

    charts.sort();
    Ok(charts)
}

/// Reads the run's `test_config` as text.
pub fn read_run_config(dir: &Path) -> Result<String, ScanError> {
    let path = dir.join(CONFIG_FILENAME);
    fs::read_to_string(&path).map_err(|source| ScanError::Config {
        path: dir.to_path_buf(),
        source,
    })
}

fn is_chart(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(CHART_EXTENSION))
        .unwrap_or(false)
}
