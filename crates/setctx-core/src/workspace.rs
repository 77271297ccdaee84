//! Context directory layout under the configured root.

use crate::config::Config;
use crate::error::{Result, SetctxError};
use std::path::{Path, PathBuf};

/// Join the root with whichever of project/service/version are present, in
/// that order. Empty segments are skipped.
pub fn context_dir(cfg: &Config, project: &str, service: &str, version: &str) -> PathBuf {
    let mut path = cfg.root.clone();
    for segment in [project, service, version] {
        if !segment.is_empty() {
            path.push(segment);
        }
    }
    path
}

/// mkdir-p. Creation failure is fatal: emitting a `cd` into a directory that
/// could not be created would leave the caller's shell somewhere unexpected.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| SetctxError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether a project or library directory already exists under the root.
pub fn project_exists(cfg: &Config, project: &str) -> bool {
    cfg.root.join(project).is_dir()
}

/// Whether the service directory exists under its project. Checked against
/// the resolved project path, not the process cwd: the emitted `cd` only
/// takes effect in the caller's shell.
pub fn service_dir_exists(cfg: &Config, project: &str, service: &str) -> bool {
    cfg.root.join(project).join(service).is_dir()
}
