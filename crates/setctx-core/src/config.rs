use crate::error::{Result, SetctxError};
use std::path::{Path, PathBuf};

/// Directory under $HOME where contexts live when no root is given.
pub const DEFAULT_ROOT_DIR: &str = "git";

/// Resolved invocation settings. Built once by the CLI and passed down;
/// nothing in core reads process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root under which `project/service/version` directories are created.
    pub root: PathBuf,
    /// Emit an extra echo naming the parsed namespace.
    pub debug: bool,
}

impl Config {
    /// Resolve the context root.
    ///
    /// Priority:
    /// 1. `--root` flag / `SETCTX_ROOT` env var (passed in as `explicit`)
    /// 2. `$HOME/git`
    pub fn resolve(explicit: Option<&Path>, debug: bool) -> Result<Self> {
        let root = match explicit {
            Some(p) => p.to_path_buf(),
            None => home::home_dir()
                .ok_or(SetctxError::HomeNotFound)?
                .join(DEFAULT_ROOT_DIR),
        };
        Ok(Self { root, debug })
    }
}
