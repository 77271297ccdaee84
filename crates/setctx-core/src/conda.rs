//! conda environment queries and confirm-gated bulk deletion.

use crate::error::{Result, SetctxError};
use crate::script::ShellScript;
use crate::shell;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CondaEnvList {
    envs: Vec<String>,
}

/// Seam over the conda environment list.
pub trait EnvManager {
    /// Environment names (the final path component of each env directory).
    fn list_envs(&self) -> Result<Vec<String>>;
}

/// Answers "delete this env?" questions. The CLI wires this to an
/// interactive prompt; tests inject fixed policies.
pub trait Confirm {
    fn confirm(&mut self, subject: &str) -> Result<bool>;
}

/// Production implementation backed by `conda env list --json`.
#[derive(Default)]
pub struct CondaCli;

impl CondaCli {
    pub fn new() -> Self {
        Self
    }
}

impl EnvManager for CondaCli {
    fn list_envs(&self) -> Result<Vec<String>> {
        let raw = shell::capture("conda", &["env", "list", "--json"])?;
        let parsed: CondaEnvList =
            serde_json::from_str(&raw).map_err(|e| SetctxError::CommandFailed {
                command: "conda env list --json".to_string(),
                detail: format!("malformed JSON output: {e}"),
            })?;

        // conda reports absolute env directories; the name is the basename.
        Ok(parsed
            .envs
            .iter()
            .filter_map(|p| Path::new(p).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }
}

/// Ask per environment, emitting a remove statement only on an affirmative
/// answer. Declined envs are skipped and the sweep continues.
pub fn delete_conda_envs<W: Write>(
    envs: &dyn EnvManager,
    confirm: &mut dyn Confirm,
    script: &mut ShellScript<W>,
) -> Result<()> {
    for env in envs.list_envs()? {
        if confirm.confirm(&env)? {
            script.line(&format!("echo Confirmed: deleting {env};"))?;
            script.line(&format!("conda env remove -n {env};"))?;
        }
    }
    Ok(())
}
