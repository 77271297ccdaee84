//! gcloud project queries and bulk deletion.

use crate::error::{Result, SetctxError};
use crate::script::ShellScript;
use crate::shell;
use serde::Deserialize;
use std::cell::RefCell;
use std::io::Write;

#[derive(Debug, Clone, Deserialize)]
pub struct GcloudProject {
    pub name: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
}

/// Seam over the gcloud project list, so orchestration can be exercised
/// without a gcloud binary on PATH.
pub trait CloudProjects {
    fn list_projects(&self) -> Result<Vec<GcloudProject>>;

    fn project_exists(&self, name: &str) -> Result<bool> {
        Ok(self.list_projects()?.iter().any(|p| p.name == name))
    }
}

/// Production implementation backed by `gcloud projects list --format json`.
/// The list is fetched at most once per process: the query is slow and the
/// project set is assumed stable within a single invocation.
#[derive(Default)]
pub struct GcloudCli {
    cache: RefCell<Option<Vec<GcloudProject>>>,
}

impl GcloudCli {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CloudProjects for GcloudCli {
    fn list_projects(&self) -> Result<Vec<GcloudProject>> {
        if let Some(list) = self.cache.borrow().as_ref() {
            return Ok(list.clone());
        }

        let raw = shell::capture("gcloud", &["projects", "list", "--format", "json"])?;
        let list: Vec<GcloudProject> =
            serde_json::from_str(&raw).map_err(|e| SetctxError::CommandFailed {
                command: "gcloud projects list --format json".to_string(),
                detail: format!("malformed JSON output: {e}"),
            })?;

        *self.cache.borrow_mut() = Some(list.clone());
        Ok(list)
    }
}

/// Emit a delete statement for every project gcloud reports. No
/// confirmation: the caller's shell runs the deletes, and gcloud itself
/// prompts unless `--quiet` is added by the user.
pub fn delete_gcloud_projects<W: Write>(
    cloud: &dyn CloudProjects,
    script: &mut ShellScript<W>,
) -> Result<()> {
    for project in cloud.list_projects()? {
        script.line(&format!("echo Deleting project: {};", project.project_id))?;
        script.line(&format!("gcloud projects delete {};", project.project_id))?;
    }
    Ok(())
}
