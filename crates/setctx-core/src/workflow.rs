//! The two top-level context switches.
//!
//! `set_context` provisions against gcloud; `set_module` is the same shape
//! for project-like units with no cloud footprint. Both parse and validate
//! the namespace before emitting anything, so a bad namespace never leaves a
//! half-evaluated script in the caller's shell.

use crate::config::Config;
use crate::context::{Color, ContextVar};
use crate::error::Result;
use crate::gcloud::CloudProjects;
use crate::namespace::{self, Namespace};
use crate::script::ShellScript;
use crate::workspace;
use std::io::Write;

/// Switch the working context to `namespace`, provisioning the gcloud
/// project, conda environment, and git repo for a project seen for the
/// first time.
pub fn set_context<W: Write>(
    cfg: &Config,
    cloud: &dyn CloudProjects,
    script: &mut ShellScript<W>,
    raw_namespace: &str,
) -> Result<()> {
    let ns = Namespace::parse(raw_namespace)?;

    script.status("Setting context", Color::Green, 0)?;
    if cfg.debug {
        script.line(&format!(
            "echo Setting Context to namespace {}:{}:{}...;",
            ns.project, ns.service, ns.version
        ))?;
    }

    if !ns.project.is_empty() {
        script.clear_context_vars()?;
        script.export_var(ContextVar::Project, &ns.project)?;
        script.change_dir(&workspace::context_dir(cfg, &ns.project, "", ""))?;

        // Name validity is advisory: a name gcloud would reject just skips
        // provisioning, it does not fail the switch.
        if namespace::is_valid_gcloud_name(&ns.project) {
            if cloud.project_exists(&ns.project)? {
                script.status(&format!("Project {} exists", ns.project), Color::Yellow, 1)?;
                script.set_gcloud_project(&ns.project)?;
                script.activate_conda_env(&ns.project)?;
            } else {
                script.status(
                    &format!("Creating new project: {}", ns.project),
                    Color::Green,
                    1,
                )?;
                script.create_gcloud_project(&ns.project)?;
                script.create_conda_env(&ns.project)?;
                script.create_git_repo()?;
            }
        }

        script.prompt(true, false, false)?;

        if !ns.service.is_empty() {
            script.status(&format!("Setting service to: {}", ns.service), Color::Green, 2)?;
            script.export_var(ContextVar::Service, &ns.service)?;
            script.change_dir(&workspace::context_dir(cfg, &ns.project, &ns.service, ""))?;
            script.prompt(true, true, false)?;
        }

        if !ns.version.is_empty() {
            script.status(&format!("Setting version to: {}", ns.version), Color::Green, 3)?;
            script.export_var(ContextVar::Version, &ns.version)?;
            script.change_dir(&workspace::context_dir(
                cfg,
                &ns.project,
                &ns.service,
                &ns.version,
            ))?;
            script.prompt(true, true, true)?;
        }
    }

    script.status(
        &format!("Setting ActiveContext to : {raw_namespace}"),
        Color::Cyan,
        0,
    )?;
    script.export_var(ContextVar::ActiveContext, raw_namespace)?;
    script.blank()
}

/// Same switch for a module or library: no gcloud involvement, existence is
/// judged against the local filesystem, and the conda env tracks the
/// service rather than the project.
pub fn set_module<W: Write>(
    cfg: &Config,
    script: &mut ShellScript<W>,
    raw_namespace: &str,
) -> Result<()> {
    let ns = Namespace::parse(raw_namespace)?;

    script.status("Setting module", Color::Green, 1)?;
    if cfg.debug {
        script.line(&format!(
            "echo Setting Context to namespace {}:{}:{}...;",
            ns.project, ns.service, ns.version
        ))?;
    }

    if !ns.project.is_empty() {
        script.clear_context_vars()?;
        script.export_var(ContextVar::Project, &ns.project)?;

        // Capture before change_dir, which creates the directory.
        let existed = workspace::project_exists(cfg, &ns.project);
        script.change_dir(&workspace::context_dir(cfg, &ns.project, "", ""))?;
        if existed {
            script.status(&format!("Library: {} exists", ns.project), Color::Yellow, 2)?;
        } else {
            script.status(&format!("Creating library: {}", ns.project), Color::Green, 2)?;
            script.create_git_repo()?;
        }

        script.prompt(true, false, false)?;

        if !ns.service.is_empty() {
            script.export_var(ContextVar::Service, &ns.service)?;
            if workspace::service_dir_exists(cfg, &ns.project, &ns.service) {
                script.status(&format!("Module: {} exists", ns.service), Color::Yellow, 2)?;
                script.activate_conda_env(&ns.service)?;
            } else {
                script.status(&format!("Creating module: {}", ns.service), Color::Green, 2)?;
                script.create_conda_env(&ns.service)?;
            }
            script.change_dir(&workspace::context_dir(cfg, &ns.project, &ns.service, ""))?;
            script.prompt(true, true, false)?;
        }

        if !ns.version.is_empty() {
            script.export_var(ContextVar::Version, &ns.version)?;
            script.change_dir(&workspace::context_dir(
                cfg,
                &ns.project,
                &ns.service,
                &ns.version,
            ))?;
            script.prompt(true, true, true)?;
        }
    }

    script.status(
        &format!("Setting ActiveContext to : {raw_namespace}"),
        Color::Cyan,
        0,
    )?;
    script.export_var(ContextVar::ActiveContext, raw_namespace)?;
    script.blank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetctxError;
    use crate::gcloud::GcloudProject;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct StubCloud {
        existing: Vec<String>,
        queries: Cell<usize>,
    }

    impl StubCloud {
        fn with(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(|s| s.to_string()).collect(),
                queries: Cell::new(0),
            }
        }
    }

    impl CloudProjects for StubCloud {
        fn list_projects(&self) -> Result<Vec<GcloudProject>> {
            self.queries.set(self.queries.get() + 1);
            Ok(self
                .existing
                .iter()
                .map(|name| GcloudProject {
                    name: name.clone(),
                    project_id: format!("{name}-0000"),
                })
                .collect())
        }
    }

    fn cfg(dir: &TempDir) -> Config {
        Config {
            root: dir.path().to_path_buf(),
            debug: false,
        }
    }

    fn run_context(cfg: &Config, cloud: &StubCloud, namespace: &str) -> String {
        let mut script = ShellScript::new(Vec::new());
        set_context(cfg, cloud, &mut script, namespace).unwrap();
        String::from_utf8(script.into_inner()).unwrap()
    }

    fn run_module(cfg: &Config, namespace: &str) -> String {
        let mut script = ShellScript::new(Vec::new());
        set_module(cfg, &mut script, namespace).unwrap();
        String::from_utf8(script.into_inner()).unwrap()
    }

    // -----------------------------------------------------------------------
    // set_context
    // -----------------------------------------------------------------------

    #[test]
    fn new_project_provisions_in_order() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&[]);
        let out = run_context(&cfg(&dir), &cloud, "demo");

        let order = [
            "echo Clearing context environment variables...;",
            "export PROJECT=demo;",
            "cd ",
            "gcloud components update --quiet && gcloud projects create demo;",
            "conda create -y -q --name demo python=3.8;",
            "git init && hub create;",
            "PS1=",
            "export ACTIVECONTEXT=demo;",
        ];
        let mut last = 0;
        for needle in order {
            let at = out[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            last += at;
        }
        assert!(dir.path().join("demo").is_dir());
    }

    #[test]
    fn existing_project_activates_instead_of_creating() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&["demo"]);
        let out = run_context(&cfg(&dir), &cloud, "demo");

        assert!(out.contains("gcloud config set project demo;"));
        assert!(out.contains("conda activate demo;"));
        assert!(!out.contains("gcloud projects create"));
        assert!(!out.contains("git init"));
    }

    #[test]
    fn invalid_gcloud_name_skips_provisioning_but_still_switches() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&[]);
        let out = run_context(&cfg(&dir), &cloud, "My_Proj");

        assert!(out.contains("export PROJECT=My_Proj;"));
        assert!(out.contains("cd "));
        assert!(out.contains("PS1="));
        assert!(out.contains("export ACTIVECONTEXT=My_Proj;"));
        assert!(!out.contains("gcloud"));
        assert!(!out.contains("conda"));
        assert_eq!(cloud.queries.get(), 0);
    }

    #[test]
    fn service_and_version_extend_the_switch() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&["demo"]);
        let out = run_context(&cfg(&dir), &cloud, "demo:api:v001");

        assert!(out.contains("export SERVICE=api;"));
        assert!(out.contains("export VERSION=v001;"));
        assert!(dir.path().join("demo/api/v001").is_dir());
        // Prompt deepens with each segment.
        assert_eq!(out.matches("PS1=").count(), 3);
        assert!(out.contains("export ACTIVECONTEXT=demo:api:v001;"));
    }

    #[test]
    fn bad_version_fails_before_any_output() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&[]);
        let mut script = ShellScript::new(Vec::new());
        let err = set_context(&cfg(&dir), &cloud, &mut script, "demo:api:latest").unwrap_err();
        assert!(matches!(err, SetctxError::InvalidVersionFormat(_)));
        assert!(script.into_inner().is_empty());
    }

    #[test]
    fn activecontext_is_always_exported_verbatim() {
        let dir = TempDir::new().unwrap();
        let cloud = StubCloud::with(&[]);
        let out = run_context(&cfg(&dir), &cloud, "");
        // Empty project: no exports besides the final ACTIVECONTEXT.
        assert!(!out.contains("export PROJECT"));
        assert!(out.contains("export ACTIVECONTEXT=;"));
    }

    // -----------------------------------------------------------------------
    // set_module
    // -----------------------------------------------------------------------

    #[test]
    fn new_library_gets_a_git_repo_but_no_gcloud() {
        let dir = TempDir::new().unwrap();
        let out = run_module(&cfg(&dir), "lib");

        assert!(out.contains("git init && hub create;"));
        assert!(!out.contains("gcloud"));
        assert!(dir.path().join("lib").is_dir());
    }

    #[test]
    fn existing_library_is_not_reprovisioned() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lib")).unwrap();
        let out = run_module(&cfg(&dir), "lib");
        assert!(!out.contains("git init"));
    }

    #[test]
    fn missing_service_dir_creates_env() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lib")).unwrap();
        let out = run_module(&cfg(&dir), "lib:modA");

        assert!(out.contains("conda create -y -q --name modA python=3.8;"));
        assert!(!out.contains("conda activate"));
    }

    #[test]
    fn existing_service_dir_activates_env() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lib/modA")).unwrap();
        let out = run_module(&cfg(&dir), "lib:modA");

        assert!(out.contains("conda activate modA;"));
        assert!(!out.contains("conda create"));
    }

    #[test]
    fn debug_flag_echoes_the_parsed_triple() {
        let dir = TempDir::new().unwrap();
        let mut cfg = cfg(&dir);
        cfg.debug = true;
        let out = run_module(&cfg, "lib:modA");
        assert!(out.contains("echo Setting Context to namespace lib:modA:...;"));
    }
}
