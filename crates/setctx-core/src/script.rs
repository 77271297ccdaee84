//! Shell-statement emitter.
//!
//! Everything setctx "does" to the caller's shell happens here: the process
//! cannot mutate its parent's environment or working directory, so each
//! method writes literal statements for the caller to `eval`. Stdout is the
//! script; human-facing diagnostics must go elsewhere.

use crate::context::{Color, ContextVar};
use crate::error::Result;
use crate::workspace;
use std::io::Write;
use std::path::Path;

pub struct ShellScript<W> {
    out: W,
}

impl<W: Write> ShellScript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one raw shell statement.
    pub fn line(&mut self, stmt: &str) -> Result<()> {
        writeln!(self.out, "{stmt}")?;
        Ok(())
    }

    /// Blank-line echo, used as a separator between blocks.
    pub fn blank(&mut self) -> Result<()> {
        self.line("echo;")
    }

    /// Colored progress message, rendered by the evaluating shell. Each
    /// indent level prefixes four dashes, matching the prompt depth of the
    /// segment being set.
    pub fn status(&mut self, msg: &str, color: Color, indent: usize) -> Result<()> {
        let dashes = "----".repeat(indent);
        let code = color.code();
        self.line(&format!("echo -e \"\\033[1;{code}{dashes}{msg}\\033[0m\";"))?;
        self.blank()
    }

    /// Informational echo plus the `export` statement itself.
    pub fn export_var(&mut self, var: ContextVar, value: &str) -> Result<()> {
        let name = var.var_name();
        self.line(&format!("echo \tExporting {value} to {name} | sed 's/^/  /';"))?;
        self.line(&format!("export {name}={value};"))
    }

    /// Blank out PROJECT, SERVICE, and VERSION so a switch from a deeper
    /// namespace never leaves stale segments behind. ACTIVECONTEXT is left
    /// alone; it is overwritten at the end of every switch.
    pub fn clear_context_vars(&mut self) -> Result<()> {
        self.line("echo Clearing context environment variables...;")?;
        for var in ContextVar::CLEARED {
            self.export_var(var, "")?;
        }
        self.blank()
    }

    /// Single `PS1=` assignment with a zsh-colored segment per present
    /// context level, in project:service:version order.
    pub fn prompt(&mut self, project: bool, service: bool, version: bool) -> Result<()> {
        let mut ps1 = String::from("PS1=");
        if project {
            ps1.push_str("'%F{65}'${PROJECT}");
        }
        if service {
            ps1.push_str("'%F{default}:%F{46}'${SERVICE}");
        }
        if version {
            ps1.push_str("'%F{default}:%F{38}'${VERSION}");
        }
        ps1.push_str("'%F{default} >> ';");
        self.line(&ps1)
    }

    /// Create `path` if missing (parents included) and emit the `cd`.
    /// Idempotent: an existing directory only gets the `cd`.
    pub fn change_dir(&mut self, path: &Path) -> Result<()> {
        self.status(
            &format!("Setting current working directory to: {}", path.display()),
            Color::Purple,
            2,
        )?;
        workspace::ensure_dir(path)?;
        self.line(&format!("cd {};", path.display()))
    }

    pub fn create_conda_env(&mut self, env_name: &str) -> Result<()> {
        self.line(&format!("conda create -y -q --name {env_name} python=3.8;"))
    }

    pub fn activate_conda_env(&mut self, env_name: &str) -> Result<()> {
        self.status(&format!("Setting conda env: {env_name}"), Color::Blue, 3)?;
        self.line(&format!("conda activate {env_name};"))
    }

    pub fn create_git_repo(&mut self) -> Result<()> {
        self.line("git init && hub create;")
    }

    pub fn set_gcloud_project(&mut self, project_name: &str) -> Result<()> {
        self.line(&format!("gcloud config set project {project_name};"))
    }

    /// Project creation also switches to the new project and provisions an
    /// App Engine app in the fixed region.
    pub fn create_gcloud_project(&mut self, project_name: &str) -> Result<()> {
        self.line(&format!(
            "gcloud components update --quiet && gcloud projects create {project_name};"
        ))?;
        self.set_gcloud_project(project_name)?;
        self.line("gcloud app create --region=us-central;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut ShellScript<Vec<u8>>)) -> String {
        let mut script = ShellScript::new(Vec::new());
        f(&mut script);
        String::from_utf8(script.into_inner()).unwrap()
    }

    #[test]
    fn export_emits_echo_then_export() {
        let out = render(|s| s.export_var(ContextVar::Project, "demo").unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("echo \tExporting demo to PROJECT"));
        assert_eq!(lines[1], "export PROJECT=demo;");
    }

    #[test]
    fn clear_blanks_three_vars_but_not_activecontext() {
        let out = render(|s| s.clear_context_vars().unwrap());
        assert!(out.contains("export PROJECT=;"));
        assert!(out.contains("export SERVICE=;"));
        assert!(out.contains("export VERSION=;"));
        assert!(!out.contains("ACTIVECONTEXT"));
    }

    #[test]
    fn prompt_project_only() {
        let out = render(|s| s.prompt(true, false, false).unwrap());
        assert!(out.starts_with("PS1="));
        assert!(out.contains("${PROJECT}"));
        assert!(!out.contains("${SERVICE}"));
        assert!(!out.contains("${VERSION}"));
        assert!(out.trim_end().ends_with("'%F{default} >> ';"));
    }

    #[test]
    fn prompt_full_triple_keeps_fixed_order() {
        let out = render(|s| s.prompt(true, true, true).unwrap());
        let project = out.find("${PROJECT}").unwrap();
        let service = out.find("${SERVICE}").unwrap();
        let version = out.find("${VERSION}").unwrap();
        assert!(project < service && service < version);
    }

    #[test]
    fn prompt_is_single_line() {
        let out = render(|s| s.prompt(true, true, false).unwrap());
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn change_dir_creates_and_emits_cd() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("proj/svc");
        let out = render(|s| s.change_dir(&target).unwrap());
        assert!(target.is_dir());
        assert!(out.contains(&format!("cd {};", target.display())));
    }

    #[test]
    fn change_dir_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("proj");
        render(|s| s.change_dir(&target).unwrap());
        let out = render(|s| s.change_dir(&target).unwrap());
        assert!(out.contains(&format!("cd {};", target.display())));
    }

    #[test]
    fn status_renders_ansi_and_indent() {
        let out = render(|s| s.status("hello", Color::Green, 2).unwrap());
        assert!(out.starts_with("echo -e \"\\033[1;32m--------hello\\033[0m\";"));
    }

    #[test]
    fn gcloud_create_includes_set_and_app_create() {
        let out = render(|s| s.create_gcloud_project("demo").unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "gcloud components update --quiet && gcloud projects create demo;",
                "gcloud config set project demo;",
                "gcloud app create --region=us-central;",
            ]
        );
    }
}
