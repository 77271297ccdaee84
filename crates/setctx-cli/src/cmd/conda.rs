use setctx_core::conda::{self, CondaCli, Confirm};
use setctx_core::{Result, SetctxError};

/// Interactive y/n prompt on the controlling terminal. The deletion sweep
/// writes its script to stdout, so the question goes through dialoguer's
/// stderr-backed terminal handling rather than polluting the eval stream.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, subject: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(format!("Delete {subject}?"))
            .default(false)
            .interact()
            .map_err(|e| match e {
                dialoguer::Error::IO(err) => SetctxError::Io(err),
            })
    }
}

pub fn create(env_name: &str) -> anyhow::Result<()> {
    super::emit(|script| script.create_conda_env(env_name))
}

pub fn set(env_name: &str) -> anyhow::Result<()> {
    super::emit(|script| script.activate_conda_env(env_name))
}

pub fn delete_all() -> anyhow::Result<()> {
    let envs = CondaCli::new();
    super::emit(|script| conda::delete_conda_envs(&envs, &mut TerminalConfirm, script))
}
