pub mod conda;
pub mod context;
pub mod dir;
pub mod env;
pub mod gcloud;
pub mod git;
pub mod prompt;
pub mod vars;

use setctx_core::script::ShellScript;
use std::io::Write;

/// Build the script into a buffer and flush it to stdout only on success, so
/// a failure partway through never hands the caller a half-finished script
/// to eval.
pub fn emit(
    build: impl FnOnce(&mut ShellScript<Vec<u8>>) -> setctx_core::Result<()>,
) -> anyhow::Result<()> {
    let mut script = ShellScript::new(Vec::new());
    build(&mut script)?;
    std::io::stdout().write_all(&script.into_inner())?;
    Ok(())
}
