use setctx_core::config::Config;
use setctx_core::workspace;

pub fn run(
    cfg: &Config,
    project: Option<&str>,
    service: Option<&str>,
    version: Option<&str>,
) -> anyhow::Result<()> {
    let path = workspace::context_dir(
        cfg,
        project.unwrap_or(""),
        service.unwrap_or(""),
        version.unwrap_or(""),
    );
    super::emit(|script| script.change_dir(&path))
}
