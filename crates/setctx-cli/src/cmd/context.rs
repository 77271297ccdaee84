use setctx_core::config::Config;
use setctx_core::gcloud::GcloudCli;
use setctx_core::workflow;

pub fn set_context(cfg: &Config, namespace: &str) -> anyhow::Result<()> {
    let cloud = GcloudCli::new();
    super::emit(|script| workflow::set_context(cfg, &cloud, script, namespace))
}

pub fn set_module(cfg: &Config, namespace: &str) -> anyhow::Result<()> {
    super::emit(|script| workflow::set_module(cfg, script, namespace))
}
