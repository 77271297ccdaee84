use owo_colors::OwoColorize;
use setctx_core::context::ContextVar;

/// The one human-facing subcommand: shows what the current shell actually
/// has exported. Not meant to be eval'd.
pub fn run() -> anyhow::Result<()> {
    println!("{}", "SetContext Environment Variables:".yellow().bold());
    for var in ContextVar::ALL {
        let value = std::env::var(var.var_name()).unwrap_or_else(|_| "(unset)".to_string());
        println!("  {}: {}", var.var_name().red(), value);
    }
    Ok(())
}
