mod cmd;

use clap::{Parser, Subcommand};
use setctx_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "setctx",
    about = "Switch working context — emits shell statements for the calling shell to eval",
    after_help = "All output is meant to be evaluated, e.g.: eval \"$(setctx setcontext demo:api:v001)\"",
    version
)]
struct Cli {
    /// Context root directory (default: ~/git)
    #[arg(long, global = true, env = "SETCTX_ROOT")]
    root: Option<PathBuf>,

    /// Echo the parsed namespace before switching
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch context, provisioning gcloud project, conda env, and git repo as needed
    #[command(name = "setcontext")]
    SetContext {
        /// project[:service[:version]]
        namespace: String,
    },

    /// Switch to a module or library context (no gcloud involvement)
    #[command(name = "setmodule")]
    SetModule {
        /// project[:service[:version]]
        namespace: String,
    },

    /// Emit a cd into the context directory, creating it if missing
    #[command(name = "change_directory_path")]
    ChangeDirectoryPath {
        #[arg(long = "project_name")]
        project_name: Option<String>,
        #[arg(long = "service_name")]
        service_name: Option<String>,
        #[arg(long = "version_name")]
        version_name: Option<String>,
    },

    /// Blank out PROJECT, SERVICE, and VERSION in the calling shell
    #[command(name = "clear_context_env_variables")]
    ClearContextEnvVariables,

    /// Emit a PS1 assignment for the given context depth
    #[command(name = "set_terminal_prompt")]
    SetTerminalPrompt {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        version: Option<String>,
    },

    /// Emit gcloud project creation (update, create, set, app create)
    #[command(name = "create_gcloud_project")]
    CreateGcloudProject {
        #[arg(long = "project_name")]
        project_name: String,
    },

    /// Emit a delete for every gcloud project on the account
    #[command(name = "delete_gcloud_projects")]
    DeleteGcloudProjects,

    /// Interactively sweep conda environments, emitting removes for confirmed ones
    #[command(name = "delete_conda_envs")]
    DeleteCondaEnvs,

    /// Emit a gcloud active-project switch
    #[command(name = "set_gcloud_project")]
    SetGcloudProject {
        #[arg(long = "project_name")]
        project_name: String,
    },

    /// Emit a conda environment creation
    #[command(name = "create_conda_env")]
    CreateCondaEnv {
        #[arg(long = "env_name")]
        env_name: String,
    },

    /// Emit a conda environment activation
    #[command(name = "set_conda_env")]
    SetCondaEnv {
        #[arg(long = "env_name")]
        env_name: String,
    },

    /// Emit git init plus hub remote creation
    #[command(name = "create_git_repo")]
    CreateGitRepo,

    /// Print the context variables of this shell (human output, not for eval)
    #[command(name = "print_project_variables")]
    PrintProjectVariables,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = Config::resolve(cli.root.as_deref(), cli.debug).map_err(anyhow::Error::from)
        .and_then(|cfg| match cli.command {
            Commands::SetContext { namespace } => cmd::context::set_context(&cfg, &namespace),
            Commands::SetModule { namespace } => cmd::context::set_module(&cfg, &namespace),
            Commands::ChangeDirectoryPath {
                project_name,
                service_name,
                version_name,
            } => cmd::dir::run(
                &cfg,
                project_name.as_deref(),
                service_name.as_deref(),
                version_name.as_deref(),
            ),
            Commands::ClearContextEnvVariables => cmd::env::clear(),
            Commands::SetTerminalPrompt {
                project,
                service,
                version,
            } => cmd::prompt::run(project.as_deref(), service.as_deref(), version.as_deref()),
            Commands::CreateGcloudProject { project_name } => cmd::gcloud::create(&project_name),
            Commands::DeleteGcloudProjects => cmd::gcloud::delete_all(),
            Commands::DeleteCondaEnvs => cmd::conda::delete_all(),
            Commands::SetGcloudProject { project_name } => cmd::gcloud::set(&project_name),
            Commands::CreateCondaEnv { env_name } => cmd::conda::create(&env_name),
            Commands::SetCondaEnv { env_name } => cmd::conda::set(&env_name),
            Commands::CreateGitRepo => cmd::git::create(),
            Commands::PrintProjectVariables => cmd::vars::run(),
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
