use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetctxError {
    #[error("invalid version '{0}': expected v followed by three digits (v000-v999)")]
    InvalidVersionFormat(String),

    #[error("invalid namespace '{0}': expected project[:service[:version]]")]
    InvalidNamespaceFormat(String),

    #[error("unknown context variable '{0}': expected PROJECT, SERVICE, VERSION, or ACTIVECONTEXT")]
    UnknownContextVariable(String),

    #[error("failed to create directory {}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' failed: {detail}")]
    CommandFailed { command: String, detail: String },

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SetctxError>;
