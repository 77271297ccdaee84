pub mod conda;
pub mod config;
pub mod context;
pub mod error;
pub mod gcloud;
pub mod namespace;
pub mod script;
pub mod shell;
pub mod workflow;
pub mod workspace;

pub use error::{Result, SetctxError};
