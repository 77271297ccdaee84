use crate::error::{Result, SetctxError};
use regex::Regex;
use std::sync::OnceLock;

/// A parsed `project:service:version` triple. Empty string means the segment
/// was absent; `service` can only be present when `project` is, and `version`
/// only when both are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub project: String,
    pub service: String,
    pub version: String,
}

impl Namespace {
    /// Split a namespace string into its segments.
    ///
    /// `proj` / `proj:svc` / `proj:svc:v001` are the accepted shapes. A
    /// three-segment namespace validates its version; more than three
    /// segments is an error rather than the silent empty triple the looser
    /// split would produce.
    pub fn parse(namespace: &str) -> Result<Self> {
        let segments: Vec<&str> = namespace.split(':').collect();
        let (project, service, version) = match segments.as_slice() {
            [project] => (*project, "", ""),
            [project, service] => (*project, *service, ""),
            [project, service, version] => {
                validate_version(version)?;
                (*project, *service, *version)
            }
            _ => return Err(SetctxError::InvalidNamespaceFormat(namespace.to_string())),
        };
        Ok(Self {
            project: project.to_string(),
            service: service.to_string(),
            version: version.to_string(),
        })
    }
}

static VERSION_RE: OnceLock<Regex> = OnceLock::new();

fn version_re() -> &'static Regex {
    VERSION_RE.get_or_init(|| Regex::new(r"^v\d{3}$").unwrap())
}

/// Require the `v<000-999>` version shape.
pub fn validate_version(version: &str) -> Result<()> {
    if !version_re().is_match(version) {
        return Err(SetctxError::InvalidVersionFormat(version.to_string()));
    }
    Ok(())
}

static GCLOUD_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn gcloud_name_re() -> &'static Regex {
    GCLOUD_NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9/-]*$").unwrap())
}

/// Advisory check that a name is acceptable to gcloud: lowercase letters,
/// digits, `/`, and `-` only. Callers skip cloud provisioning when this is
/// false; they do not fail the whole command.
pub fn is_valid_gcloud_name(name: &str) -> bool {
    gcloud_name_re().is_match(name)
}
