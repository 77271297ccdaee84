use crate::error::SetctxError;
use std::fmt;
use std::str::FromStr;

/// The environment variables that make up a working context. Closed set:
/// anything else is rejected at parse time instead of being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextVar {
    Project,
    Service,
    Version,
    ActiveContext,
}

impl ContextVar {
    /// Shell variable name, as exported to the caller's environment.
    pub fn var_name(&self) -> &'static str {
        match self {
            ContextVar::Project => "PROJECT",
            ContextVar::Service => "SERVICE",
            ContextVar::Version => "VERSION",
            ContextVar::ActiveContext => "ACTIVECONTEXT",
        }
    }

    /// All context variables, in export order.
    pub const ALL: [ContextVar; 4] = [
        ContextVar::Project,
        ContextVar::Service,
        ContextVar::Version,
        ContextVar::ActiveContext,
    ];

    /// The variables cleared when switching context. ACTIVECONTEXT is not
    /// cleared: it is always overwritten at the end of a switch.
    pub const CLEARED: [ContextVar; 3] = [
        ContextVar::Project,
        ContextVar::Service,
        ContextVar::Version,
    ];
}

impl fmt::Display for ContextVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.var_name())
    }
}

impl FromStr for ContextVar {
    type Err = SetctxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PROJECT" => Ok(ContextVar::Project),
            "SERVICE" => Ok(ContextVar::Service),
            "VERSION" => Ok(ContextVar::Version),
            "ACTIVECONTEXT" => Ok(ContextVar::ActiveContext),
            _ => Err(SetctxError::UnknownContextVariable(s.to_string())),
        }
    }
}

/// ANSI color codes for the bash-evaluable status echoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    pub fn code(&self) -> &'static str {
        match self {
            Color::Red => "31m",
            Color::Green => "32m",
            Color::Yellow => "33m",
            Color::Blue => "34m",
            Color::Purple => "35m",
            Color::Cyan => "36m",
            Color::White => "0m",
        }
    }
}
