//! Candidate type.
//!
//! A proposed key/value pair that has not been checked against stored state.

use crate::core::types::VariableKey;

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Given on the command line.
    Inline,
    /// Read from an env file, 1-based line number.
    File { line: usize },
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Inline => write!(f, "inline"),
            Origin::File { line } => write!(f, "line {}", line),
        }
    }
}

/// A proposed variable edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    key: VariableKey,
    value: String,
    origin: Origin,
}

impl Candidate {
    pub fn new(key: impl Into<VariableKey>, value: impl Into<String>, origin: Origin) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            origin,
        }
    }

    /// Candidate supplied on the command line.
    pub fn inline(key: impl Into<VariableKey>, value: impl Into<String>) -> Self {
        Self::new(key, value, Origin::Inline)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}
