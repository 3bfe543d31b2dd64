//! Rejection type.
//!
//! A candidate that was skipped, with the reason. Rejections are reported to
//! the user but never abort an operation.

use thiserror::Error;

use super::Origin;

/// Why a candidate was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("empty key, skipping variable with value '{value}'")]
    EmptyKey { value: String },

    #[error("empty value, skipping variable '{key}'")]
    EmptyValue { key: String },

    #[error("'{key}' already exists, skipping creation (use `depvar variable update` to change it)")]
    AlreadyExists { key: String },

    #[error("'{key}' already defined on line {first_line}, skipping duplicate")]
    DuplicateInFile { key: String, first_line: usize },

    #[error("expected KEY=VALUE, got '{line}'")]
    MalformedLine { line: String },
}

/// A skipped candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    origin: Origin,
    reason: Reason,
}

impl Rejection {
    pub fn new(origin: Origin, reason: Reason) -> Self {
        Self { origin, reason }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// Key of the rejected candidate, when it had one.
    pub fn key(&self) -> Option<&str> {
        match &self.reason {
            Reason::EmptyValue { key }
            | Reason::AlreadyExists { key }
            | Reason::DuplicateInFile { key, .. } => Some(key),
            Reason::EmptyKey { .. } | Reason::MalformedLine { .. } => None,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.origin, self.reason)
    }
}
