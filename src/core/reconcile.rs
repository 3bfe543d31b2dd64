//! Variable reconciliation.
//!
//! Merges candidate edits into a variable set fetched from the backend. The
//! input set is never modified; the result is a new set that either replaces
//! the stored state wholesale or is discarded.
//!
//! Every candidate, inline or from a file, goes through the same merge step:
//!
//! - empty key or empty value: rejected
//! - key present, updates not allowed: rejected
//! - key present, updates allowed: value replaced in place, secret flag is
//!   `intent.secret || existing.secret`
//! - key absent: appended with `secret = intent.secret`
//!
//! A rejected candidate never stops the pass.

use tracing::debug;

use crate::core::domain::{Candidate, Reason, Rejection, Variable, VariableSet};

/// Caller intent for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    /// Mark every added or updated variable as secret.
    pub secret: bool,
    /// Allow overwriting keys that already exist.
    pub allow_update: bool,
}

/// An applied edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    Updated(String),
}

/// Result of a reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// The merged set to persist.
    pub variables: VariableSet,
    /// Applied edits, in application order.
    pub changes: Vec<Change>,
    /// Skipped candidates, in the order they were seen.
    pub rejections: Vec<Rejection>,
}

/// Accumulates a merge against a copy of the existing set.
#[derive(Debug)]
pub struct Reconciler {
    intent: Intent,
    outcome: Outcome,
}

impl Reconciler {
    /// Seed the result with every existing record, in order.
    pub fn new(existing: &VariableSet, intent: Intent) -> Self {
        Self {
            intent,
            outcome: Outcome {
                variables: existing.clone(),
                ..Outcome::default()
            },
        }
    }

    /// Apply one candidate against the result accumulated so far.
    pub fn apply(&mut self, candidate: &Candidate) {
        let origin = candidate.origin();
        let key = candidate.key();
        let value = candidate.value();

        if key.is_empty() {
            self.reject(
                candidate,
                Reason::EmptyKey {
                    value: value.to_string(),
                },
            );
            return;
        }
        if value.is_empty() {
            self.reject(
                candidate,
                Reason::EmptyValue {
                    key: key.to_string(),
                },
            );
            return;
        }

        let existing = self
            .outcome
            .variables
            .position(key)
            .zip(self.outcome.variables.get(key).map(Variable::is_secret));

        match existing {
            Some(_) if !self.intent.allow_update => {
                self.reject(
                    candidate,
                    Reason::AlreadyExists {
                        key: key.to_string(),
                    },
                );
            }
            Some((index, was_secret)) => {
                // Secrecy only ever goes false -> true.
                let secret = self.intent.secret || was_secret;
                debug!(key, %origin, secret, "updating variable");
                self.outcome
                    .variables
                    .replace(index, Variable::new(key, value, secret));
                self.outcome.changes.push(Change::Updated(key.to_string()));
            }
            None => {
                debug!(key, %origin, secret = self.intent.secret, "adding variable");
                self.outcome
                    .variables
                    .push(Variable::new(key, value, self.intent.secret));
                self.outcome.changes.push(Change::Added(key.to_string()));
            }
        }
    }

    /// Apply candidates in order.
    pub fn apply_all<'a>(&mut self, candidates: impl IntoIterator<Item = &'a Candidate>) {
        for candidate in candidates {
            self.apply(candidate);
        }
    }

    /// Record an externally detected rejection, e.g. from file parsing.
    pub fn record(&mut self, rejection: Rejection) {
        self.outcome.rejections.push(rejection);
    }

    pub fn finish(self) -> Outcome {
        self.outcome
    }

    fn reject(&mut self, candidate: &Candidate, reason: Reason) {
        debug!(origin = %candidate.origin(), %reason, "candidate rejected");
        self.outcome
            .rejections
            .push(Rejection::new(candidate.origin(), reason));
    }
}

/// Merge the inline candidate, then file candidates, into `existing`.
pub fn reconcile(
    existing: &VariableSet,
    inline: Option<&Candidate>,
    file: &[Candidate],
    intent: Intent,
) -> Outcome {
    let mut reconciler = Reconciler::new(existing, intent);
    reconciler.apply_all(inline);
    reconciler.apply_all(file);
    reconciler.finish()
}
