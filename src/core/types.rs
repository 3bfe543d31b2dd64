//! Type aliases for domain concepts.

/// A variable name (e.g., DATABASE_URL).
pub type VariableKey = String;

/// Identifier of a deployment in the backend.
pub type DeploymentId = String;
