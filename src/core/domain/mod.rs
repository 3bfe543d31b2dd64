//! Domain types.

mod candidate;
mod deployment;
mod rejection;
mod variable;
mod variable_set;

pub use candidate::{Candidate, Origin};
pub use deployment::Deployment;
pub use rejection::{Reason, Rejection};
pub use variable::Variable;
pub use variable_set::VariableSet;
