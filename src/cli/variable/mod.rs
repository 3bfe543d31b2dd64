//! Variable commands.
//!
//! List, create, and update a deployment's environment variables.

mod list;
mod modify;

pub use list::execute as list;
pub use modify::execute as modify;
