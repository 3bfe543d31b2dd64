//! Deployment commands.
//!
//! List, create, relabel and delete deployments.

mod create;
mod delete;
mod list;
mod update;

pub use create::execute as create;
pub use delete::execute as delete;
pub use list::execute as list;
pub use update::execute as update;
