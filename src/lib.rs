//! depvar - Manage deployment environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── variable      # list / create / update variables
//! │   ├── deployment    # list / create / update / delete deployments
//! │   ├── resolve       # pick the target deployment
//! │   ├── output        # coloured messages and tables
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain/       # Variable, VariableSet, Deployment, Candidate, Rejection
//!     ├── env           # KEY=VALUE file parsing
//!     ├── reconcile     # merge candidates into a variable set
//!     ├── export        # append variables to an env file
//!     ├── present       # numbered table rows
//!     ├── backend/      # fetch/persist storage (filesystem, memory)
//!     ├── config        # .depvar.toml state file
//!     ├── resolve       # deployment resolution
//!     └── variables     # list and modify workflows
//! ```
//!
//! # Reconciliation rules
//!
//! - Keys are unique; existing order is preserved and new keys are appended
//! - Existing keys are only overwritten when updates are allowed
//! - A secret variable stays secret
//! - In an env file, the first occurrence of a key wins
//! - A bad candidate is reported and skipped, never fatal

pub mod cli;
pub mod core;
pub mod error;
