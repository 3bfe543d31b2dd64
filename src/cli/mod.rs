//! Command-line interface.

pub mod completions;
pub mod deployment;
pub mod output;
pub mod resolve;
pub mod variable;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::backend::{Backend, Filesystem};
use crate::core::constants::{ENV_FILE, STATE_ENV, STATE_FILE};
use crate::core::reconcile::Intent;
use crate::core::variables::ModifyRequest;
use crate::error::Result;

/// depvar - Manage deployment environment variables.
#[derive(Parser)]
#[command(
    name = "depvar",
    about = "Manage deployment environment variables",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// State file holding deployments
    #[arg(long, global = true, env = STATE_ENV, default_value = STATE_FILE)]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage a deployment's environment variables
    #[command(alias = "var")]
    Variable {
        #[command(subcommand)]
        action: VariableAction,
    },

    /// Manage deployments
    Deployment {
        #[command(subcommand)]
        action: DeploymentAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Variable subcommands.
#[derive(Subcommand)]
pub enum VariableAction {
    /// List a deployment's variables
    List(ListArgs),

    /// Create variables; keys that already exist are left untouched
    Create(ModifyArgs),

    /// Create or update variables
    Update(ModifyArgs),
}

/// Arguments for `variable list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Deployment id (prompted for when several exist)
    #[arg(short, long)]
    pub deployment: Option<String>,

    /// Only show this key
    #[arg(short, long)]
    pub key: Option<String>,

    /// Append the listed variables to the env file
    #[arg(short, long)]
    pub save: bool,

    /// Env file used with --save
    #[arg(short, long, default_value = ENV_FILE)]
    pub env: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `variable create` and `variable update`.
#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// Variable as KEY=VALUE
    #[arg(conflicts_with_all = ["key", "value"])]
    pub pair: Option<String>,

    /// Deployment id (prompted for when several exist)
    #[arg(short, long)]
    pub deployment: Option<String>,

    /// Variable key
    #[arg(short, long)]
    pub key: Option<String>,

    /// Variable value
    #[arg(short, long)]
    pub value: Option<String>,

    /// Mark created or updated variables as secret
    #[arg(short, long)]
    pub secret: bool,

    /// Load variables from the env file
    #[arg(short, long)]
    pub load: bool,

    /// Env file used with --load
    #[arg(short, long, default_value = ENV_FILE)]
    pub env: PathBuf,
}

impl ModifyArgs {
    /// Turn parsed flags into a modify request.
    pub fn into_request(self, allow_update: bool) -> ModifyRequest {
        let (key, value) = match self.pair {
            Some(pair) => match pair.split_once('=') {
                Some((k, v)) => (Some(k.to_string()), Some(v.to_string())),
                None => (Some(pair), None),
            },
            None => (self.key, self.value),
        };

        ModifyRequest {
            inline: ModifyRequest::inline_from(key, value),
            file: self.load.then_some(self.env),
            intent: Intent {
                secret: self.secret,
                allow_update,
            },
        }
    }
}

/// Deployment subcommands.
#[derive(Subcommand)]
pub enum DeploymentAction {
    /// List deployments
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an empty deployment
    Create {
        /// Human-readable label
        label: String,
    },

    /// Change a deployment's label
    #[command(alias = "up")]
    Update {
        /// Deployment id
        id: String,
        /// New human-readable label
        #[arg(short, long)]
        label: String,
    },

    /// Delete a deployment and its variables
    Delete {
        /// Deployment id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute a command.
pub fn execute(command: Command, state: PathBuf) -> Result<()> {
    use Command::*;

    let mut backend = Filesystem::new(state);
    let backend: &mut dyn Backend = &mut backend;

    match command {
        Variable { action } => match action {
            VariableAction::List(args) => variable::list(backend, args),
            VariableAction::Create(args) => variable::modify(backend, args, false),
            VariableAction::Update(args) => variable::modify(backend, args, true),
        },
        Deployment { action } => match action {
            DeploymentAction::List { json } => deployment::list(backend, json),
            DeploymentAction::Create { label } => deployment::create(backend, &label),
            DeploymentAction::Update { id, label } => deployment::update(backend, &id, &label),
            DeploymentAction::Delete { id, yes } => deployment::delete(backend, &id, yes),
        },
        Completions { shell } => completions::execute(shell),
    }
}
