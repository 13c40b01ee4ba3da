//! Command-line argument tree.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "amparo",
    version,
    about = "Administrative registry for the Amparo vocational-support program"
)]
pub struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log errors only.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authenticate against the staff collection.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session.
    Logout,
    /// Show the current identity and the dashboard counters.
    Status,
    /// List a collection.
    List { collection: CollectionArg },
    /// Show one record by id.
    Show { collection: CollectionArg, id: String },
    /// Delete a record. Refuses to run without `--yes`.
    Remove {
        collection: CollectionArg,
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Host the in-memory stub record store for local development.
    Serve {
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
}

/// The seven collections, addressed by their store path names.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollectionArg {
    Usuarios,
    Empresas,
    Funcionarios,
    Avaliacoes,
    Entrevistas,
    Encaminhamentos,
    Acompanhamentos,
}
