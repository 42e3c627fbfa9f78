use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, LaunchCommands, ResourceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Space agencies.
    Agencies {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// Astronauts.
    Astronauts {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// Launch programs.
    Programs {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// Launches (upcoming, previous, live).
    Launches {
        #[command(subcommand)]
        action: LaunchCommands,
    },
    /// Render the view behind a route path, e.g. `/astronaut/1`.
    Open(OpenArgs),
    /// Interactive browser over stdin.
    Browse(BrowseArgs),
    /// Show the signed-in account.
    Profile,
    /// Check that the backend is up.
    Health,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path such as `/home`, `/agencies`, `/program/25`.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// Route to start at.
    #[arg(long, default_value = "/home")]
    pub start: String,
}
