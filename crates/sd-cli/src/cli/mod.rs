use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `spacedash` binary.
#[derive(Debug, Parser)]
#[command(
    name = "spacedash",
    version,
    about = "Browse space agencies, astronauts, programs and launches"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw, card
    #[arg(short, long, global = true, default_value = "card")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use sd_core::enums::LaunchTab;

    use super::subcommands::{AuthCommands, LaunchCommands, ResourceCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "spacedash",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "health",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["spacedash", "profile", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Profile));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["spacedash", "--format", "xml", "health"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn default_format_is_card() {
        let cli = Cli::try_parse_from(["spacedash", "health"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Card);
    }

    #[test]
    fn resource_get_takes_id() {
        let cli = Cli::try_parse_from(["spacedash", "astronauts", "get", "42"])
            .expect("cli should parse");
        match cli.command {
            Commands::Astronauts {
                action: ResourceCommands::Get { id },
            } => assert_eq!(id, "42"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn launch_tab_parses() {
        let cli = Cli::try_parse_from(["spacedash", "launches", "list", "--tab", "live"])
            .expect("cli should parse");
        match cli.command {
            Commands::Launches {
                action: LaunchCommands::List { tab },
            } => assert_eq!(tab, LaunchTab::Live),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["spacedash", "launches", "list"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Launches {
                action: LaunchCommands::List {
                    tab: LaunchTab::Upcoming
                }
            }
        ));
    }

    #[test]
    fn signup_requires_confirmation() {
        let parsed = Cli::try_parse_from([
            "spacedash",
            "auth",
            "signup",
            "--email",
            "user@gmail.com",
            "--password",
            "Abc12345!",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from([
            "spacedash",
            "auth",
            "signup",
            "--email",
            "user@gmail.com",
            "--password",
            "Abc12345!",
            "--confirm",
            "Abc12345!",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Signup(_)
            }
        ));
    }
}
