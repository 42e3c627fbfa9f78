use clap::Subcommand;
use sd_core::enums::LaunchTab;

/// List/detail commands shared by agencies, astronauts and programs.
#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// List records (`--limit` caps the count).
    List,
    /// Show one record.
    Get { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum LaunchCommands {
    /// List launches for a tab.
    List {
        /// upcoming, previous, or live
        #[arg(long, default_value = "upcoming", value_parser = parse_tab)]
        tab: LaunchTab,
    },
    /// Show one launch.
    Get { id: String },
}

fn parse_tab(raw: &str) -> Result<LaunchTab, String> {
    raw.parse::<LaunchTab>().map_err(|error| error.to_string())
}
