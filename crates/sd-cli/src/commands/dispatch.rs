use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Agencies { action } => {
            commands::resources::handle_agencies(&action, ctx, flags).await
        }
        Commands::Astronauts { action } => {
            commands::resources::handle_astronauts(&action, ctx, flags).await
        }
        Commands::Programs { action } => {
            commands::resources::handle_programs(&action, ctx, flags).await
        }
        Commands::Launches { action } => {
            commands::resources::handle_launches(&action, ctx, flags).await
        }
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags).await,
        Commands::Profile => commands::profile::handle(ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags).await,
    }
}
