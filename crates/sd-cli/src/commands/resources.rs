use sd_core::enums::{LaunchTab, ResourceKind};
use sd_view::Route;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{LaunchCommands, ResourceCommands};
use crate::commands::shared::view::show_protected;
use crate::context::AppContext;

async fn handle(
    kind: ResourceKind,
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let route = match action {
        ResourceCommands::List => Route::list(kind),
        ResourceCommands::Get { id } => Route::detail(kind, id.as_str()),
    };
    show_protected(ctx, flags, route, LaunchTab::default()).await
}

/// Handle `spacedash agencies <subcommand>`.
pub async fn handle_agencies(
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    handle(ResourceKind::Agency, action, ctx, flags).await
}

/// Handle `spacedash astronauts <subcommand>`.
pub async fn handle_astronauts(
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    handle(ResourceKind::Astronaut, action, ctx, flags).await
}

/// Handle `spacedash programs <subcommand>`.
pub async fn handle_programs(
    action: &ResourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    handle(ResourceKind::Program, action, ctx, flags).await
}

/// Handle `spacedash launches <subcommand>`.
pub async fn handle_launches(
    action: &LaunchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LaunchCommands::List { tab } => show_protected(ctx, flags, Route::Home, *tab).await,
        LaunchCommands::Get { id } => {
            show_protected(
                ctx,
                flags,
                Route::detail(ResourceKind::Launch, id.as_str()),
                LaunchTab::default(),
            )
            .await
        }
    }
}
