use sd_core::enums::LaunchTab;
use sd_view::{Navigator, Route, Views};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands::shared::view::load_screen;
use crate::context::AppContext;
use crate::output;

/// Handle `spacedash open <path>`: the guarded route is rendered once, so a
/// protected path without a session shows the sign-in view.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)?;
    let mut nav = Navigator::new();
    let outcome = nav.navigate(route, ctx.session.session());
    let screen = load_screen(
        &mut Views::default(),
        ctx,
        flags,
        outcome.route(),
        LaunchTab::default(),
    )
    .await;
    output::screen(&screen, flags.format)
}
