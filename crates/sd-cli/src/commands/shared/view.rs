use sd_auth::AuthError;
use sd_core::enums::LaunchTab;
use sd_view::{NavOutcome, Navigator, Route, Screen, Views};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;

/// Run the fetch cycle for `route` on `views` with a spinner.
pub async fn load_screen(
    views: &mut Views,
    ctx: &AppContext,
    flags: &GlobalFlags,
    route: &Route,
    tab: LaunchTab,
) -> Screen {
    let progress = Progress::spinner(&format!("Loading {route}"));
    let screen = views
        .load(
            &ctx.space(),
            route,
            ctx.session.session(),
            &ctx.load_options(flags, tab),
        )
        .await;
    progress.finish_clear();
    screen
}

/// Guard, load and print a protected view. Fails when signed out.
pub async fn show_protected(
    ctx: &AppContext,
    flags: &GlobalFlags,
    route: Route,
    tab: LaunchTab,
) -> anyhow::Result<()> {
    let mut nav = Navigator::new();
    let outcome = nav.navigate(route, ctx.session.session());
    if let NavOutcome::Redirected { requested } = outcome {
        tracing::debug!(%requested, "no session for protected view");
        return Err(AuthError::NotAuthenticated.into());
    }

    let screen = load_screen(&mut Views::default(), ctx, flags, outcome.route(), tab).await;
    output::screen(&screen, flags.format)
}
