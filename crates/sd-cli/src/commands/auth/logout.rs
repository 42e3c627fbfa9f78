use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    /// Env-provided sessions cannot be cleared by logout.
    note: Option<String>,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.logout()?;

    let note = sd_auth::resolve_session(&sd_auth::SessionStore::from_config(&ctx.config)?)
        .map(|_| "SPACEDASH_SESSION__TOKEN is still set in the environment".to_string());
    output(&AuthLogoutResponse { cleared: true, note }, flags.format)
}
