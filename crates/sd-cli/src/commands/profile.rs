use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ProfileResponse {
    email: String,
    session_source: Option<String>,
}

/// Handle `spacedash profile`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.require()?;
    output(
        &ProfileResponse {
            email: session.email.clone(),
            session_source: ctx.session.source().map(|source| source.to_string()),
        },
        flags.format,
    )
}
