use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    session_source: Option<String>,
    backend: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session.session();
    output(
        &AuthStatusResponse {
            authenticated: session.is_some(),
            email: session.map(|s| s.email.clone()),
            session_source: ctx.session.source().map(|source| source.to_string()),
            backend: ctx.config.api.origin().to_string(),
        },
        flags.format,
    )
}
