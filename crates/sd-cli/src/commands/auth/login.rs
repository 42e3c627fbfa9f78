use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    session_source: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let progress = Progress::spinner("Signing in");
    let result = ctx
        .session
        .login(&ctx.auth, &args.email, &args.password)
        .await
        .map(|session| session.email.clone());
    let email = match result {
        Ok(email) => {
            progress.finish_clear();
            email
        }
        Err(error) => {
            progress.finish_err("sign-in failed");
            anyhow::bail!("Login failed: {error}");
        }
    };

    output(
        &AuthLoginResponse {
            authenticated: true,
            email,
            session_source: ctx.session.source().map(|source| source.to_string()),
        },
        flags.format,
    )
}
