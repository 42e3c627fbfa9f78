use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    registered: bool,
    email: String,
    message: String,
    next: &'static str,
}

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ack = ctx
        .auth
        .signup(&args.email, &args.password, &args.confirm)
        .await
        .map_err(|error| anyhow::anyhow!("Registration failed: {error}"))?;

    output(
        &AuthSignupResponse {
            registered: true,
            email: args.email.trim().to_string(),
            message: ack
                .message
                .unwrap_or_else(|| "Registration successful! Please sign in.".to_string()),
            next: "spacedash auth login",
        },
        flags.format,
    )
}
