use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct HealthResponse {
    backend: String,
    up: bool,
    status: String,
    service: Option<String>,
    message: Option<String>,
    checked_at: Option<String>,
}

/// Handle `spacedash health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.space();
    let progress = Progress::spinner("Checking backend health");
    let status = match client.health().await {
        Ok(status) => {
            progress.finish_clear();
            status
        }
        Err(error) => {
            progress.finish_err("backend unreachable");
            return Err(error)
                .with_context(|| format!("health check failed for {}", client.origin()));
        }
    };

    let checked_at = status
        .timestamp
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|at| at.to_rfc3339());
    output(
        &HealthResponse {
            backend: client.origin().to_string(),
            up: status.is_up(),
            status: status.status,
            service: status.service,
            message: status.message,
            checked_at,
        },
        flags.format,
    )
}
