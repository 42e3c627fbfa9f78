mod auth;
mod resources;

pub use auth::{AuthCommands, AuthLoginArgs, AuthSignupArgs};
pub use resources::{LaunchCommands, ResourceCommands};
