use anyhow::Context;
use sd_api::{LiveOptions, SpaceClient};
use sd_auth::{AuthClient, SessionContext, SessionStore};
use sd_config::SpaceDashConfig;
use sd_core::enums::LaunchTab;
use sd_view::LoadOptions;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;

/// Everything a command needs: config, the session, and the two clients.
pub struct AppContext {
    pub config: SpaceDashConfig,
    pub session: SessionContext,
    pub auth: AuthClient,
    space: SpaceClient,
}

impl AppContext {
    pub fn init(config: SpaceDashConfig) -> anyhow::Result<Self> {
        let store = SessionStore::from_config(&config)?;
        let session = SessionContext::restore(store);
        let auth = AuthClient::new(&config.api).context("failed to build auth client")?;
        let space = SpaceClient::new(&config.api).context("failed to build space client")?;
        Ok(Self {
            config,
            session,
            auth,
            space,
        })
    }

    /// Space client carrying the current session token.
    pub fn space(&self) -> SpaceClient {
        self.space.clone().with_session(self.session.session())
    }

    pub fn load_options(&self, flags: &GlobalFlags, tab: LaunchTab) -> LoadOptions {
        LoadOptions {
            limit: effective_limit(None, flags.limit, self.config.general.default_limit),
            tab,
            live: LiveOptions::from(&self.config.general),
        }
    }
}
