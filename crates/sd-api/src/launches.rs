//! Launch list (tabbed) and detail.
//!
//! Upcoming and previous tabs are always filtered by the backend
//! (`type=upcoming` / `type=previous`). The live tab depends on
//! [`LiveFilter`]: `server` sends `type=live`, `client` requests the generic
//! collection and keeps launches whose status is listed in
//! [`LiveOptions::statuses`].

use sd_config::{GeneralConfig, LiveFilter};
use sd_core::entities::Launch;
use sd_core::enums::{LaunchTab, ResourceKind};

use crate::{ApiError, SpaceClient, normalize};

/// How the live tab is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveOptions {
    pub filter: LiveFilter,
    pub statuses: Vec<String>,
}

impl From<&GeneralConfig> for LiveOptions {
    fn from(config: &GeneralConfig) -> Self {
        Self {
            filter: config.live_filter,
            statuses: config.live_statuses.clone(),
        }
    }
}

impl Default for LiveOptions {
    fn default() -> Self {
        Self::from(&GeneralConfig::default())
    }
}

/// Value of the `type` query parameter for a tab, if any.
#[must_use]
pub const fn type_param(tab: LaunchTab, filter: LiveFilter) -> Option<&'static str> {
    match (tab, filter) {
        (LaunchTab::Upcoming, _) => Some("upcoming"),
        (LaunchTab::Previous, _) => Some("previous"),
        (LaunchTab::Live, LiveFilter::Server) => Some("live"),
        (LaunchTab::Live, LiveFilter::Client) => None,
    }
}

impl SpaceClient {
    /// `GET /api/space/launches?type=T&limit=N` for the given tab.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_collection`]. A client-side live filter that
    /// keeps nothing yields [`ApiError::NoData`].
    pub async fn list_launches(
        &self,
        tab: LaunchTab,
        limit: u32,
        live: &LiveOptions,
    ) -> Result<Vec<Launch>, ApiError> {
        let params: Vec<(&str, &str)> = type_param(tab, live.filter)
            .map(|value| vec![("type", value)])
            .unwrap_or_default();

        let records = self
            .fetch_collection(ResourceKind::Launch, limit, &params)
            .await?;
        let mut launches: Vec<Launch> = normalize::decode_all(records)?;

        if tab == LaunchTab::Live && live.filter == LiveFilter::Client {
            let before = launches.len();
            launches.retain(|launch| launch.has_status_in(&live.statuses));
            tracing::debug!(before, after = launches.len(), "client-side live filter");
            if launches.is_empty() {
                return Err(ApiError::NoData);
            }
        }

        Ok(launches)
    }

    /// `GET /api/space/launches/{id}`.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_detail`].
    pub async fn get_launch(&self, id: &str) -> Result<Launch, ApiError> {
        normalize::decode(self.fetch_detail(ResourceKind::Launch, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_query_params() {
        assert_eq!(
            type_param(LaunchTab::Upcoming, LiveFilter::Client),
            Some("upcoming")
        );
        assert_eq!(
            type_param(LaunchTab::Previous, LiveFilter::Server),
            Some("previous")
        );
        assert_eq!(type_param(LaunchTab::Live, LiveFilter::Server), Some("live"));
        assert_eq!(type_param(LaunchTab::Live, LiveFilter::Client), None);
    }

    #[test]
    fn live_options_follow_config() {
        let config = GeneralConfig {
            live_filter: LiveFilter::Server,
            live_statuses: vec!["Hold".into()],
            ..Default::default()
        };
        let options = LiveOptions::from(&config);
        assert_eq!(options.filter, LiveFilter::Server);
        assert_eq!(options.statuses, vec!["Hold".to_string()]);
    }
}
