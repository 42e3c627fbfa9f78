//! Astronaut list and detail.

use sd_core::entities::Astronaut;
use sd_core::enums::ResourceKind;

use crate::{ApiError, SpaceClient, normalize};

impl SpaceClient {
    /// `GET /api/space/astronauts?limit=N`, with display images resolved.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_collection`].
    pub async fn list_astronauts(&self, limit: u32) -> Result<Vec<Astronaut>, ApiError> {
        let records = self
            .fetch_collection(ResourceKind::Astronaut, limit, &[])
            .await?;
        normalize::decode_astronauts(records)
    }

    /// `GET /api/space/astronauts/{id}`, with the display image resolved.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_detail`].
    pub async fn get_astronaut(&self, id: &str) -> Result<Astronaut, ApiError> {
        normalize::decode_astronaut(self.fetch_detail(ResourceKind::Astronaut, id).await?)
    }
}
