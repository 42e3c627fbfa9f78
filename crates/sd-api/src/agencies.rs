//! Agency list and detail.

use sd_core::entities::Agency;
use sd_core::enums::ResourceKind;

use crate::{ApiError, SpaceClient, normalize};

impl SpaceClient {
    /// `GET /api/space/agencies?limit=N`.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_collection`].
    pub async fn list_agencies(&self, limit: u32) -> Result<Vec<Agency>, ApiError> {
        let records = self.fetch_collection(ResourceKind::Agency, limit, &[]).await?;
        normalize::decode_all(records)
    }

    /// `GET /api/space/agencies/{id}`.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_detail`].
    pub async fn get_agency(&self, id: &str) -> Result<Agency, ApiError> {
        normalize::decode(self.fetch_detail(ResourceKind::Agency, id).await?)
    }
}
