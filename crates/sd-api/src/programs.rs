//! Program list and detail.

use sd_core::entities::Program;
use sd_core::enums::ResourceKind;

use crate::{ApiError, SpaceClient, normalize};

impl SpaceClient {
    /// `GET /api/space/programs?limit=N`.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_collection`].
    pub async fn list_programs(&self, limit: u32) -> Result<Vec<Program>, ApiError> {
        let records = self.fetch_collection(ResourceKind::Program, limit, &[]).await?;
        normalize::decode_all(records)
    }

    /// `GET /api/space/programs/{id}`.
    ///
    /// # Errors
    ///
    /// See [`SpaceClient::fetch_detail`].
    pub async fn get_program(&self, id: &str) -> Result<Program, ApiError> {
        normalize::decode(self.fetch_detail(ResourceKind::Program, id).await?)
    }
}
