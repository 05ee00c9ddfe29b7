//! Dashboard summary store.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::DashboardSummary;
use crate::routes::Route;
use crate::stores::{api_error, decode, StoreError};

pub struct DashboardStore {
    api: Arc<ApiClient>,
}

impl DashboardStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetch the dashboard summary.
    ///
    /// The summary endpoint is only meaningful for a logged-in user, so an
    /// absent credential fails fast without a round-trip.
    pub async fn summary(&self) -> Result<DashboardSummary, StoreError> {
        if self.api.credentials().load()?.is_none() {
            return Err(StoreError::NotAuthenticated);
        }

        let result = self.api.get(&Route::DashboardSummary.path()).await;
        if !result.ok {
            return Err(api_error(result));
        }
        decode("dashboard summary", result.payload)
    }
}
