//! Job analytics store with derived views over the aggregated rows.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::AnalyticsEntry;
use crate::routes::Route;
use crate::stores::freshness::{FetchMode, Loaded};
use crate::stores::{api_error, decode, StoreError};

pub struct AnalyticsStore {
    api: Arc<ApiClient>,
    entries: Loaded<Vec<AnalyticsEntry>>,
}

impl AnalyticsStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            entries: Loaded::new(),
        }
    }

    pub async fn list(&self, mode: FetchMode) -> Result<Vec<AnalyticsEntry>, StoreError> {
        self.entries
            .get_or_fetch(mode, || async {
                let result = self.api.get(&Route::JobAnalytics.path()).await;
                if !result.ok {
                    return Err(api_error(result));
                }
                decode("job analytics", result.payload)
            })
            .await
    }

    /// Rows matching one skill-match level.
    pub async fn by_skill_match(
        &self,
        level: &str,
        mode: FetchMode,
    ) -> Result<Vec<AnalyticsEntry>, StoreError> {
        Ok(self
            .list(mode)
            .await?
            .into_iter()
            .filter(|entry| entry.skill_match_level == level)
            .collect())
    }

    /// Rows matching one location.
    pub async fn by_location(
        &self,
        location: &str,
        mode: FetchMode,
    ) -> Result<Vec<AnalyticsEntry>, StoreError> {
        Ok(self
            .list(mode)
            .await?
            .into_iter()
            .filter(|entry| entry.location.as_deref() == Some(location))
            .collect())
    }

    /// Total count per skill-match level.
    pub async fn summary(&self, mode: FetchMode) -> Result<BTreeMap<String, u64>, StoreError> {
        let mut summary = BTreeMap::new();
        for entry in self.list(mode).await? {
            *summary.entry(entry.skill_match_level).or_insert(0) += entry.count;
        }
        Ok(summary)
    }
}
