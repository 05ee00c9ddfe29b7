use std::sync::Arc;

use serde_json::Value;

use jobdeck_core::{ApiClient, DashboardStore};

use crate::error::CliError;

pub async fn run(api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = DashboardStore::new(api.clone());
    let summary = store.summary().await?;
    Ok(serde_json::to_value(summary)?)
}
