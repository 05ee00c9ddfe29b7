use std::sync::Arc;

use serde_json::Value;

use jobdeck_core::stores::freshness::FetchMode;
use jobdeck_core::{AnalyticsStore, ApiClient};

use crate::cli::{AnalyticsArgs, AnalyticsCommand};
use crate::commands::fetch_mode;
use crate::error::CliError;

pub async fn run(args: &AnalyticsArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = AnalyticsStore::new(api.clone());

    match &args.command {
        AnalyticsCommand::List {
            skill_match,
            location,
            refresh,
        } => {
            let mode = fetch_mode(*refresh);
            let entries = filtered(&store, skill_match.as_deref(), location.as_deref(), mode).await?;
            Ok(serde_json::to_value(entries)?)
        }
        AnalyticsCommand::Summary => {
            let summary = store.summary(FetchMode::Use).await?;
            Ok(serde_json::to_value(summary)?)
        }
    }
}

async fn filtered(
    store: &AnalyticsStore,
    skill_match: Option<&str>,
    location: Option<&str>,
    mode: FetchMode,
) -> Result<Vec<jobdeck_core::AnalyticsEntry>, CliError> {
    let entries = match (skill_match, location) {
        (Some(level), None) => store.by_skill_match(level, mode).await?,
        (None, Some(place)) => store.by_location(place, mode).await?,
        (Some(level), Some(place)) => store
            .by_skill_match(level, mode)
            .await?
            .into_iter()
            .filter(|entry| entry.location.as_deref() == Some(place))
            .collect(),
        (None, None) => store.list(mode).await?,
    };
    Ok(entries)
}
