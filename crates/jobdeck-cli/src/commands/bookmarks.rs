use std::sync::Arc;

use serde_json::Value;

use jobdeck_core::{ApiClient, BookmarksStore};

use crate::cli::{BookmarksArgs, BookmarksCommand};
use crate::error::CliError;

pub async fn run(args: &BookmarksArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = BookmarksStore::new(api.clone());

    let bookmarks = match &args.command {
        BookmarksCommand::List { user_id } => store.list(*user_id).await?,
        BookmarksCommand::Add { user_id, job_id } => store.add(*user_id, *job_id).await?,
        BookmarksCommand::Remove { id, user_id } => store.remove(*id, *user_id).await?,
    };

    Ok(serde_json::to_value(bookmarks)?)
}
