use std::sync::Arc;

use serde_json::Value;

use jobdeck_core::{ApiClient, CvsStore};

use crate::cli::{CvsArgs, CvsCommand};
use crate::commands::fetch_mode;
use crate::error::CliError;

pub async fn run(args: &CvsArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = CvsStore::new(api.clone());

    match &args.command {
        CvsCommand::List { refresh } => {
            let cvs = store.list(fetch_mode(*refresh)).await?;
            Ok(serde_json::to_value(cvs)?)
        }
    }
}
