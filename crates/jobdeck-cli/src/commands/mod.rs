mod analytics;
mod auth;
mod bookmarks;
mod cvs;
mod dashboard;
mod jobs;

use std::sync::Arc;

use serde_json::Value;

use jobdeck_core::stores::freshness::FetchMode;
use jobdeck_core::{ApiClient, ApiConfig, FileCredentialStore, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let api = build_api(cli);

    match &cli.command {
        Command::Register(args) => auth::register(args, &api).await,
        Command::Login(args) => auth::login(args, &api).await,
        Command::Logout => auth::logout(&api).await,
        Command::Profile => auth::profile(&api).await,
        Command::Jobs(args) => jobs::run(args, &api).await,
        Command::Cvs(args) => cvs::run(args, &api).await,
        Command::Bookmarks(args) => bookmarks::run(args, &api).await,
        Command::Analytics(args) => analytics::run(args, &api).await,
        Command::Dashboard => dashboard::run(&api).await,
    }
}

fn build_api(cli: &Cli) -> Arc<ApiClient> {
    let mut config = ApiConfig::default();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    config.timeout_ms = cli.timeout_ms;

    Arc::new(ApiClient::new(
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(FileCredentialStore::new()),
        config,
    ))
}

pub(crate) fn fetch_mode(refresh: bool) -> FetchMode {
    if refresh {
        FetchMode::Refresh
    } else {
        FetchMode::Use
    }
}
