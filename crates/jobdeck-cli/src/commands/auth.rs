use std::sync::Arc;

use serde_json::{json, Value};

use jobdeck_core::{ApiClient, UserStore};

use crate::cli::{LoginArgs, RegisterArgs};
use crate::error::CliError;

pub async fn register(args: &RegisterArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = UserStore::new(api.clone());
    let message = store
        .register(&args.name, &args.email, &args.password)
        .await?;
    Ok(json!({ "message": message }))
}

pub async fn login(args: &LoginArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = UserStore::new(api.clone());
    store.login(&args.email, &args.password).await?;
    Ok(json!({ "message": format!("logged in as {}", args.email) }))
}

pub async fn logout(api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = UserStore::new(api.clone());
    store.logout().await?;
    Ok(json!({ "message": "logged out" }))
}

pub async fn profile(api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = UserStore::new(api.clone());
    let profile = store.profile().await?;
    Ok(serde_json::to_value(profile)?)
}
