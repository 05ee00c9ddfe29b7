//! Per-entity state containers built on the data-access façade.
//!
//! Stores are the façade's only consumers: they branch solely on
//! [`ApiResult::ok`](crate::api::ApiResult) and surface the payload's
//! `message` on failure. Status semantics stay inside the façade.

pub mod freshness;

mod analytics;
mod bookmarks;
mod cvs;
mod dashboard;
mod jobs;
mod user;

pub use analytics::AnalyticsStore;
pub use bookmarks::BookmarksStore;
pub use cvs::CvsStore;
pub use dashboard::DashboardStore;
pub use jobs::JobsStore;
pub use user::UserStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::ApiResult;
use crate::session::SessionError;

/// Store-level error taxonomy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The API answered with `ok: false`; carries the payload's message.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode {context} payload: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to encode {context} request body: {source}")]
    Encode {
        context: &'static str,
        source: serde_json::Error,
    },

    #[error("response payload missing `{0}`")]
    MissingField(&'static str),

    #[error("not authenticated; log in first")]
    NotAuthenticated,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl StoreError {
    /// HTTP status of the failed call, for `Api` errors.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convert a failed `ApiResult` into a `StoreError`, surfacing
/// `payload.message` when the server provided one.
pub(crate) fn api_error(result: ApiResult) -> StoreError {
    let message = result
        .message()
        .map(str::to_owned)
        .unwrap_or_else(|| result.payload.to_string());
    StoreError::Api {
        status: result.status_code,
        message,
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    context: &'static str,
    payload: Value,
) -> Result<T, StoreError> {
    serde_json::from_value(payload).map_err(|source| StoreError::Decode { context, source })
}

pub(crate) fn encode<T: Serialize>(
    context: &'static str,
    value: &T,
) -> Result<Value, StoreError> {
    serde_json::to_value(value).map_err(|source| StoreError::Encode { context, source })
}

pub(crate) fn success_message(result: &ApiResult) -> String {
    result.message().unwrap_or("request completed").to_owned()
}
