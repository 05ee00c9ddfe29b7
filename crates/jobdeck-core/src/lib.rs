//! # Jobdeck Core
//!
//! Client-side contracts for the job-application tracker API: the HTTP
//! transport, the normalizing data-access façade, the persisted session
//! credential, and the per-entity stores the CLI drives.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Data-access façade returning the uniform [`ApiResult`] |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`models`] | Payload shapes exchanged with the API |
//! | [`routes`] | Endpoint path contract |
//! | [`session`] | Persisted bearer-token storage |
//! | [`stores`] | Per-entity state containers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobdeck_core::{ApiClient, ApiConfig, FileCredentialStore, ReqwestHttpClient};
//! use jobdeck_core::stores::{JobsStore, UserStore};
//! use jobdeck_core::stores::freshness::FetchMode;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(ApiClient::new(
//!         Arc::new(ReqwestHttpClient::new()),
//!         Arc::new(FileCredentialStore::new()),
//!         ApiConfig::default(),
//!     ));
//!
//!     let user = UserStore::new(api.clone());
//!     user.login("me@example.test", "secret").await?;
//!
//!     let jobs = JobsStore::new(api);
//!     for job in jobs.list(FetchMode::Use).await? {
//!         println!("{}: {}", job.id, job.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Façade operations never fail: every call resolves to an [`ApiResult`]
//! whose `ok` flag is the only status signal consumers branch on. Stores
//! convert `ok: false` into [`stores::StoreError`] carrying the payload's
//! message.
//!
//! ## Security
//!
//! - The session credential is stored with owner-only permissions and read
//!   from disk on every request
//! - Requests without a credential go out unauthenticated; the server
//!   decides what requires a session

pub mod api;
pub mod http_client;
pub mod models;
pub mod routes;
pub mod session;
pub mod stores;

// Re-export commonly used types at crate root for convenience

pub use api::{
    unwrap_envelope, ApiClient, ApiConfig, ApiResult, RequestOptions, DEFAULT_BASE_URL,
    DEFAULT_ERROR_MESSAGE,
};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

pub use models::{
    AnalyticsEntry, Bookmark, Cv, DashboardSummary, Job, JobUpdate, LoginRequest, NewBookmark,
    NewJob, Registration, UserProfile,
};

pub use routes::Route;

pub use session::{CredentialStore, FileCredentialStore, MemoryCredentialStore, SessionError};

pub use stores::freshness::{FetchMode, Loaded};
pub use stores::{
    AnalyticsStore, BookmarksStore, CvsStore, DashboardStore, JobsStore, StoreError, UserStore,
};
