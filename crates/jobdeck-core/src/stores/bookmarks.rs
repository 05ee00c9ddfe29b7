//! Bookmarks store.
//!
//! Bookmarks are always fetched fresh; after a mutation the listing is
//! re-fetched so the caller observes the server's view, not a local guess.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::{Bookmark, NewBookmark};
use crate::routes::Route;
use crate::stores::{api_error, decode, encode, StoreError};

pub struct BookmarksStore {
    api: Arc<ApiClient>,
}

impl BookmarksStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, user_id: u64) -> Result<Vec<Bookmark>, StoreError> {
        let result = self.api.get(&Route::BookmarksFor(user_id).path()).await;
        if !result.ok {
            return Err(api_error(result));
        }
        decode("bookmarks", result.payload)
    }

    /// Bookmark a job for a user and return the refreshed listing.
    pub async fn add(&self, user_id: u64, job_id: u64) -> Result<Vec<Bookmark>, StoreError> {
        let body = encode("new bookmark", &NewBookmark { user_id, job_id })?;
        let result = self.api.post(&Route::Bookmarks.path(), Some(body)).await;
        if !result.ok {
            return Err(api_error(result));
        }
        self.list(user_id).await
    }

    /// Remove a bookmark and return the refreshed listing.
    pub async fn remove(&self, bookmark_id: u64, user_id: u64) -> Result<Vec<Bookmark>, StoreError> {
        let result = self.api.delete(&Route::Bookmark(bookmark_id).path()).await;
        if !result.ok {
            return Err(api_error(result));
        }
        self.list(user_id).await
    }
}
