//! Job listings store.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::{Job, JobUpdate, NewJob};
use crate::routes::Route;
use crate::stores::freshness::{FetchMode, Loaded};
use crate::stores::{api_error, decode, encode, success_message, StoreError};

/// State container for job listings.
pub struct JobsStore {
    api: Arc<ApiClient>,
    jobs: Loaded<Vec<Job>>,
}

impl JobsStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            jobs: Loaded::new(),
        }
    }

    /// Fetch the job listing, honoring the freshness policy.
    pub async fn list(&self, mode: FetchMode) -> Result<Vec<Job>, StoreError> {
        self.jobs
            .get_or_fetch(mode, || async {
                let result = self.api.get(&Route::Jobs.path()).await;
                if !result.ok {
                    return Err(api_error(result));
                }
                decode("jobs", result.payload)
            })
            .await
    }

    /// Fetch a single job by id.
    pub async fn get(&self, id: u64) -> Result<Job, StoreError> {
        let result = self.api.get(&Route::Job(id).path()).await;
        if !result.ok {
            return Err(api_error(result));
        }
        decode("job", result.payload)
    }

    /// Create a job listing; invalidates the loaded listing on success.
    pub async fn add(&self, job: &NewJob) -> Result<String, StoreError> {
        let body = encode("new job", job)?;
        let result = self.api.post(&Route::Jobs.path(), Some(body)).await;
        if !result.ok {
            return Err(api_error(result));
        }
        self.jobs.invalidate().await;
        Ok(success_message(&result))
    }

    /// Apply a partial update to a job; invalidates the loaded listing.
    pub async fn update(&self, id: u64, update: &JobUpdate) -> Result<String, StoreError> {
        let body = encode("job update", update)?;
        let result = self.api.put(&Route::Job(id).path(), Some(body)).await;
        if !result.ok {
            return Err(api_error(result));
        }
        self.jobs.invalidate().await;
        Ok(success_message(&result))
    }

    /// Delete a job; invalidates the loaded listing.
    pub async fn remove(&self, id: u64) -> Result<String, StoreError> {
        let result = self.api.delete(&Route::Job(id).path()).await;
        if !result.ok {
            return Err(api_error(result));
        }
        self.jobs.invalidate().await;
        Ok(success_message(&result))
    }
}
