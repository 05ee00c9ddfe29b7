//! CV listings store.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::models::Cv;
use crate::routes::Route;
use crate::stores::freshness::{FetchMode, Loaded};
use crate::stores::{api_error, decode, StoreError};

pub struct CvsStore {
    api: Arc<ApiClient>,
    cvs: Loaded<Vec<Cv>>,
}

impl CvsStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            cvs: Loaded::new(),
        }
    }

    pub async fn list(&self, mode: FetchMode) -> Result<Vec<Cv>, StoreError> {
        self.cvs
            .get_or_fetch(mode, || async {
                let result = self.api.get(&Route::Cvs.path()).await;
                if !result.ok {
                    return Err(api_error(result));
                }
                decode("cvs", result.payload)
            })
            .await
    }
}
