//! User/session store: registration, login, profile, logout.
//!
//! This is the store that owns the credential lifecycle: it persists the
//! token extracted from a successful login and clears it on logout or when a
//! profile fetch observes a 401.

use std::sync::Arc;

use serde_json::Value;

use crate::api::ApiClient;
use crate::models::{LoginRequest, Registration, UserProfile};
use crate::routes::Route;
use crate::stores::{api_error, decode, encode, success_message, StoreError};

pub struct UserStore {
    api: Arc<ApiClient>,
}

impl UserStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Register a new account; returns the server's confirmation message.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, StoreError> {
        let body = encode(
            "registration",
            &Registration {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            },
        )?;
        let result = self.api.post(&Route::Register.path(), Some(body)).await;
        if !result.ok {
            return Err(api_error(result));
        }
        Ok(success_message(&result))
    }

    /// Authenticate and persist the session credential.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), StoreError> {
        let body = encode(
            "login",
            &LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            },
        )?;
        let result = self.api.post(&Route::Login.path(), Some(body)).await;
        if !result.ok {
            return Err(api_error(result));
        }

        let token = result
            .payload
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(StoreError::MissingField("access_token"))?;
        self.api.credentials().store(token)?;
        Ok(())
    }

    /// Fetch the authenticated profile.
    ///
    /// A 401 means the persisted session is stale or revoked; the credential
    /// is cleared before the error is surfaced.
    pub async fn profile(&self) -> Result<UserProfile, StoreError> {
        let result = self.api.get(&Route::Profile.path()).await;
        if !result.ok {
            if result.status_code == 401 {
                self.api.credentials().clear()?;
            }
            return Err(api_error(result));
        }
        decode("profile", result.payload)
    }

    /// Drop the persisted session.
    pub async fn logout(&self) -> Result<(), StoreError> {
        self.api.credentials().clear()?;
        Ok(())
    }

    /// Whether a session credential is currently persisted.
    pub fn is_authenticated(&self) -> Result<bool, StoreError> {
        Ok(self.api.credentials().load()?.is_some())
    }
}
