//! Persisted session credential storage.
//!
//! The bearer token obtained at login is kept in a TOML file under the user's
//! config directory and re-read on every outgoing request, so a fresh process
//! observes the same authenticated state the previous one left behind.
//!
//! # File Location
//!
//! - Linux/macOS: `~/.config/jobdeck/credentials.toml`
//! - Fallback: `.jobdeck/credentials.toml` relative to the working directory
//!
//! # Security
//!
//! - File permissions set to 0600 (owner read/write only) on Unix
//! - Only the access token is stored, never credentials used to obtain it

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Errors raised by credential storage.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot read credentials file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write credentials file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("credentials file '{path}' is corrupted: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize credentials: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Storage seam for the session credential.
///
/// The façade reads through this on every request; stores write through it on
/// login/logout. Implementations hold at most one token.
pub trait CredentialStore: Send + Sync {
    /// Current token, if a session is persisted. Absence is not an error.
    fn load(&self) -> Result<Option<String>, SessionError>;

    /// Persist a token, replacing any previous session.
    fn store(&self, token: &str) -> Result<(), SessionError>;

    /// Drop the persisted session. Clearing an absent session is a no-op.
    fn clear(&self) -> Result<(), SessionError>;
}

/// On-disk credential format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct CredentialsFile {
    access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<String>,
}

/// File-based credential storage.
///
/// Re-reads the file on every [`load`](CredentialStore::load) so concurrent
/// logins from another process of the same user are picked up.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    file_path: PathBuf,
}

impl FileCredentialStore {
    /// Default credentials file path under the platform config directory.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("jobdeck").join("credentials.toml")
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir
                .join(".config")
                .join("jobdeck")
                .join("credentials.toml")
        } else {
            PathBuf::from(".jobdeck").join("credentials.toml")
        }
    }

    /// Create a store at the default location.
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create a store at a custom location.
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_file(&self) -> Result<Option<CredentialsFile>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.file_path).map_err(|source| SessionError::Read {
            path: self.file_path.clone(),
            source,
        })?;

        let file = toml::from_str(&contents).map_err(|source| SessionError::Parse {
            path: self.file_path.clone(),
            source,
        })?;

        Ok(Some(file))
    }

    fn write_file(&self, file: &CredentialsFile) -> Result<(), SessionError> {
        let contents = toml::to_string_pretty(file)?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Write {
                path: self.file_path.clone(),
                source,
            })?;
        }

        fs::write(&self.file_path, contents).map_err(|source| SessionError::Write {
            path: self.file_path.clone(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.file_path, permissions).map_err(|source| {
                SessionError::Write {
                    path: self.file_path.clone(),
                    source,
                }
            })?;
        }

        Ok(())
    }
}

impl Default for FileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.read_file()?.map(|file| file.access_token))
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        let file = CredentialsFile {
            access_token: token.to_owned(),
            saved_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        };
        self.write_file(&file)
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Write {
                path: self.file_path.clone(),
                source,
            }),
        }
    }
}

/// In-memory credential storage for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already authenticated.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot().clone())
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        *self.slot() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot() = None;
        Ok(())
    }
}
