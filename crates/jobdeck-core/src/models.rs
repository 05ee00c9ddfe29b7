//! Domain payload shapes exchanged with the tracker API.
//!
//! The façade treats payloads as opaque JSON; these types exist at the store
//! boundary. The server schema is not under client control, so every
//! response-side struct tolerates missing fields via `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// A tracked job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Job {
    pub id: u64,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<String>,
    pub schedule: Option<String>,
    pub application_questions: Option<String>,
    pub work_authorisation: Option<String>,
    pub date_posted: Option<String>,
}

/// Request body for creating a job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_questions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_authorisation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
}

impl NewJob {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: None,
            location: None,
            url: None,
            description: None,
            benefits: None,
            schedule: None,
            application_questions: None,
            work_authorisation: None,
            date_posted: None,
        }
    }
}

/// Partial update for a job listing; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_questions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_authorisation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
}

impl JobUpdate {
    /// True when no field is set; the server rejects empty updates.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.benefits.is_none()
            && self.schedule.is_none()
            && self.application_questions.is_none()
            && self.work_authorisation.is_none()
            && self.date_posted.is_none()
    }
}

/// A stored CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Cv {
    pub id: u64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

/// A saved job bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Bookmark {
    pub id: u64,
    pub user_id: u64,
    pub job_id: u64,
    pub title: Option<String>,
}

/// Request body for creating a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewBookmark {
    pub user_id: u64,
    pub job_id: u64,
}

/// One aggregated analytics row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsEntry {
    pub skill_match_level: String,
    pub location: Option<String>,
    pub count: u64,
}

/// Dashboard summary counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_jobs: u64,
    pub total_cvs: u64,
    pub recent_jobs: Vec<Job>,
}

/// Authenticated user profile.
///
/// The server promises very little here; keep every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserProfile {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Request body for `/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
