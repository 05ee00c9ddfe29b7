//! CLI argument definitions for jobdeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `register` | Create a new account |
//! | `login` | Authenticate and persist the session |
//! | `logout` | Drop the persisted session |
//! | `profile` | Show the authenticated profile |
//! | `jobs` | List and manage job listings |
//! | `cvs` | List stored CVs |
//! | `bookmarks` | List and manage job bookmarks |
//! | `analytics` | Job analytics views |
//! | `dashboard` | Dashboard summary |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | env/`http://127.0.0.1:5000` | API base endpoint |
//! | `--timeout-ms` | `3000` | Request timeout in ms |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Job-application tracker CLI
///
/// Track job listings, CVs, and bookmarks against a jobdeck API server.
/// The session credential obtained via `login` is persisted and attached
/// to every subsequent request until `logout`.
#[derive(Debug, Parser)]
#[command(
    name = "jobdeck",
    author,
    version,
    about = "Job-application tracker CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// API base endpoint; overrides `JOBDECK_BASE_URL`.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON value output.
    Json,
    /// ASCII table format for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new account.
    Register(RegisterArgs),

    /// Authenticate and persist the session credential.
    Login(LoginArgs),

    /// Drop the persisted session credential.
    Logout,

    /// Show the authenticated user profile.
    Profile,

    /// List and manage job listings.
    Jobs(JobsArgs),

    /// List stored CVs.
    Cvs(CvsArgs),

    /// List and manage job bookmarks.
    Bookmarks(BookmarksArgs),

    /// Job analytics views.
    Analytics(AnalyticsArgs),

    /// Dashboard summary counters (requires login).
    Dashboard,
}

/// Arguments for the `register` command.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Display name for the new account.
    #[arg(long)]
    pub name: String,

    /// Email address used to log in.
    #[arg(long)]
    pub email: String,

    /// Account password.
    #[arg(long)]
    pub password: String,
}

/// Arguments for the `login` command.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Account password.
    #[arg(long)]
    pub password: String,
}

/// Arguments for the `jobs` command group.
#[derive(Debug, Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Job listing subcommands.
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List job listings.
    List {
        /// Re-fetch even if the listing is already loaded.
        #[arg(long, default_value_t = false)]
        refresh: bool,
    },

    /// Show a single job by id.
    Show {
        /// Job id.
        id: u64,
    },

    /// Add a job listing.
    Add(JobFieldArgs),

    /// Update fields of an existing job listing.
    Update {
        /// Job id.
        id: u64,

        #[command(flatten)]
        fields: JobUpdateArgs,
    },

    /// Delete a job listing.
    Remove {
        /// Job id.
        id: u64,
    },
}

/// Job fields accepted when creating a listing.
#[derive(Debug, Args)]
pub struct JobFieldArgs {
    /// Job title.
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub benefits: Option<String>,

    #[arg(long)]
    pub schedule: Option<String>,

    #[arg(long)]
    pub application_questions: Option<String>,

    #[arg(long)]
    pub work_authorisation: Option<String>,

    #[arg(long)]
    pub date_posted: Option<String>,
}

/// Job fields accepted when updating a listing; all optional.
#[derive(Debug, Args)]
pub struct JobUpdateArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub benefits: Option<String>,

    #[arg(long)]
    pub schedule: Option<String>,

    #[arg(long)]
    pub application_questions: Option<String>,

    #[arg(long)]
    pub work_authorisation: Option<String>,

    #[arg(long)]
    pub date_posted: Option<String>,
}

/// Arguments for the `cvs` command group.
#[derive(Debug, Args)]
pub struct CvsArgs {
    #[command(subcommand)]
    pub command: CvsCommand,
}

/// CV subcommands.
#[derive(Debug, Subcommand)]
pub enum CvsCommand {
    /// List stored CVs.
    List {
        /// Re-fetch even if the listing is already loaded.
        #[arg(long, default_value_t = false)]
        refresh: bool,
    },
}

/// Arguments for the `bookmarks` command group.
#[derive(Debug, Args)]
pub struct BookmarksArgs {
    #[command(subcommand)]
    pub command: BookmarksCommand,
}

/// Bookmark subcommands.
#[derive(Debug, Subcommand)]
pub enum BookmarksCommand {
    /// List a user's bookmarks.
    List {
        /// Owning user id.
        user_id: u64,
    },

    /// Bookmark a job for a user.
    Add {
        /// Owning user id.
        user_id: u64,

        /// Job id to bookmark.
        job_id: u64,
    },

    /// Remove a bookmark.
    Remove {
        /// Bookmark id.
        id: u64,

        /// Owning user id (used to refresh the listing).
        user_id: u64,
    },
}

/// Arguments for the `analytics` command group.
#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: AnalyticsCommand,
}

/// Analytics subcommands.
#[derive(Debug, Subcommand)]
pub enum AnalyticsCommand {
    /// List analytics rows, optionally filtered.
    List {
        /// Only rows with this skill-match level.
        #[arg(long)]
        skill_match: Option<String>,

        /// Only rows with this location.
        #[arg(long)]
        location: Option<String>,

        /// Re-fetch even if the rows are already loaded.
        #[arg(long, default_value_t = false)]
        refresh: bool,
    },

    /// Total count per skill-match level.
    Summary,
}
