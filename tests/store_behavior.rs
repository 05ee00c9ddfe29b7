//! Behavior-driven tests for the per-entity stores.
//!
//! Stores are the façade's consumers: they branch on `ok` alone, share the
//! freshness policy, and own the credential lifecycle reactions.

use std::sync::Arc;

use serde_json::json;

use jobdeck_core::stores::freshness::FetchMode;
use jobdeck_core::{
    AnalyticsStore, BookmarksStore, CredentialStore, CvsStore, DashboardStore, HttpResponse,
    JobsStore, MemoryCredentialStore, NewJob, StoreError, UserStore,
};
use jobdeck_tests::{scripted_api, ScriptedHttpClient};

// =============================================================================
// Freshness policy across stores
// =============================================================================

#[tokio::test]
async fn second_jobs_listing_is_served_from_the_loaded_slot() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"[{"id":1,"title":"Engineer"}]"#));
    let store = JobsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let first = store.list(FetchMode::Use).await.expect("first list");
    let second = store.list(FetchMode::Use).await.expect("second list");

    assert_eq!(first, second);
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn refresh_mode_hits_the_transport_again() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"[{"id":1,"title":"Engineer"}]"#));
    http.push_response(HttpResponse::ok_json(
        r#"[{"id":1,"title":"Engineer"},{"id":2,"title":"Analyst"}]"#,
    ));
    let store = JobsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let first = store.list(FetchMode::Use).await.expect("first list");
    let refreshed = store.list(FetchMode::Refresh).await.expect("refresh");

    assert_eq!(first.len(), 1);
    assert_eq!(refreshed.len(), 2);
    assert_eq!(http.request_count(), 2);
}

#[tokio::test]
async fn cvs_listing_shares_the_same_freshness_policy() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"[{"id":5,"title":"Default CV"}]"#));
    let store = CvsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    store.list(FetchMode::Use).await.expect("first list");
    store.list(FetchMode::Use).await.expect("second list");

    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn adding_a_job_invalidates_the_loaded_listing() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"[{"id":1,"title":"Engineer"}]"#));
    http.push_response(HttpResponse::with_status(
        201,
        r#"{"message":"Job added successfully!"}"#,
    ));
    http.push_response(HttpResponse::ok_json(
        r#"[{"id":1,"title":"Engineer"},{"id":2,"title":"Analyst"}]"#,
    ));
    let store = JobsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    store.list(FetchMode::Use).await.expect("seed listing");
    let message = store.add(&NewJob::new("Analyst")).await.expect("add job");
    let listing = store.list(FetchMode::Use).await.expect("relisted");

    assert_eq!(message, "Job added successfully!");
    assert_eq!(listing.len(), 2);
    assert_eq!(http.request_count(), 3);
}

// =============================================================================
// Store error surface
// =============================================================================

#[tokio::test]
async fn failed_listing_surfaces_the_payload_message() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::with_status(
        500,
        r#"{"message":"Database error"}"#,
    ));
    let store = JobsStore::new(scripted_api(http, Arc::new(MemoryCredentialStore::new())));

    let error = store.list(FetchMode::Use).await.expect_err("must fail");

    match error {
        StoreError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failed_listing_leaves_the_slot_empty_for_a_retry() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::with_status(500, ""));
    http.push_response(HttpResponse::ok_json(r#"[{"id":1,"title":"Engineer"}]"#));
    let store = JobsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    store
        .list(FetchMode::Use)
        .await
        .expect_err("first attempt fails");
    let retried = store.list(FetchMode::Use).await.expect("retry succeeds");

    assert_eq!(retried.len(), 1);
    assert_eq!(http.request_count(), 2);
}

// =============================================================================
// Bookmarks: mutations re-fetch the listing
// =============================================================================

#[tokio::test]
async fn adding_a_bookmark_returns_the_refreshed_listing() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::with_status(201, r#"{"message":"saved"}"#));
    http.push_response(HttpResponse::ok_json(
        r#"[{"id":1,"user_id":42,"job_id":7}]"#,
    ));
    let store =
        BookmarksStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let bookmarks = store.add(42, 7).await.expect("add bookmark");

    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].job_id, 7);

    let requests = http.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "http://api.test/bookmarks");
    assert_eq!(requests[1].url, "http://api.test/bookmarks/42");
}

#[tokio::test]
async fn removing_a_bookmark_returns_the_refreshed_listing() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"{"message":"removed"}"#));
    http.push_response(HttpResponse::ok_json("[]"));
    let store =
        BookmarksStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let bookmarks = store.remove(9, 42).await.expect("remove bookmark");

    assert!(bookmarks.is_empty());
    let requests = http.recorded_requests();
    assert_eq!(requests[0].url, "http://api.test/bookmarks/9");
    assert_eq!(requests[1].url, "http://api.test/bookmarks/42");
}

#[tokio::test]
async fn rejected_bookmark_add_skips_the_refetch() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::with_status(
        409,
        r#"{"message":"already bookmarked"}"#,
    ));
    let store =
        BookmarksStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let error = store.add(42, 7).await.expect_err("conflict must surface");

    assert_eq!(error.status(), Some(409));
    assert_eq!(http.request_count(), 1);
}

// =============================================================================
// Analytics views
// =============================================================================

fn analytics_body() -> String {
    json!([
        { "skill_match_level": "high", "location": "Berlin", "count": 3 },
        { "skill_match_level": "high", "location": "Remote", "count": 2 },
        { "skill_match_level": "low", "location": "Berlin", "count": 5 }
    ])
    .to_string()
}

#[tokio::test]
async fn analytics_views_filter_without_refetching() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(analytics_body()));
    let store =
        AnalyticsStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let high = store
        .by_skill_match("high", FetchMode::Use)
        .await
        .expect("by skill match");
    let berlin = store
        .by_location("Berlin", FetchMode::Use)
        .await
        .expect("by location");

    assert_eq!(high.len(), 2);
    assert_eq!(berlin.len(), 2);
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn analytics_summary_totals_counts_per_level() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(analytics_body()));
    let store = AnalyticsStore::new(scripted_api(http, Arc::new(MemoryCredentialStore::new())));

    let summary = store.summary(FetchMode::Use).await.expect("summary");

    assert_eq!(summary.get("high").copied(), Some(5));
    assert_eq!(summary.get("low").copied(), Some(5));
}

// =============================================================================
// Dashboard: authentication guard
// =============================================================================

#[tokio::test]
async fn dashboard_refuses_without_a_credential_and_makes_no_request() {
    let http = Arc::new(ScriptedHttpClient::new());
    let store =
        DashboardStore::new(scripted_api(http.clone(), Arc::new(MemoryCredentialStore::new())));

    let error = store.summary().await.expect_err("must refuse");

    assert!(matches!(error, StoreError::NotAuthenticated));
    assert_eq!(http.request_count(), 0);
}

#[tokio::test]
async fn dashboard_summary_decodes_counters_and_recent_jobs() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(
        r#"{"total_jobs":12,"total_cvs":2,"recent_jobs":[{"id":1,"title":"Engineer"}]}"#,
    ));
    let store = DashboardStore::new(scripted_api(
        http,
        Arc::new(MemoryCredentialStore::with_token("tok")),
    ));

    let summary = store.summary().await.expect("summary");

    assert_eq!(summary.total_jobs, 12);
    assert_eq!(summary.total_cvs, 2);
    assert_eq!(summary.recent_jobs.len(), 1);
}

// =============================================================================
// Session lifecycle across stores
// =============================================================================

#[tokio::test]
async fn login_then_authenticated_fetch_then_logout_round_trip() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::ok_json(r#"{"access_token":"tok-7"}"#));
    http.push_response(HttpResponse::ok_json(r#"{"message":"This is a protected route"}"#));
    let credentials = Arc::new(MemoryCredentialStore::new());
    let api = scripted_api(http.clone(), credentials.clone());
    let user = UserStore::new(api);

    user.login("a@example.test", "hunter2").await.expect("login");
    assert!(user.is_authenticated().expect("auth check"));

    let profile = user.profile().await.expect("profile");
    assert_eq!(profile.message.as_deref(), Some("This is a protected route"));

    let requests = http.recorded_requests();
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(
        requests[1].headers.get("authorization").map(String::as_str),
        Some("Bearer tok-7")
    );

    user.logout().await.expect("logout");
    assert_eq!(credentials.load().unwrap(), None);
}

#[tokio::test]
async fn expired_session_is_dropped_when_profile_sees_401() {
    let http = Arc::new(ScriptedHttpClient::new());
    http.push_response(HttpResponse::with_status(
        401,
        r#"{"message":"Token has expired"}"#,
    ));
    let credentials = Arc::new(MemoryCredentialStore::with_token("stale"));
    let user = UserStore::new(scripted_api(http, credentials.clone()));

    let error = user.profile().await.expect_err("401 must surface");

    assert_eq!(error.status(), Some(401));
    assert_eq!(credentials.load().unwrap(), None);
}
