//! HTTP API Client
//!
//! Functions for communicating with the OctoFit REST API.
//!
//! The base URL is resolved from a GitHub Codespace name baked in at build
//! time (`CODESPACE_NAME`), falling back to a local development server. A
//! `localStorage` entry can override both. Responses are normalized so that
//! both a bare JSON array and a DRF-style paginated envelope
//! (`{"results": [...]}`) decode to the same record list.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::FetchError;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};

/// Default API base URL for local development
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// localStorage key overriding the resolved base URL
pub const API_BASE_STORAGE_KEY: &str = "octofit_api_url";

/// Resolve the API base URL from an optional Codespace name.
///
/// The name is not validated; a malformed value simply yields a malformed URL.
pub fn resolve_api_base(codespace: Option<&str>) -> String {
    match codespace {
        Some(name) => format!("https://{}-8000.app.github.dev", name),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Get the API base URL from local storage or the build-time Codespace name
pub fn api_base() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                // Normalize: remove trailing slash
                return url.trim_end_matches('/').to_string();
            }
        }
    }
    resolve_api_base(option_env!("CODESPACE_NAME"))
}

/// Build the collection URL for a resource (trailing slash kept, Django-style)
fn endpoint_url(base: &str, resource: &str) -> String {
    format!("{}/api/{}/", base, resource)
}

/// Unwrap the paginated envelope and coerce the payload to a record list.
///
/// An object with a `results` field yields that field, a bare array yields its
/// elements, and anything else yields an empty list. A non-array payload is
/// the documented empty-state, not an error.
fn normalize_payload(value: Value) -> Vec<Value> {
    let list = match value {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) => results,
            None => Value::Object(map),
        },
        other => other,
    };
    match list {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Decode a normalized payload into typed records
fn decode_records<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, FetchError> {
    normalize_payload(payload)
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(|e| FetchError::Decode(e.to_string())))
        .collect()
}

/// Fetch one resource collection and decode it
async fn fetch_resource<T: DeserializeOwned>(resource: &str) -> Result<Vec<T>, FetchError> {
    let url = endpoint_url(&api_base(), resource);
    web_sys::console::log_1(&format!("Fetching {} from: {}", resource, url).into());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpStatus(response.status()));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    decode_records(payload)
}

// ============ Resource Functions ============

/// Fetch all registered users
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    fetch_resource("users").await
}

/// Fetch all teams
pub async fn fetch_teams() -> Result<Vec<Team>, FetchError> {
    fetch_resource("teams").await
}

/// Fetch the activity log
pub async fn fetch_activities() -> Result<Vec<Activity>, FetchError> {
    fetch_resource("activities").await
}

/// Fetch suggested workouts
pub async fn fetch_workouts() -> Result<Vec<Workout>, FetchError> {
    fetch_resource("workouts").await
}

/// Fetch the team leaderboard
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, FetchError> {
    fetch_resource("leaderboard").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_api_base_codespace() {
        assert_eq!(
            resolve_api_base(Some("fuzzy-disco")),
            "https://fuzzy-disco-8000.app.github.dev"
        );
    }

    #[test]
    fn test_resolve_api_base_local() {
        assert_eq!(resolve_api_base(None), "http://localhost:8000");
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:8000", "leaderboard"),
            "http://localhost:8000/api/leaderboard/"
        );
    }

    #[test]
    fn test_normalize_bare_array() {
        let items = normalize_payload(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_normalize_envelope() {
        let items = normalize_payload(json!({
            "count": 2,
            "next": null,
            "results": [{"id": "a"}, {"id": "b"}]
        }));
        assert_eq!(items, vec![json!({"id": "a"}), json!({"id": "b"})]);
    }

    #[test]
    fn test_normalize_empty_envelope() {
        assert!(normalize_payload(json!({"results": []})).is_empty());
    }

    #[test]
    fn test_normalize_non_array_coerces_to_empty() {
        assert!(normalize_payload(json!("oops")).is_empty());
        assert!(normalize_payload(json!(42)).is_empty());
        assert!(normalize_payload(json!({"detail": "not found"})).is_empty());
        assert!(normalize_payload(json!({"results": {"nested": true}})).is_empty());
        assert!(normalize_payload(json!(null)).is_empty());
    }

    #[test]
    fn test_decode_users_bare_array() {
        let users: Vec<User> = decode_records(json!([
            {"id": 1, "username": "octocat", "email": "octocat@github.com"},
            {"id": 2, "username": "hubber", "email": "hubber@github.com"}
        ]))
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "octocat");
        assert_eq!(users[1].first_name, None);
    }

    #[test]
    fn test_decode_users_envelope() {
        let users: Vec<User> = decode_records(json!({
            "results": [{"id": "65a1", "username": "octocat", "email": "octocat@github.com"}]
        }))
        .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id.to_string(), "65a1");
    }

    #[test]
    fn test_decode_rejects_mismatched_record() {
        let result: Result<Vec<User>, _> =
            decode_records(json!([{"id": 1, "username": ["not", "a", "string"]}]));
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::HttpStatus(500).to_string(),
            "HTTP error! status: 500"
        );
        assert!(FetchError::Network("connection refused".into())
            .to_string()
            .starts_with("Network error"));
    }
}
