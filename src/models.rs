//! API Record Types
//!
//! The five resource collections served by the OctoFit API. Records are
//! displayed verbatim; every field carries a serde default so a sparse
//! backend response never fails to decode.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder glyph for absent values
pub const PLACEHOLDER: &str = "—";

/// Record identifier, served as a Mongo-style string or a plain number
/// depending on the backend flavor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordId(String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str(PLACEHOLDER)
        } else {
            f.write_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(RecordId(s)),
            Value::Number(n) => Ok(RecordId(n.to_string())),
            Value::Null => Ok(RecordId::default()),
            other => Err(serde::de::Error::custom(format!(
                "invalid record id: {}",
                other
            ))),
        }
    }
}

/// A registered user
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A team and its member references (only the member count is displayed)
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: Vec<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A logged fitness activity
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub date: Option<String>,
}

/// A suggested workout
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Workout {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub suggested_for: Vec<Value>,
}

/// One leaderboard row
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub week: Option<String>,
}

// ============ Display Helpers ============

/// Render an optional text field, substituting the placeholder glyph
pub fn text_or_dash(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a backend date string for display.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else
/// non-empty falls through verbatim, absent values render the placeholder.
pub fn format_date(value: Option<&str>) -> String {
    let raw = match value {
        Some(s) if !s.is_empty() => s,
        _ => return PLACEHOLDER.to_string(),
    };

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

/// Format a numeric field; integral values render without a decimal point
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_from_string_or_number() {
        let from_string: RecordId = serde_json::from_value(json!("65a1f2")).unwrap();
        assert_eq!(from_string.to_string(), "65a1f2");

        let from_number: RecordId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(from_number.to_string(), "42");
    }

    #[test]
    fn test_record_id_rejects_composite() {
        let result: Result<RecordId, _> = serde_json::from_value(json!({"oid": "65a1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_tolerates_missing_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "username": "octocat",
            "email": "octocat@github.com"
        }))
        .unwrap();
        assert_eq!(user.first_name, None);
        assert_eq!(text_or_dash(user.first_name.as_deref()), PLACEHOLDER);
    }

    #[test]
    fn test_team_member_count() {
        let team: Team = serde_json::from_value(json!({
            "id": 1,
            "name": "Blue Team",
            "members": ["u1", "u2", "u3"]
        }))
        .unwrap();
        assert_eq!(team.members.len(), 3);
        assert_eq!(team.created_at, None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(Some("2026-08-24T09:30:00+00:00")),
            "Aug 24, 2026"
        );
        assert_eq!(format_date(Some("2026-08-24")), "Aug 24, 2026");
        assert_eq!(format_date(Some("next tuesday")), "next tuesday");
        assert_eq!(format_date(Some("")), PLACEHOLDER);
        assert_eq!(format_date(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(45.0), "45");
        assert_eq!(format_number(12.5), "12.5");
    }
}
