//! API Layer
//!
//! Endpoint resolution and resource fetching for the OctoFit REST API.

pub mod client;
pub mod error;

pub use client::{
    fetch_activities, fetch_leaderboard, fetch_teams, fetch_users, fetch_workouts,
};
pub use error::FetchError;
