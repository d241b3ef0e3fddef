//! OctoFit Dashboard
//!
//! Fitness tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Browse registered users, teams, and logged activities
//! - Explore suggested workouts by difficulty
//! - Team leaderboard with weekly rankings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a read-only view over the OctoFit REST API: every page
//! fetches its resource once on mount and renders through a shared
//! loading/error/empty/data lifecycle.

use leptos::*;

mod api;
mod app;
mod components;
mod models;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
