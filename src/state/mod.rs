//! State Management
//!
//! Per-view fetch state and the shared fetch-on-mount lifecycle.

pub mod fetch;

pub use fetch::{use_resource, ResourceState, ViewMode};
