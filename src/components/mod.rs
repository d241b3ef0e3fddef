//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod banner;
pub mod loading;
pub mod nav;
pub mod resource_panel;

pub use banner::{EmptyBanner, ErrorBanner};
pub use loading::Loading;
pub use nav::Nav;
pub use resource_panel::ResourcePanel;
