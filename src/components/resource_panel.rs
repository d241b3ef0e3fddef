//! Resource Panel Component
//!
//! The single generic fetch-and-render body shared by all five resource
//! pages. It matches on the page's `ViewMode` and renders exactly one of the
//! four blocks: spinner, error banner, empty banner, or the page-specific
//! markup produced by `render`.

use leptos::*;

use crate::components::{EmptyBanner, ErrorBanner, Loading};
use crate::state::{ResourceState, ViewMode};

/// Fetch-lifecycle body of a resource page
#[component]
pub fn ResourcePanel<T, F, IV>(
    /// Fetch state owned by the enclosing page
    state: ResourceState<T>,
    /// Caption under the loading spinner
    #[prop(into)]
    loading_label: String,
    /// Message inside the empty-state banner
    #[prop(into)]
    empty_message: String,
    /// Renders the populated view from the fetched records
    render: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(Vec<T>) -> IV + 'static,
    IV: IntoView,
{
    view! {
        {move || match state.mode() {
            ViewMode::Loading => view! {
                <Loading label=loading_label.clone() />
            }.into_view(),
            ViewMode::Error(message) => view! {
                <ErrorBanner message=message />
            }.into_view(),
            ViewMode::Empty => view! {
                <EmptyBanner message=empty_message.clone() />
            }.into_view(),
            ViewMode::Ready => render(state.items.get()).into_view(),
        }}
    }
}
