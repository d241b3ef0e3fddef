//! Loading Component
//!
//! Centered spinner shown while a resource fetch is in flight.

use leptos::*;

/// Full-width loading spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| view! {
                <p class="mt-3 text-sm">{text}</p>
            })}
        </div>
    }
}
