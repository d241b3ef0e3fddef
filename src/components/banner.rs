//! Alert Banners
//!
//! Error and empty-state banners shared by every resource page.

use leptos::*;

/// Red banner shown when a fetch failed
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3" role="alert">
            <span class="text-lg">"✕"</span>
            <span>
                <strong class="font-semibold">"Error! "</strong>
                {message}
            </span>
        </div>
    }
}

/// Blue banner shown when a fetch succeeded but returned no records
#[component]
pub fn EmptyBanner(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-blue-900/40 border border-blue-700 text-blue-200 rounded-lg px-4 py-3" role="alert">
            <span class="text-lg">"ℹ"</span>
            <span>
                <strong class="font-semibold">"No data available"</strong>
                " - "
                {message}
            </span>
        </div>
    }
}
