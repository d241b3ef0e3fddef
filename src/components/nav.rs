//! Navigation Component
//!
//! Header navigation bar with brand and one link per route. Links are
//! highlighted only on an exact path match, so `/` never lights up alongside
//! a resource page.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏋️"</span>
                        <span class="text-xl font-bold text-white">"OctoFit Tracker"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/users" label="Users" />
                        <NavLink href="/teams" label="Teams" />
                        <NavLink href="/activities" label="Activities" />
                        <NavLink href="/workouts" label="Workouts" />
                        <NavLink href="/leaderboard" label="Leaderboard" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
