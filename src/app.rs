//! App Root Component
//!
//! Main application component with routing and the page chrome.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/users" view=Users />
                        <Route path="/teams" view=Teams />
                        <Route path="/activities" view=Activities />
                        <Route path="/workouts" view=Workouts />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with brand blurb and quick links
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between gap-4 text-sm">
                <div>
                    <h6 class="font-semibold text-white mb-1">"OctoFit Tracker"</h6>
                    <p class="text-gray-400">
                        "Your ultimate fitness tracking and team competition platform."
                    </p>
                </div>

                <div class="flex items-center space-x-4 text-gray-400">
                    <A href="/users" class="hover:text-white transition-colors">"Users"</A>
                    <A href="/teams" class="hover:text-white transition-colors">"Teams"</A>
                    <A href="/activities" class="hover:text-white transition-colors">"Activities"</A>
                    <A href="/workouts" class="hover:text-white transition-colors">"Workouts"</A>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
