//! Home Page
//!
//! Static welcome view; the only route that fetches nothing.

use leptos::*;
use leptos_router::*;

/// Welcome page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            // Hero
            <section class="bg-gray-800 rounded-xl p-8 md:p-12">
                <div class="flex flex-col lg:flex-row items-center gap-8">
                    <div class="flex-1">
                        <h1 class="text-4xl font-bold mb-4">"Welcome to OctoFit Tracker"</h1>
                        <p class="text-xl text-gray-300 mb-4">
                            "Track your fitness activities, join teams, and compete on the leaderboard!"
                        </p>
                        <p class="text-gray-400 mb-6">
                            "Use the navigation menu above to explore different sections of the app."
                        </p>
                        <div class="flex flex-wrap gap-3">
                            <A
                                href="/users"
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "View Users"
                            </A>
                            <A
                                href="/leaderboard"
                                class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                            >
                                "See Rankings"
                            </A>
                        </div>
                    </div>
                    <div class="text-center hidden lg:block">
                        <div class="text-8xl mb-3">"🏆"</div>
                        <p class="text-gray-400">"Join the fitness revolution"</p>
                    </div>
                </div>
            </section>

            // Feature overview
            <section class="grid grid-cols-2 md:grid-cols-4 gap-6">
                <FeatureCard icon="👥" title="Track Users" blurb="Manage all registered users" />
                <FeatureCard icon="👨‍👩‍👧‍👦" title="Create Teams" blurb="Build and manage teams" />
                <FeatureCard icon="⚡" title="Log Activities" blurb="Record fitness activities" />
                <FeatureCard icon="🏅" title="Compete" blurb="Climb the leaderboard" />
            </section>
        </div>
    }
}

/// One feature blurb on the welcome page
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl mb-2">{icon}</div>
            <h5 class="font-semibold mb-1">{title}</h5>
            <p class="text-gray-400 text-sm">{blurb}</p>
        </div>
    }
}
