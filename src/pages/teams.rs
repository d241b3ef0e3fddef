//! Teams Page
//!
//! Table of all teams with their member counts.

use leptos::*;

use crate::api;
use crate::components::ResourcePanel;
use crate::models::{format_date, Team};
use crate::state::use_resource;

/// Teams page component
#[component]
pub fn Teams() -> impl IntoView {
    let state = use_resource(api::fetch_teams);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Teams"</h1>
                <p class="text-gray-400 mt-1">"Manage and view all teams"</p>
            </div>

            <ResourcePanel
                state=state
                loading_label="Loading teams..."
                empty_message="No teams found. Please check the backend API."
                render={|teams: Vec<Team>| view! { <TeamTable teams=teams /> }}
            />
        </div>
    }
}

/// Table listing every team
#[component]
fn TeamTable(teams: Vec<Team>) -> impl IntoView {
    let count = teams.len();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="bg-green-700 px-4 py-3">
                <h5 class="font-semibold">{format!("Team List ({})", count)}</h5>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                        <tr>
                            <th class="px-4 py-3 text-center w-20">"ID"</th>
                            <th class="px-4 py-3">"Team Name"</th>
                            <th class="px-4 py-3 text-center">"Members"</th>
                            <th class="px-4 py-3">"Created At"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {teams.into_iter().map(|team| view! {
                            <tr class="border-t border-gray-700 hover:bg-gray-700/50 transition-colors">
                                <td class="px-4 py-3 text-center">
                                    <span class="bg-green-800 text-xs px-2 py-0.5 rounded-full">
                                        {team.id.to_string()}
                                    </span>
                                </td>
                                <td class="px-4 py-3 font-semibold">{team.name}</td>
                                <td class="px-4 py-3 text-center">
                                    <span class="bg-blue-800 text-blue-100 text-xs px-2 py-0.5 rounded-full">
                                        {team.members.len()}
                                    </span>
                                </td>
                                <td class="px-4 py-3 text-gray-400">
                                    {format_date(team.created_at.as_deref())}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
