//! Activities Page
//!
//! Log of all recorded fitness activities.

use leptos::*;

use crate::api;
use crate::components::ResourcePanel;
use crate::models::{format_date, format_number, Activity};
use crate::state::use_resource;

/// Activities page component
#[component]
pub fn Activities() -> impl IntoView {
    let state = use_resource(api::fetch_activities);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Activities"</h1>
                <p class="text-gray-400 mt-1">"Track all fitness activities and workouts"</p>
            </div>

            <ResourcePanel
                state=state
                loading_label="Loading activities..."
                empty_message="No activities found. Please check the backend API."
                render={|activities: Vec<Activity>| view! { <ActivityTable activities=activities /> }}
            />
        </div>
    }
}

/// Table listing every logged activity
#[component]
fn ActivityTable(activities: Vec<Activity>) -> impl IntoView {
    let count = activities.len();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="bg-yellow-600 px-4 py-3 text-gray-900">
                <h5 class="font-semibold">{format!("Activity Log ({})", count)}</h5>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                        <tr>
                            <th class="px-4 py-3 text-center w-20">"ID"</th>
                            <th class="px-4 py-3">"User"</th>
                            <th class="px-4 py-3">"Activity Type"</th>
                            <th class="px-4 py-3 text-center">"Duration (min)"</th>
                            <th class="px-4 py-3 text-center">"Calories"</th>
                            <th class="px-4 py-3">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {activities.into_iter().map(|activity| view! {
                            <tr class="border-t border-gray-700 hover:bg-gray-700/50 transition-colors">
                                <td class="px-4 py-3 text-center">
                                    <span class="bg-yellow-700 text-xs px-2 py-0.5 rounded-full">
                                        {activity.id.to_string()}
                                    </span>
                                </td>
                                <td class="px-4 py-3">{activity.user}</td>
                                <td class="px-4 py-3">
                                    <span class="bg-gray-600 text-xs px-2 py-0.5 rounded-full capitalize">
                                        {activity.activity_type}
                                    </span>
                                </td>
                                <td class="px-4 py-3 text-center font-semibold">
                                    {format_number(activity.duration)}
                                </td>
                                <td class="px-4 py-3 text-center font-semibold text-red-400">
                                    {format_number(activity.calories)}
                                </td>
                                <td class="px-4 py-3 text-gray-400">
                                    {format_date(activity.date.as_deref())}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
