//! Users Page
//!
//! Table of all registered users.

use leptos::*;

use crate::api;
use crate::components::ResourcePanel;
use crate::models::{text_or_dash, User};
use crate::state::use_resource;

/// Users page component
#[component]
pub fn Users() -> impl IntoView {
    let state = use_resource(api::fetch_users);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Users"</h1>
                <p class="text-gray-400 mt-1">"Manage and view all registered users"</p>
            </div>

            <ResourcePanel
                state=state
                loading_label="Loading users..."
                empty_message="No users found. Please check the backend API."
                render={|users: Vec<User>| view! { <UserTable users=users /> }}
            />
        </div>
    }
}

/// Table listing every user
#[component]
fn UserTable(users: Vec<User>) -> impl IntoView {
    let count = users.len();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="bg-primary-600 px-4 py-3">
                <h5 class="font-semibold">{format!("User List ({})", count)}</h5>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                        <tr>
                            <th class="px-4 py-3 text-center w-20">"ID"</th>
                            <th class="px-4 py-3">"Username"</th>
                            <th class="px-4 py-3">"Email"</th>
                            <th class="px-4 py-3">"First Name"</th>
                            <th class="px-4 py-3">"Last Name"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {users.into_iter().map(|user| view! {
                            <tr class="border-t border-gray-700 hover:bg-gray-700/50 transition-colors">
                                <td class="px-4 py-3 text-center">
                                    <span class="bg-gray-600 text-xs px-2 py-0.5 rounded-full">
                                        {user.id.to_string()}
                                    </span>
                                </td>
                                <td class="px-4 py-3 font-semibold">{user.username}</td>
                                <td class="px-4 py-3 text-gray-300">{user.email}</td>
                                <td class="px-4 py-3">{text_or_dash(user.first_name.as_deref())}</td>
                                <td class="px-4 py-3">{text_or_dash(user.last_name.as_deref())}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
