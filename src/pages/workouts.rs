//! Workouts Page
//!
//! Card grid of suggested workouts, color-coded by difficulty.

use leptos::*;

use crate::api;
use crate::components::ResourcePanel;
use crate::models::{text_or_dash, Workout};
use crate::state::use_resource;

/// Difficulty category of a workout. Labels are matched case-insensitively;
/// anything unrecognized or missing falls into the neutral `Other` bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl Difficulty {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::to_lowercase).as_deref() {
            Some("easy") => Difficulty::Easy,
            Some("medium") => Difficulty::Medium,
            Some("hard") => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }

    fn header_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "bg-green-700",
            Difficulty::Medium => "bg-yellow-600 text-gray-900",
            Difficulty::Hard => "bg-red-700",
            Difficulty::Other => "bg-gray-600",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "bg-green-800 text-green-100",
            Difficulty::Medium => "bg-yellow-700 text-yellow-100",
            Difficulty::Hard => "bg-red-800 text-red-100",
            Difficulty::Other => "bg-gray-600 text-gray-200",
        }
    }
}

/// Workouts page component
#[component]
pub fn Workouts() -> impl IntoView {
    let state = use_resource(api::fetch_workouts);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Workouts"</h1>
                <p class="text-gray-400 mt-1">"Explore personalized workout suggestions"</p>
            </div>

            <ResourcePanel
                state=state
                loading_label="Loading workouts..."
                empty_message="No workouts found. Please check the backend API."
                render={|workouts: Vec<Workout>| view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {workouts.into_iter().map(|workout| view! {
                            <WorkoutCard workout=workout />
                        }).collect_view()}
                    </div>
                }}
            />
        </div>
    }
}

/// Single workout card
#[component]
fn WorkoutCard(workout: Workout) -> impl IntoView {
    let difficulty = Difficulty::from_label(workout.difficulty.as_deref());
    let suggested_count = workout.suggested_for.len();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors overflow-hidden flex flex-col">
            <div class=format!("{} px-4 py-3", difficulty.header_class())>
                <h5 class="font-semibold">{workout.name}</h5>
            </div>
            <div class="p-4 flex-1 space-y-3">
                <p class="text-gray-400 text-sm">{workout.description}</p>
                <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", difficulty.badge_class())>
                    {text_or_dash(workout.difficulty.as_deref())}
                </span>
                {(suggested_count > 0).then(|| view! {
                    <p class="text-gray-400 text-sm border border-gray-600 rounded px-3 py-2">
                        "Suggested for "
                        <strong>{suggested_count}</strong>
                        {if suggested_count == 1 { " user" } else { " users" }}
                    </p>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_case_insensitive() {
        assert_eq!(Difficulty::from_label(Some("HARD")), Difficulty::Hard);
        assert_eq!(Difficulty::from_label(Some("Easy")), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(Some("medium")), Difficulty::Medium);
    }

    #[test]
    fn test_unrecognized_difficulty_is_neutral() {
        assert_eq!(Difficulty::from_label(Some("extreme")), Difficulty::Other);
        assert_eq!(Difficulty::from_label(Some("")), Difficulty::Other);
        assert_eq!(Difficulty::from_label(None), Difficulty::Other);
    }
}
