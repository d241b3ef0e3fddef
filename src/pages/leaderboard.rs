//! Leaderboard Page
//!
//! Team rankings, sorted descending by score. The sort is the only derived
//! computation: it happens after the fetch, in the renderer, and is stable so
//! tied teams keep their API order.

use std::cmp::Ordering;

use leptos::*;

use crate::api;
use crate::components::ResourcePanel;
use crate::models::{format_date, format_number, LeaderboardEntry};
use crate::state::use_resource;

/// Sort entries descending by score; ties keep their original relative order
pub fn rank_by_score(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    entries
}

/// Medal for the top three ranks, `#<n>` below that
pub fn rank_marker(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("#{}", index + 1),
    }
}

/// Row highlight for the podium
fn row_class(index: usize) -> &'static str {
    match index {
        0 => "border-t border-gray-700 bg-green-900/30",
        1 => "border-t border-gray-700 bg-blue-900/30",
        2 => "border-t border-gray-700 bg-yellow-900/30",
        _ => "border-t border-gray-700 hover:bg-gray-700/50 transition-colors",
    }
}

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_resource(api::fetch_leaderboard);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Leaderboard"</h1>
                <p class="text-gray-400 mt-1">"Compete with your team and climb the rankings"</p>
            </div>

            <ResourcePanel
                state=state
                loading_label="Loading leaderboard..."
                empty_message="No leaderboard data found. Please check the backend API."
                render={|entries: Vec<LeaderboardEntry>| view! {
                    <RankingTable entries=rank_by_score(entries) />
                }}
            />
        </div>
    }
}

/// Table of ranked teams
#[component]
fn RankingTable(entries: Vec<LeaderboardEntry>) -> impl IntoView {
    let count = entries.len();

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="bg-red-700 px-4 py-3">
                <h5 class="font-semibold">{format!("Team Rankings ({})", count)}</h5>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                        <tr>
                            <th class="px-4 py-3 text-center w-20">"Rank"</th>
                            <th class="px-4 py-3">"Team"</th>
                            <th class="px-4 py-3 text-center">"Score"</th>
                            <th class="px-4 py-3">"Week"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {entries.into_iter().enumerate().map(|(index, entry)| view! {
                            <tr class=row_class(index)>
                                <td class="px-4 py-3 text-center text-xl">
                                    {rank_marker(index)}
                                </td>
                                <td class="px-4 py-3 font-semibold">{entry.team}</td>
                                <td class="px-4 py-3 text-center">
                                    <span class="bg-primary-600 font-semibold px-3 py-1 rounded-full">
                                        {format_number(entry.score)}
                                    </span>
                                </td>
                                <td class="px-4 py-3 text-gray-400">
                                    {format_date(entry.week.as_deref())}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(team: &str, score: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            team: team.to_string(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorts_descending_by_score() {
        let ranked = rank_by_score(vec![entry("a", 10.0), entry("b", 50.0), entry("c", 30.0)]);
        let scores: Vec<f64> = ranked.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let ranked = rank_by_score(vec![entry("first", 50.0), entry("second", 50.0)]);
        assert_eq!(ranked[0].team, "first");
        assert_eq!(ranked[1].team, "second");
    }

    #[test]
    fn test_rank_markers() {
        assert_eq!(rank_marker(0), "🥇");
        assert_eq!(rank_marker(1), "🥈");
        assert_eq!(rank_marker(2), "🥉");
        assert_eq!(rank_marker(3), "#4");
    }
}
