//! Assignments Page
//!
//! Filterable assignment list with inline progress editing.

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::{
    assignment_position, clamp_progress, upcoming_assignments, AppState, Assignment,
};

/// The "Upcoming" filter looks further ahead than the dashboard
const UPCOMING_FILTER_DAYS: i64 = 30;

#[derive(Clone, Copy, PartialEq)]
enum Filter {
    All,
    Upcoming,
    InProgress,
    Completed,
}

/// Apply the selected filter, then sort by due date ascending. Assignments
/// with unparseable due dates sort first.
fn apply_filter(assignments: &[Assignment], filter: Filter, today: NaiveDate) -> Vec<Assignment> {
    let mut filtered = match filter {
        Filter::All => assignments.to_vec(),
        Filter::Upcoming => upcoming_assignments(assignments, today, UPCOMING_FILTER_DAYS),
        Filter::InProgress => assignments
            .iter()
            .filter(|a| a.progress > 0.0 && a.progress < 100.0)
            .cloned()
            .collect(),
        Filter::Completed => assignments
            .iter()
            .filter(|a| a.progress >= 100.0)
            .cloned()
            .collect(),
    };

    filtered.sort_by_key(Assignment::due);
    filtered
}

/// Badge styling per assignment type
fn badge_class(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "exam" | "midterm" | "final" => "bg-red-600 text-white",
        "quiz" => "bg-yellow-600 text-white",
        "project" => "bg-purple-600 text-white",
        "lab" => "bg-blue-600 text-white",
        _ => "bg-gray-600 text-gray-200",
    }
}

/// Assignments page component
#[component]
pub fn Assignments() -> impl IntoView {
    let (filter, set_filter) = create_signal(Filter::All);

    let state = use_context::<AppState>().expect("AppState not found");
    let assignments = state.assignments;

    view! {
        <div class="space-y-8">
            // Header with filter
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Assignments"</h1>
                    <p class="text-gray-400 mt-1">"Track progress across every course"</p>
                </div>

                <select
                    on:change=move |ev| {
                        set_filter.set(match event_target_value(&ev).as_str() {
                            "upcoming" => Filter::Upcoming,
                            "in-progress" => Filter::InProgress,
                            "completed" => Filter::Completed,
                            _ => Filter::All,
                        });
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All"</option>
                    <option value="upcoming">"Upcoming (30 days)"</option>
                    <option value="in-progress">"In Progress"</option>
                    <option value="completed">"Completed"</option>
                </select>
            </div>

            // Assignment list
            <div class="space-y-3">
                {move || {
                    let today = chrono::Utc::now().date_naive();
                    let visible = apply_filter(&assignments.get(), filter.get(), today);

                    if visible.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <div class="text-5xl mb-4">"📋"</div>
                                <p class="text-gray-400">"No assignments found"</p>
                            </div>
                        }.into_view()
                    } else {
                        visible.into_iter().map(|assignment| {
                            view! { <AssignmentCard assignment=assignment /> }
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Single assignment row with a progress editor
#[component]
fn AssignmentCard(assignment: Assignment) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let kind = assignment.kind.clone().unwrap_or_else(|| "Assignment".to_string());
    let badge = badge_class(&kind);
    let progress = assignment.progress;

    let display_name = assignment.name.clone();
    let display_course = assignment.course.clone();
    let name = assignment.name.clone();
    let course = assignment.course.clone();

    let on_progress_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        let Ok(raw) = input.value().trim().parse::<f64>() else {
            return;
        };
        let progress = clamp_progress(raw);

        // Resolve the snapshot position at edit time; (name, course) is the
        // only identity the API offers.
        let Some(index) = assignment_position(&state.assignments.get_untracked(), &name, &course)
        else {
            return;
        };

        let state = state.clone();
        spawn_local(async move {
            match api::update_progress(index, progress).await {
                Ok(outcome) if outcome.success => {
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    state.show_success("Progress updated");
                }
                Ok(outcome) => {
                    state.show_error(
                        &outcome.error.unwrap_or_else(|| "Failed to update progress".to_string()),
                    );
                }
                Err(e) => {
                    state.show_error(&format!("Failed to update progress: {}", e));
                }
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex flex-col md:flex-row md:items-center gap-4">
            <div class="flex-1">
                <div class="flex items-center space-x-2">
                    <span class="font-semibold">{display_name}</span>
                    <span class=format!("text-xs px-2 py-0.5 rounded-full {}", badge)>{kind}</span>
                </div>
                <div class="text-gray-400 text-sm mt-1">
                    {display_course}" • Due: "{assignment.due_date.clone()}
                </div>
                <div class="flex items-center space-x-4 mt-2 text-sm text-gray-400">
                    <span>{format!("Weight: {}%", assignment.weight)}</span>
                    <span>{format!("Hours: {}h", assignment.estimated_hours)}</span>
                </div>
            </div>

            // Progress bar and editor
            <div class="flex items-center space-x-3">
                <div class="w-32 bg-gray-700 rounded-full h-2">
                    <div
                        class="bg-primary-500 rounded-full h-2"
                        style=format!("width: {}%", progress.clamp(0.0, 100.0))
                    />
                </div>
                <span class="text-sm font-medium w-10 text-right">{format!("{}%", progress)}</span>
                <input
                    type="number"
                    min="0"
                    max="100"
                    value=progress.to_string()
                    on:change=on_progress_change
                    class="w-16 bg-gray-700 rounded px-2 py-1 text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(name: &str, due: &str, progress: f64) -> Assignment {
        Assignment {
            name: name.to_string(),
            course: "CS 101".to_string(),
            due_date: due.to_string(),
            progress,
            ..Default::default()
        }
    }

    #[test]
    fn completed_filter_keeps_only_finished_work() {
        let list = vec![
            assignment("Quiz", "2025-10-02", 100.0),
            assignment("Essay", "2025-10-05", 40.0),
            assignment("Lab", "2025-10-01", 0.0),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let visible = apply_filter(&list, Filter::Completed, today);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Quiz");
    }

    #[test]
    fn all_filter_sorts_by_due_date() {
        let list = vec![
            assignment("Late", "2025-11-01", 0.0),
            assignment("Soon", "2025-10-02", 0.0),
            assignment("Mid", "2025-10-15", 0.0),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let visible = apply_filter(&list, Filter::All, today);
        let names: Vec<_> = visible.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Soon", "Mid", "Late"]);
    }
}
