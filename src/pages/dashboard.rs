//! Dashboard Page
//!
//! Overview stats, recent courses, and upcoming deadlines.

use leptos::*;

use crate::components::StatCard;
use crate::state::global::{days_left, upcoming_assignments, AppState};

/// How far ahead the dashboard looks for deadlines
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let stats = state.stats;
    let assignments = state.assignments;

    let upcoming_count = Signal::derive(move || {
        let today = chrono::Utc::now().date_naive();
        upcoming_assignments(&assignments.get(), today, UPCOMING_WINDOW_DAYS)
            .len()
            .to_string()
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your courses and deadlines at a glance"</p>
            </div>

            // Summary row
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Courses"
                    icon="🎓"
                    value=Signal::derive(move || stats.get().total_courses.to_string())
                />
                <StatCard
                    label="Assignments"
                    icon="📋"
                    value=Signal::derive(move || stats.get().total_assignments.to_string())
                />
                <StatCard
                    label="Completed"
                    icon="✅"
                    value=Signal::derive(move || stats.get().completed_assignments.to_string())
                />
                <StatCard label="Due This Week" icon="⏰" value=upcoming_count />
            </section>

            // Two column layout
            <div class="grid md:grid-cols-2 gap-8">
                <RecentCourses />
                <UpcomingDeadlines />
            </div>
        </div>
    }
}

/// Most recently added courses, newest first
#[component]
fn RecentCourses() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let courses = state.courses;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Courses"</h2>

            <div class="space-y-2">
                {move || {
                    let recent: Vec<_> = courses.get().into_iter().rev().take(3).collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm text-center py-8">
                                "No courses yet. Add your first course!"
                            </p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|course| {
                            let name = if course.course_name.is_empty() {
                                "Untitled".to_string()
                            } else {
                                course.course_name.clone()
                            };

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{name}</span>
                                        <div class="text-gray-400 text-sm">{course.course_code.clone()}</div>
                                    </div>
                                    <span class="text-gray-400 text-sm">
                                        {format!("{} assignments", course.assignments.len())}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// First five assignments due within the week
#[component]
fn UpcomingDeadlines() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let assignments = state.assignments;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Upcoming Deadlines"</h2>

            <div class="space-y-2">
                {move || {
                    let today = chrono::Utc::now().date_naive();
                    let upcoming =
                        upcoming_assignments(&assignments.get(), today, UPCOMING_WINDOW_DAYS);

                    if upcoming.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm text-center py-8">
                                "No upcoming deadlines"
                            </p>
                        }.into_view()
                    } else {
                        upcoming.into_iter().take(5).map(|assignment| {
                            let left = assignment.due().map(|d| days_left(d, today)).unwrap_or(0);

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{assignment.name.clone()}</span>
                                        <div class="text-gray-400 text-sm">{assignment.course.clone()}</div>
                                    </div>
                                    <div class="text-right">
                                        <div class="font-semibold">{format!("{}d left", left)}</div>
                                        <div class="text-gray-400 text-sm">{assignment.due_date.clone()}</div>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
