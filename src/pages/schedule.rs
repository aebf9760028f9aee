//! Schedule Page
//!
//! Study plan view. Unlike the other pages, nothing loads on entry; the
//! plan is generated only on explicit request.

use leptos::*;

use crate::api;
use crate::api::client::{StudySchedule, StudyTask};
use crate::components::Loading;
use crate::state::global::AppState;

/// Only the first two weeks of the plan are shown
const VISIBLE_DAYS: usize = 14;

const DEFAULT_HOURS_PER_DAY: i64 = 4;

/// Parse the hours input, falling back to the default on anything that is
/// not a positive number.
fn parse_hours(raw: &str) -> i64 {
    raw.trim()
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_HOURS_PER_DAY)
}

fn day_total(tasks: &[StudyTask]) -> f64 {
    tasks.iter().map(|t| t.hours).sum()
}

/// Marker color per task priority
fn priority_class(priority: Option<&str>) -> &'static str {
    match priority.unwrap_or("low") {
        "high" => "bg-red-500",
        "medium" => "bg-yellow-500",
        _ => "bg-green-500",
    }
}

/// Schedule page component
#[component]
pub fn Schedule() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (hours, set_hours) = create_signal(DEFAULT_HOURS_PER_DAY.to_string());
    let (schedule, set_schedule) = create_signal(None::<StudySchedule>);
    let (message, set_message) = create_signal(None::<String>);
    let (generating, set_generating) = create_signal(false);

    let generate = move |_| {
        let hours_per_day = parse_hours(&hours.get());
        let state = state.clone();
        set_generating.set(true);

        spawn_local(async move {
            match api::fetch_schedule(hours_per_day).await {
                Ok(response) if response.success && response.schedule.is_some() => {
                    set_schedule.set(response.schedule);
                    set_message.set(None);
                }
                Ok(response) => {
                    set_schedule.set(None);
                    set_message.set(Some(
                        response.error.unwrap_or_else(|| "Failed to generate schedule".to_string()),
                    ));
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header with generation controls
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Study Schedule"</h1>
                    <p class="text-gray-400 mt-1">"A day-by-day plan for what's due"</p>
                </div>

                <div class="flex items-center space-x-3">
                    <label class="text-sm text-gray-400">"Hours per day"</label>
                    <input
                        type="number"
                        min="1"
                        max="16"
                        prop:value=move || hours.get()
                        on:input=move |ev| set_hours.set(event_target_value(&ev))
                        class="w-20 bg-gray-700 rounded-lg px-3 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=generate
                        disabled=move || generating.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
            </div>

            // Plan content
            {move || {
                if generating.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(schedule) = schedule.get() {
                    view! { <SchedulePlan schedule=schedule /> }.into_view()
                } else {
                    let text = message.get()
                        .unwrap_or_else(|| "Pick a daily study budget and generate a plan".to_string());
                    view! {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">"📅"</div>
                            <p class="text-gray-400">{text}</p>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Rendered plan: one card per day, warnings at the bottom
#[component]
fn SchedulePlan(schedule: StudySchedule) -> impl IntoView {
    let mut days: Vec<(String, Vec<StudyTask>)> = schedule.daily_schedule.into_iter().collect();
    days.sort_by(|a, b| a.0.cmp(&b.0));
    days.truncate(VISIBLE_DAYS);

    let warnings = schedule.warnings;

    if days.is_empty() {
        return view! {
            <div class="text-center py-12">
                <div class="text-5xl mb-4">"📅"</div>
                <p class="text-gray-400">"No schedule generated"</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="space-y-4">
            {days.into_iter().map(|(date, tasks)| {
                let total = day_total(&tasks);

                view! {
                    <div class="bg-gray-800 rounded-xl p-4">
                        <div class="flex items-center justify-between mb-3">
                            <span class="font-semibold">{date}</span>
                            <span class="text-gray-400 text-sm">{format!("{}h total", total)}</span>
                        </div>

                        <div class="space-y-2">
                            {tasks.into_iter().map(|task| {
                                let marker = priority_class(task.priority.as_deref());

                                view! {
                                    <div class="flex items-center space-x-3 bg-gray-700 rounded-lg p-3">
                                        <div class=format!("w-2 h-8 rounded {}", marker) />
                                        <div class="flex-1">
                                            <div class="font-medium">{task.task}</div>
                                            <div class="text-gray-400 text-sm">{task.assignment}</div>
                                        </div>
                                        <span class="font-semibold">{format!("{}h", task.hours)}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}

            // Overcommitment warnings
            {(!warnings.is_empty()).then(|| view! {
                <div class="p-6 bg-red-500/10 border border-red-500 rounded-xl">
                    <h2 class="text-lg font-semibold text-red-400 mb-3">"⚠️ Warnings"</h2>
                    <ul class="space-y-2 text-gray-300">
                        {warnings.into_iter().map(|warning| view! {
                            <li>"• "{warning}</li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_input_falls_back_to_default() {
        assert_eq!(parse_hours("6"), 6);
        assert_eq!(parse_hours("  3 "), 3);
        assert_eq!(parse_hours("abc"), DEFAULT_HOURS_PER_DAY);
        assert_eq!(parse_hours("0"), DEFAULT_HOURS_PER_DAY);
        assert_eq!(parse_hours("-2"), DEFAULT_HOURS_PER_DAY);
    }

    #[test]
    fn day_total_sums_task_hours() {
        let tasks = vec![
            StudyTask { task: "Read ch. 4".into(), assignment: "Essay".into(), hours: 1.5, priority: None },
            StudyTask { task: "Outline".into(), assignment: "Essay".into(), hours: 2.0, priority: None },
        ];
        assert_eq!(day_total(&tasks), 3.5);
    }
}
