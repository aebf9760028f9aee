//! Workload Page
//!
//! Server-computed workload analysis with a weekly breakdown.

use leptos::*;
use std::collections::HashMap;

use crate::api;
use crate::api::client::WorkloadAnalysis;
use crate::components::Loading;
use crate::state::global::AppState;

/// Bars are scaled against at least this many hours so light weeks do not
/// fill the whole track.
const BREAKDOWN_FLOOR_HOURS: f64 = 20.0;

fn max_weekly_hours(breakdown: &HashMap<String, f64>) -> f64 {
    breakdown
        .values()
        .cloned()
        .fold(BREAKDOWN_FLOOR_HOURS, f64::max)
}

fn risk_level(hours: f64) -> &'static str {
    if hours > 20.0 {
        "high"
    } else if hours > 15.0 {
        "medium"
    } else {
        "low"
    }
}

/// Workload page component
#[component]
pub fn Workload() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (analysis, set_analysis) = create_signal(None::<WorkloadAnalysis>);
    let (message, set_message) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let state_for_load = state.clone();
    let load = move || {
        let state = state_for_load.clone();
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_workload().await {
                Ok(response) if response.success && response.analysis.is_some() => {
                    set_analysis.set(response.analysis);
                    set_message.set(None);
                }
                Ok(response) => {
                    set_analysis.set(None);
                    set_message.set(Some(
                        response.error.unwrap_or_else(|| "Failed to analyze workload".to_string()),
                    ));
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    // Analyze on page entry
    let load_for_mount = load.clone();
    create_effect(move |_| {
        load_for_mount();
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Workload Analysis"</h1>
                    <p class="text-gray-400 mt-1">"Where your semester gets heavy"</p>
                </div>

                <button
                    on:click=move |_| load()
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </div>

            // Analysis content
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(analysis) = analysis.get() {
                    view! { <WorkloadReport analysis=analysis /> }.into_view()
                } else {
                    let text = message.get().unwrap_or_else(|| "No analysis yet".to_string());
                    view! {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">"📊"</div>
                            <p class="text-gray-400">{text}</p>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Rendered analysis: summary tiles, weekly bars, recommendations
#[component]
fn WorkloadReport(analysis: WorkloadAnalysis) -> impl IntoView {
    let total_hours = analysis.total_hours;
    let risk_count = analysis.risk_weeks.len();
    let priority_count = analysis.priority_assignments.len();
    let recommendations = analysis.recommendations;

    let max_hours = max_weekly_hours(&analysis.weekly_breakdown);
    let mut weeks: Vec<(String, f64)> = analysis.weekly_breakdown.into_iter().collect();
    weeks.sort_by(|a, b| a.0.cmp(&b.0));

    view! {
        <div class="space-y-8">
            // Summary row
            <div class="grid grid-cols-3 gap-4">
                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-3xl font-bold">{format!("{}", total_hours)}</div>
                    <p class="text-gray-400 mt-1">"Total Hours"</p>
                </div>
                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-3xl font-bold">{risk_count}</div>
                    <p class="text-gray-400 mt-1">"Risk Weeks"</p>
                </div>
                <div class="bg-gray-800 rounded-xl p-6 text-center">
                    <div class="text-3xl font-bold">{priority_count}</div>
                    <p class="text-gray-400 mt-1">"Priority Items"</p>
                </div>
            </div>

            // Weekly breakdown
            {(!weeks.is_empty()).then(|| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Weekly Breakdown"</h2>
                    <div class="space-y-3">
                        {weeks.into_iter().map(|(week, hours)| {
                            let percentage = hours / max_hours * 100.0;
                            let (tag, tag_class) = match risk_level(hours) {
                                "high" => ("🔴 High", "text-red-400"),
                                "medium" => ("🟡 Medium", "text-yellow-400"),
                                _ => ("🟢 Low", "text-green-400"),
                            };

                            view! {
                                <div class="flex items-center space-x-4">
                                    <span class="w-24 font-medium">{week}</span>
                                    <div class="flex-1 bg-gray-700 rounded-full h-3">
                                        <div
                                            class="bg-primary-500 rounded-full h-3"
                                            style=format!("width: {}%", percentage)
                                        />
                                    </div>
                                    <span class="w-12 text-right font-medium">{format!("{}h", hours)}</span>
                                    <span class=format!("w-24 text-sm {}", tag_class)>{tag}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>
            })}

            // Recommendations
            {(!recommendations.is_empty()).then(|| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"💡 Recommendations"</h2>
                    <ul class="space-y-2 text-gray-300">
                        {recommendations.into_iter().map(|rec| view! {
                            <li>"• "{rec}</li>
                        }).collect_view()}
                    </ul>
                </section>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_thresholds() {
        assert_eq!(risk_level(25.0), "high");
        assert_eq!(risk_level(20.0), "medium");
        assert_eq!(risk_level(16.0), "medium");
        assert_eq!(risk_level(15.0), "low");
        assert_eq!(risk_level(0.0), "low");
    }

    #[test]
    fn breakdown_scale_has_a_floor() {
        let light: HashMap<String, f64> =
            [("Week 1".to_string(), 5.0)].into_iter().collect();
        assert_eq!(max_weekly_hours(&light), BREAKDOWN_FLOOR_HOURS);

        let heavy: HashMap<String, f64> =
            [("Week 1".to_string(), 32.0)].into_iter().collect();
        assert_eq!(max_weekly_hours(&heavy), 32.0);
    }
}
