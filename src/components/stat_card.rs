//! Stat Card Component
//!
//! Dashboard summary tiles.

use leptos::*;

/// Single summary tile with an icon, value, and label
#[component]
pub fn StatCard(
    /// Label shown under the value
    #[prop(into)]
    label: String,
    /// Reactive value text
    #[prop(into)]
    value: Signal<String>,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-2xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
