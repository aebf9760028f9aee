//! Loading Component
//!
//! Loading spinners and the global request overlay.

use leptos::*;

use crate::state::global::AppState;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Full-screen overlay shown while a request is in flight.
///
/// Advisory only: it does not block a second trigger of the same action.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            if state.loading.get() {
                view! {
                    <div class="fixed inset-0 bg-gray-900/60 z-40 flex items-center justify-center">
                        <div class="loading-spinner w-10 h-10" />
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
