//! Settings Page
//!
//! Planner preferences, email digests, calendar export, API connection.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::AppState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Tune the planner and notifications"</p>
            </div>

            <PlannerSettings />

            <CalendarExport />

            <ConnectionSettings />
        </div>
    }
}

/// Planner and email preferences, saved as one settings object
#[component]
fn PlannerSettings() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (hours, set_hours) = create_signal(String::new());
    let (risk, set_risk) = create_signal(String::new());
    let (lead, set_lead) = create_signal(String::new());
    let (email_enabled, set_email_enabled) = create_signal(false);
    let (email_to, set_email_to) = create_signal(String::new());
    let (email_schedule, set_email_schedule) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    // Load current settings on entry
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(settings) => {
                    set_hours.set(settings.hours_per_day.to_string());
                    set_risk.set(settings.risk_threshold.to_string());
                    set_lead.set(settings.notification_lead_days.to_string());
                    set_email_enabled.set(settings.email_enabled);
                    set_email_to.set(settings.email_to);
                    set_email_schedule.set(settings.email_schedule_enabled);
                }
                Err(e) => {
                    state.show_error(&format!("Failed to load settings: {}", e));
                }
            }
        });
    });

    let state_for_save = state;
    let save = move |_| {
        let fallback = crate::state::global::Settings::default();
        let settings = crate::state::global::Settings {
            hours_per_day: hours.get().trim().parse().unwrap_or(fallback.hours_per_day),
            risk_threshold: risk.get().trim().parse().unwrap_or(fallback.risk_threshold),
            notification_lead_days: lead
                .get()
                .trim()
                .parse()
                .unwrap_or(fallback.notification_lead_days),
            email_enabled: email_enabled.get(),
            email_to: email_to.get(),
            email_schedule_enabled: email_schedule.get(),
        };

        let state = state_for_save.clone();
        set_saving.set(true);

        spawn_local(async move {
            state.loading.set(true);
            match api::save_settings(&settings).await {
                Ok(()) => {
                    if let Err(e) = api::refresh_state(&state).await {
                        state.show_error(&format!("Failed to load data: {}", e));
                    }
                    state.show_success("Settings saved successfully!");
                }
                Err(e) => {
                    state.show_error(&format!("Failed to save settings: {}", e));
                }
            }
            state.loading.set(false);
            set_saving.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Planner"</h2>

            <div class="grid md:grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Study hours per day"</label>
                    <input
                        type="number"
                        min="1"
                        max="16"
                        prop:value=move || hours.get()
                        on:input=move |ev| set_hours.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Risk threshold (hours/week)"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || risk.get()
                        on:input=move |ev| set_risk.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Notification lead days"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || lead.get()
                        on:input=move |ev| set_lead.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <h3 class="font-medium mt-6 mb-3">"Email"</h3>
            <div class="space-y-3">
                <label class="flex items-center space-x-3">
                    <input
                        type="checkbox"
                        prop:checked=move || email_enabled.get()
                        on:change=move |ev| set_email_enabled.set(event_target_checked(&ev))
                        class="w-4 h-4"
                    />
                    <span class="text-gray-300">"Send deadline reminders by email"</span>
                </label>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email address"</label>
                    <input
                        type="email"
                        placeholder="you@university.edu"
                        prop:value=move || email_to.get()
                        on:input=move |ev| set_email_to.set(event_target_value(&ev))
                        class="w-full max-w-md bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <label class="flex items-center space-x-3">
                    <input
                        type="checkbox"
                        prop:checked=move || email_schedule.get()
                        on:change=move |ev| set_email_schedule.set(event_target_checked(&ev))
                        class="w-4 h-4"
                    />
                    <span class="text-gray-300">"Include the daily study schedule"</span>
                </label>
            </div>

            <button
                on:click=save
                disabled=move || saving.get()
                class="mt-6 px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if saving.get() { "Saving..." } else { "Save Settings" }}
            </button>
        </section>
    }
}

/// Calendar export section
#[component]
fn CalendarExport() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (exporting, set_exporting) = create_signal(false);

    let export_calendar = move |_| {
        set_exporting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match api::download_calendar().await {
                Ok(data) => {
                    save_ics(&data);
                    state.show_success("Calendar exported successfully!");
                }
                Err(e) => {
                    state.show_error(&format!("Failed to export calendar: {}", e));
                }
            }
            set_exporting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-xl font-semibold">"Calendar Export"</h2>
                    <p class="text-sm text-gray-400 mt-1">
                        "Download every deadline as an .ics file for your calendar app"
                    </p>
                </div>
                <button
                    on:click=export_calendar
                    disabled=move || exporting.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if exporting.get() { "Exporting..." } else { "Export Calendar" }}
                </button>
            </div>
        </section>
    }
}

/// Hand the downloaded bytes to the browser as a file download
fn save_ics(data: &[u8]) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let array = js_sys::Uint8Array::from(data);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&array.into())).ok();

    if let Some(blob) = blob {
        let url = web_sys::Url::create_object_url_with_blob(&blob).ok();
        if let Some(url) = url {
            let document = window.document().unwrap();
            let a = document.create_element("a").unwrap();
            let _ = a.set_attribute("href", &url);
            let _ = a.set_attribute("download", "coursesync_calendar.ics");
            a.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }
}

/// API connection settings
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <label class="block text-sm text-gray-400 mb-2">"CourseSync API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </section>
    }
}
