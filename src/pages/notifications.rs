//! Notifications Page
//!
//! Server-timed reminders with urgency tagging.

use leptos::*;

use crate::api;
use crate::api::client::NotificationItem;
use crate::components::Loading;
use crate::state::global::AppState;

/// At most this many notifications are rendered
const VISIBLE_NOTIFICATIONS: usize = 20;

fn urgency_icon(urgency: &str) -> &'static str {
    match urgency {
        "high" => "🚨",
        "medium" => "⚡",
        "low" => "ℹ️",
        _ => "📢",
    }
}

fn urgency_border(urgency: &str) -> &'static str {
    match urgency {
        "high" => "border-red-500",
        "medium" => "border-yellow-500",
        _ => "border-gray-600",
    }
}

/// Notifications page component
#[component]
pub fn Notifications() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (notifications, set_notifications) = create_signal(Vec::<NotificationItem>::new());
    let (message, set_message) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let state_for_load = state.clone();
    let load = move || {
        let state = state_for_load.clone();
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_notifications().await {
                Ok(response) if response.success && response.notifications.is_some() => {
                    set_notifications.set(response.notifications.unwrap_or_default());
                    set_message.set(None);
                }
                Ok(response) => {
                    set_notifications.set(Vec::new());
                    set_message.set(Some(
                        response.error.unwrap_or_else(|| "No notifications available".to_string()),
                    ));
                }
                Err(e) => {
                    state.show_error(&format!("Error: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on page entry
    let load_for_mount = load.clone();
    create_effect(move |_| {
        load_for_mount();
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Smart Notifications"</h1>
                    <p class="text-gray-400 mt-1">"Reminders timed by the planner"</p>
                </div>

                <button
                    on:click=move |_| load()
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            // Notification list
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let items = notifications.get();
                if items.is_empty() {
                    let text = message.get()
                        .unwrap_or_else(|| "No notifications at this time".to_string());
                    return view! {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">"🔔"</div>
                            <p class="text-gray-400">{text}</p>
                        </div>
                    }.into_view();
                }

                items.into_iter().take(VISIBLE_NOTIFICATIONS).map(|notif| {
                    view! { <NotificationCard notif=notif /> }
                }).collect_view()
            }}
        </div>
    }
}

/// Single notification card
#[component]
fn NotificationCard(notif: NotificationItem) -> impl IntoView {
    let urgency = notif.urgency.unwrap_or_else(|| "low".to_string());
    let icon = urgency_icon(&urgency);
    let border = urgency_border(&urgency);

    let kind = notif.kind.unwrap_or_else(|| "Notification".to_string());
    let action = notif.action.unwrap_or_else(|| "None".to_string());
    let send_at = notif.send_at.unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class=format!("bg-gray-800 rounded-xl p-4 border-l-4 {} mb-3", border)>
            <div class="flex items-center space-x-2 mb-2">
                <span class="text-lg">{icon}</span>
                <span class="text-sm font-semibold uppercase text-gray-400">{kind}</span>
            </div>
            <div class="text-gray-200">{notif.message}</div>
            <div class="text-gray-400 text-sm mt-2">{format!("Action: {}", action)}</div>
            <div class="text-gray-500 text-xs mt-1">{format!("Send at: {}", send_at)}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_maps_to_icon() {
        assert_eq!(urgency_icon("high"), "🚨");
        assert_eq!(urgency_icon("medium"), "⚡");
        assert_eq!(urgency_icon("low"), "ℹ️");
        assert_eq!(urgency_icon("someday"), "📢");
    }
}
