use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh_request = use_context::<Signal<u64>>();

    let settings = state.with(|st| st.settings.clone());
    let mut server_url_input = use_signal(|| settings.server_url.clone());
    let mut page_size_input = use_signal(|| settings.page_size.to_string());

    let snapshot_age = state.with(|st| st.fetched_at.map(humanize_age));

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let url = server_url_input().trim().to_string();
            if url::Url::parse(&url).is_err() {
                push_toast(toasts.clone(), ToastKind::Error, "Server URL is not valid.");
                return;
            }

            let page_size = match page_size_input().trim().parse::<usize>() {
                Ok(value) if value > 0 => value,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Page size must be a positive integer.",
                    );
                    return;
                }
            };

            state.with_mut(|st| {
                st.settings.server_url = url;
                st.settings.page_size = page_size;
            });
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Info, "Settings saved.");
        }
    };

    let on_refresh = {
        let mut refresh_request = refresh_request.clone();
        let toasts = toasts.clone();
        move |_| {
            refresh_request.with_mut(|counter| *counter += 1);
            push_toast(toasts.clone(), ToastKind::Info, "Refreshing fleet data...");
        }
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-sm font-semibold text-slate-200", "Settings" }
                p { class: "text-xs {theme::TEXT_MUTED}", "Connection and display preferences" }
            }

            div {
                class: "{theme::PANEL} space-y-4 p-6",
                div {
                    label { class: "{theme::LABEL} mb-2", "Compliance Server URL" }
                    input {
                        class: "{theme::INPUT} w-full",
                        value: server_url_input(),
                        oninput: move |evt| server_url_input.set(evt.value().to_string()),
                    }
                }
                div { class: "w-40",
                    label { class: "{theme::LABEL} mb-2", "Rows per page" }
                    input {
                        class: "{theme::INPUT} w-full",
                        inputmode: "numeric",
                        value: page_size_input(),
                        oninput: move |evt| page_size_input.set(evt.value().to_string()),
                    }
                }
                button {
                    class: "{theme::BTN_PRIMARY}",
                    onclick: on_apply,
                    "Apply"
                }
            }

            div {
                class: "{theme::PANEL} space-y-3 p-6",
                h3 { class: "{theme::LABEL}", "Fleet Snapshot" }
                match snapshot_age {
                    Some(age) => rsx! {
                        p { class: "text-sm text-slate-300", "Last fetched {age}" }
                    },
                    None => rsx! {
                        p { class: "text-sm {theme::TEXT_MUTED}", "No snapshot loaded yet." }
                    },
                }
                button {
                    class: "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
                    onclick: on_refresh,
                    "Refresh now"
                }
            }
        }
    }
}

fn humanize_age(fetched_at: std::time::SystemTime) -> String {
    let age = std::time::SystemTime::now()
        .duration_since(fetched_at)
        .unwrap_or_default()
        .as_secs();
    if age < 60 {
        format!("{age}s ago")
    } else if age < 3_600 {
        format!("{}m ago", age / 60)
    } else if age < 86_400 {
        format!("{}h ago", age / 3_600)
    } else {
        format!("{}d ago", age / 86_400)
    }
}
