use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{classify_fleet, AppState},
    infra::fleet_api::{CacheStatus, FleetClient},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{FleetPage, PoolingPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/fleet")]
    Fleet {},
    #[route("/pooling")]
    Pooling {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Manual-refresh tick shared with the settings page.
    let refresh_request = use_signal(|| 0_u64);
    use_context_provider(|| refresh_request.clone());

    let _fleet = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let refresh_request = refresh_request.clone();
        move || async move { fetch_fleet(state.clone(), toasts.clone(), refresh_request.clone()).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user settings: {err}");
    }
}

async fn fetch_fleet(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    refresh_request: Signal<u64>,
) -> Option<CacheStatus> {
    // Subscribe to the refresh tick so bumping it re-runs this resource.
    let tick = refresh_request();
    // Peek, not read: storing the snapshot below must not re-trigger the fetch.
    let base_url = state.peek().settings.server_url.clone();

    println!("[fleet-api] Loading fleet snapshot from {base_url} (tick {tick})");

    let client = match FleetClient::new(&base_url) {
        Ok(client) => client,
        Err(err) => {
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Failed to initialise fleet client: {err}"),
            );
            return None;
        }
    };

    match client.get_fleet().await {
        Ok(payload) => {
            let vessels = classify_fleet(&payload.data);
            println!(
                "[fleet-api] Classified {} vessels (status: {:?})",
                vessels.len(),
                payload.status
            );
            state.with_mut(|st| {
                st.vessels = vessels;
                st.fetched_at = Some(payload.fetched_at);
            });
            if payload.status == CacheStatus::Stale {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Showing cached fleet data; the compliance server is unreachable.",
                );
            }
            Some(payload.status)
        }
        Err(err) => {
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("Failed to load fleet data: {err}"),
            );
            None
        }
    }
}

#[component]
pub fn Fleet() -> Element {
    rsx! { Shell { FleetPage {} } }
}

#[component]
pub fn Pooling() -> Element {
    rsx! { Shell { PoolingPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
