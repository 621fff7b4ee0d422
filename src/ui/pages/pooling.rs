//! Pooling simulator: pick two vessels, offset their balances, report the
//! joint verdict. Error cases render as explicit panels, never as a zero.

use dioxus::prelude::*;

use crate::{
    domain::{pool_selection, AppState, PoolError, PoolOutcome, Vessel},
    ui::theme,
};

#[component]
pub fn PoolingPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let mut selected_a = use_signal(String::new);
    let mut selected_b = use_signal(String::new);
    let mut result = use_signal(|| None::<Result<PoolOutcome, PoolError>>);

    let vessels = state.with(|st| st.vessels.clone());

    let on_simulate = {
        let vessels = vessels.clone();
        move |_| {
            let a = selected_a();
            let b = selected_b();
            let outcome = pool_selection(
                &vessels,
                (!a.is_empty()).then_some(a.as_str()),
                (!b.is_empty()).then_some(b.as_str()),
            );
            result.set(Some(outcome));
        }
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-sm font-semibold text-slate-200", "Pooling Simulator" }
                p { class: "text-xs {theme::TEXT_MUTED}",
                    "Combine two vessels' compliance balances into one net figure. Any pair is allowed."
                }
            }

            div {
                class: "{theme::PANEL} space-y-4 p-6",
                div { class: "flex flex-col gap-4 md:flex-row md:items-end",
                    VesselSelect {
                        label: "Vessel A",
                        vessels: vessels.clone(),
                        selected: selected_a(),
                        on_change: move |value| {
                            selected_a.set(value);
                            result.set(None);
                        },
                    }
                    VesselSelect {
                        label: "Vessel B",
                        vessels: vessels.clone(),
                        selected: selected_b(),
                        on_change: move |value| {
                            selected_b.set(value);
                            result.set(None);
                        },
                    }
                    button {
                        class: "{theme::BTN_PRIMARY}",
                        onclick: on_simulate,
                        "Simulate"
                    }
                }

                match result() {
                    Some(Ok(outcome)) => rsx! {
                        div {
                            class: "flex items-center justify-between rounded-lg border p-4 {theme::verdict_panel(outcome.verdict)}",
                            div {
                                span { class: "block text-sm font-semibold text-slate-300", "Net Compliance Balance" }
                                span { class: "text-2xl font-bold", {format!("{:.2}", outcome.net_balance)} }
                            }
                            span {
                                class: "rounded-md border px-4 py-1.5 text-sm font-bold tracking-wide {theme::verdict_badge(outcome.verdict)}",
                                "{outcome.verdict.label()}"
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-3 text-sm text-amber-200",
                            "{err}"
                        }
                    },
                    None => rsx! {
                        p { class: "text-xs {theme::TEXT_MUTED}",
                            "Select two vessels and press Simulate."
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn VesselSelect(
    label: &'static str,
    vessels: Vec<Vessel>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "w-full flex-1",
            label { class: "{theme::LABEL} mb-2", "{label}" }
            select {
                class: "{theme::SELECT} w-full",
                value: selected.clone(),
                onchange: move |evt| on_change.call(evt.value().to_string()),
                option { value: "", "-- Select Vessel --" }
                for vessel in vessels {
                    option {
                        value: vessel.ship_id.clone(),
                        selected: vessel.ship_id == selected,
                        {format!(
                            "{} ({}: {})",
                            vessel.ship_id,
                            vessel.status.label(),
                            vessel.balance_display()
                        )}
                    }
                }
            }
        }
    }
}
