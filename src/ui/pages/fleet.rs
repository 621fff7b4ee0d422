//! Fleet page: summary cards plus the searchable, filterable vessel table.

use dioxus::prelude::*;

use crate::{
    domain::{fleet_summary, query_fleet, AppState, FleetQuery, StatusFilter},
    ui::{
        components::{
            kpi_card::KpiCard,
            pagination::Pagination,
            vessel_table::VesselTable,
        },
        theme,
    },
};

#[component]
pub fn FleetPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(StatusFilter::default);
    let mut page = use_signal(|| 1_usize);

    let vessels = state.with(|st| st.vessels.clone());
    let page_size = state.with(|st| st.settings.page_size);
    let summary = fleet_summary(&vessels);

    let query = FleetQuery {
        search: search(),
        status: status_filter(),
        page: page(),
        page_size,
    };

    let result = query_fleet(&vessels, &query);

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Total Ships".to_string(),
                    value: summary.total.to_string(),
                    description: Some("Vessels in the current snapshot".to_string()),
                    accent: None,
                }
                KpiCard {
                    title: "Deficit Ships".to_string(),
                    value: summary.deficit.to_string(),
                    description: Some("Negative compliance balance".to_string()),
                    accent: Some("text-rose-400"),
                }
                KpiCard {
                    title: "Surplus Ships".to_string(),
                    value: summary.surplus.to_string(),
                    description: Some("Zero or positive balance".to_string()),
                    accent: Some("text-emerald-400"),
                }
            }

            section {
                class: "space-y-4",
                div { class: "flex flex-wrap items-end justify-between gap-4",
                    div {
                        h2 { class: "text-sm font-semibold text-slate-200", "Fleet Details" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "Search by ship id or type" }
                    }
                    div { class: "flex gap-3",
                        input {
                            class: "{theme::INPUT} w-56",
                            value: search(),
                            placeholder: "Search Ship ID...",
                            oninput: move |evt| {
                                search.set(evt.value().to_string());
                                page.set(1);
                            },
                        }
                        select {
                            class: "{theme::SELECT}",
                            value: status_filter().label(),
                            onchange: move |evt| {
                                status_filter.set(StatusFilter::from_label(&evt.value()));
                                page.set(1);
                            },
                            for option_filter in StatusFilter::ALL {
                                option {
                                    value: option_filter.label(),
                                    selected: option_filter == status_filter(),
                                    "{option_filter.label()}"
                                }
                            }
                        }
                    }
                }

                match result {
                    Ok(fleet_page) => rsx! {
                        VesselTable { rows: fleet_page.rows.clone() }
                        Pagination {
                            page: query.page,
                            total_pages: fleet_page.total_pages,
                            first_row: fleet_page.first_row_index(&query),
                            last_row: fleet_page.last_row_index(&query),
                            total_matched: fleet_page.total_matched,
                            on_page: move |next| page.set(next),
                        }
                    },
                    Err(err) => rsx! {
                        div {
                            class: "rounded-xl border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-sm text-rose-200",
                            "{err}"
                        }
                    },
                }
            }
        }
    }
}
