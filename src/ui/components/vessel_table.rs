use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{Vessel, INTENSITY_BAR_REFERENCE};
use crate::ui::theme;

#[component]
pub fn VesselTable(rows: Vec<Vessel>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Ship ID" }
                        th { class: "px-4 py-3 font-medium", "Type" }
                        th { class: "px-4 py-3 font-medium", "Intensity (kg/nm)" }
                        th { class: "px-4 py-3 font-medium", "Balance" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for vessel in rows {
                        VesselRow { vessel }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "5",
                                "No vessels match the current search and filter."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VesselRow(vessel: Vessel) -> Element {
    let bar_width = format!(
        "width: {:.0}%",
        vessel.intensity_ratio(INTENSITY_BAR_REFERENCE) * 100.0
    );
    let intensity_label = vessel.intensity_display();
    let balance_label = vessel.balance_display();

    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-semibold text-slate-200", "{vessel.ship_id}" }
            td { class: "px-4 py-3 text-slate-400", "{vessel.ship_type}" }
            td {
                class: "px-4 py-3",
                div { class: "flex flex-col gap-1",
                    div { class: "h-2 w-32 overflow-hidden rounded-full bg-slate-800",
                        div {
                            class: "{theme::intensity_bar(vessel.status)}",
                            style: "{bar_width}",
                        }
                    }
                    span { class: "text-xs {theme::TEXT_MUTED}", "{intensity_label}" }
                }
            }
            td {
                class: "px-4 py-3",
                span { class: "{theme::balance_text(vessel.status)}", "{balance_label}" }
            }
            td {
                class: "px-4 py-3",
                StatusBadge { status: vessel.status }
            }
        }
    }
}
