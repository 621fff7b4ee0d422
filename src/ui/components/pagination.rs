use dioxus::prelude::*;

use crate::ui::theme;

/// Prev/next pager with a "Showing X to Y of Z" range label.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    first_row: usize,
    last_row: usize,
    total_matched: usize,
    on_page: EventHandler<usize>,
) -> Element {
    let range_label = if total_matched == 0 {
        "No matching vessels".to_string()
    } else {
        format!("Showing {first_row} to {last_row} of {total_matched}")
    };
    let at_first = page <= 1;
    let at_last = page >= total_pages;

    rsx! {
        div {
            class: "flex items-center justify-between px-1 py-2",
            span { class: "text-sm {theme::TEXT_MUTED}", "{range_label}" }
            div { class: "flex items-center gap-2",
                button {
                    class: "{theme::BTN_PAGER}",
                    disabled: at_first,
                    onclick: move |_| {
                        if !at_first {
                            on_page.call(page - 1);
                        }
                    },
                    "‹"
                }
                span { class: "px-2 text-sm text-slate-400", "Page {page} of {total_pages}" }
                button {
                    class: "{theme::BTN_PAGER}",
                    disabled: at_last,
                    onclick: move |_| {
                        if !at_last {
                            on_page.call(page + 1);
                        }
                    },
                    "›"
                }
            }
        }
    }
}
