use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, accent: Option<&'static str>) -> Element {
    let value_class = accent.unwrap_or("text-slate-100");
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            h3 { class: "{theme::LABEL}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}
