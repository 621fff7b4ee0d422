use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_TOASTS {
            entries.remove(0);
        }
        entries.push(ToastMessage::new(kind, text));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in messages {
                    ToastCard { message, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, mut toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let theme = match message.kind {
        ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
        ToastKind::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-100",
        ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
    };
    let dismiss_id = message.id.clone();

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {theme}",
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
