use dioxus::prelude::*;
use store::{Action, Modal, StatusLevel, StatusMessage};

use crate::state::{dispatch, use_landing};

fn level_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Error => "text-red-500",
        StatusLevel::Success => "text-green-700",
    }
}

fn banner_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Error => "bg-red-50 text-red-500",
        StatusLevel::Success => "bg-green-50 text-green-700",
    }
}

/// Inline message shown inside a modal form.
#[component]
pub fn FormMessage(#[props(!optional)] message: Option<StatusMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "text-sm {level_class(message.level)}",
            "{message.text}"
        }
    }
}

/// Page-level notice for messages that outlive their modal.
#[component]
pub fn StatusBanner() -> Element {
    let state = use_landing();
    let (modal, message) = {
        let current = state.read();
        (current.modal, current.message.clone())
    };

    match (modal, message) {
        (Modal::None, Some(message)) => rsx! {
            div {
                class: "max-w-7xl mx-auto mb-4 px-6 py-3 flex items-center justify-between rounded {banner_class(message.level)}",
                role: "status",
                span { "{message.text}" }
                button {
                    class: "text-xl cursor-pointer",
                    title: "Dismiss",
                    onclick: move |_| dispatch(state, Action::DismissMessage),
                    "×"
                }
            }
        },
        _ => rsx! {},
    }
}
