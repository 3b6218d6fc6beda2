use chrono::Datelike;
use dioxus::prelude::*;
use store::{Action, Modal};

use crate::components::Button;
use crate::state::{dispatch, use_landing};

#[component]
pub fn CallToAction() -> Element {
    let state = use_landing();

    rsx! {
        section {
            class: "py-8 sm:py-10 flex flex-col sm:flex-row items-start sm:items-center justify-between bg-indigo-50 rounded-lg p-4 sm:p-6 gap-4",
            div {
                h4 { class: "text-lg sm:text-xl font-semibold", "Ready to join your alumni community?" }
                p { class: "text-slate-600 text-sm sm:text-base", "Create a profile and start reconnecting today." }
            }
            Button {
                class: "w-full sm:w-auto",
                onclick: move |_| dispatch(state, Action::OpenModal(Modal::Signup)),
                "Create profile"
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "mt-10 py-6 text-sm text-slate-500 flex flex-col sm:flex-row items-center justify-between gap-2 sm:gap-0",
            div { "© {year} AlumniConnect — Built for alumni networks" }
            div {
                class: "flex gap-3",
                a { class: "cursor-pointer hover:underline", "Privacy" }
                a { class: "cursor-pointer hover:underline", "Terms" }
            }
        }
    }
}
