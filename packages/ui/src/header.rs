use dioxus::prelude::*;
use store::{Action, Modal, Section};

use crate::components::{Button, ButtonVariant};
use crate::nav::{scroll_to_section, use_section_anchors};
use crate::state::{dispatch, use_landing, use_mock_auth};

/// Sections listed in the header, in display order.
const NAV_SECTIONS: [Section; 2] = [Section::Features, Section::Network];

/// Brand, section navigation and the login/logout controls.
#[component]
pub fn Header() -> Element {
    let state = use_landing();
    let auth = use_mock_auth();
    let anchors = use_section_anchors();
    let user = state.read().auth.user.clone();

    rsx! {
        header {
            class: "max-w-7xl mx-auto px-4 sm:px-6 py-6 flex flex-col sm:flex-row items-center justify-between gap-4",

            div {
                class: "flex items-center gap-3",
                div { class: "w-12 h-12 rounded-full bg-indigo-600 flex items-center justify-center text-white font-bold", "A" }
                div {
                    h1 { class: "text-lg font-semibold", "AlumniConnect" }
                    p { class: "text-sm text-slate-500", "Centralized alumni profiles & networking" }
                }
            }

            nav {
                class: "flex flex-wrap items-center gap-2",
                for section in NAV_SECTIONS {
                    button {
                        key: "{section.anchor_id()}",
                        class: "text-sm py-2 px-3 rounded cursor-pointer hover:bg-slate-100",
                        onclick: move |_| scroll_to_section(anchors, section),
                        "{section.label()}"
                    }
                }

                if let Some(user) = user {
                    span { class: "text-sm text-slate-600", "Hi, {user.name}" }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| auth.logout(move |action| dispatch(state, action)),
                        "Logout"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dispatch(state, Action::OpenModal(Modal::Login)),
                        "Login"
                    }
                    Button {
                        onclick: move |_| dispatch(state, Action::OpenModal(Modal::Signup)),
                        "Signup"
                    }
                }
            }
        }
    }
}
