use dioxus::prelude::*;
use store::{Action, Modal};

use crate::components::{Button, ButtonVariant};
use crate::state::{dispatch, use_landing};

#[component]
pub fn Hero() -> Element {
    let state = use_landing();
    let logged_in = state.read().auth.logged_in();

    rsx! {
        section {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6 items-center py-10",
            div {
                h2 { class: "text-3xl sm:text-4xl font-extrabold leading-tight animate-fade-up", "Reconnect. Share. Grow." }
                p {
                    class: "mt-3 text-slate-600 max-w-full sm:max-w-xl",
                    "A centralized platform for alumni to register, login, update profiles, and network across batches — build mentorship, jobs, and lifelong connections."
                }
                if !logged_in {
                    div {
                        class: "mt-5 flex flex-wrap gap-3",
                        Button {
                            onclick: move |_| dispatch(state, Action::OpenModal(Modal::Signup)),
                            "Get started — Signup"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| dispatch(state, Action::OpenModal(Modal::Login)),
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
