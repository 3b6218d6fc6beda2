//! Searchable alumni directory ("Network" section).

use dioxus::prelude::*;
use store::{Action, Profile, Section, UserType};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaMagnifyingGlass;
use crate::nav::{register_anchor, use_section_anchors};
use crate::state::{dispatch, use_landing};
use crate::Icon;

#[component]
pub fn Directory() -> Element {
    let state = use_landing();
    let anchors = use_section_anchors();
    let query = state.read().query.clone();
    let visible: Vec<Profile> = state.read().visible_profiles().into_iter().cloned().collect();

    rsx! {
        section {
            id: Section::Network.anchor_id(),
            class: "py-10",
            onmounted: move |evt: MountedEvent| register_anchor(anchors, Section::Network, evt.data()),

            div {
                class: "flex flex-col sm:flex-row items-start sm:items-center justify-between gap-3",
                h3 { class: "text-xl sm:text-2xl font-semibold", "Network" }
                div {
                    class: "flex flex-wrap items-center gap-2 w-full sm:w-auto",
                    div {
                        class: "relative w-full sm:w-auto flex-1",
                        input {
                            class: "border border-slate-200 rounded px-3 py-2 pr-8 w-full focus:outline-none focus:border-indigo-600",
                            placeholder: "Search alumni, year or skills",
                            value: query,
                            oninput: move |evt: FormEvent| dispatch(state, Action::SetQuery(evt.value())),
                        }
                        span {
                            class: "absolute right-2 top-2 text-slate-500",
                            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dispatch(state, Action::ClearQuery),
                        "Clear"
                    }
                }
            }

            if visible.is_empty() {
                p { class: "mt-5 text-slate-500", "No alumni match your search." }
            } else {
                div {
                    class: "mt-5 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    for profile in visible {
                        ProfileCard { key: "{profile.id}", profile: profile.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileCard(profile: Profile) -> Element {
    let badge = match profile.user_type {
        UserType::InCampus => "bg-emerald-50 text-emerald-700",
        UserType::PassOut => "bg-indigo-50 text-indigo-600",
    };

    rsx! {
        div {
            class: "p-3 sm:p-4 border border-slate-200 rounded-lg bg-white flex items-start gap-3 sm:gap-4",
            div { class: "w-10 h-10 sm:w-12 sm:h-12 shrink-0 flex items-center justify-center bg-slate-200 rounded-full font-bold", "{profile.avatar}" }
            div {
                class: "flex-1",
                div { class: "font-medium", "{profile.name}" }
                div { class: "text-sm text-slate-500", "Class of {profile.year}" }
                span { class: "inline-block mt-1 px-2 py-0.5 rounded-full text-xs {badge}", "{profile.user_type}" }
                if !profile.bio.is_empty() {
                    p { class: "mt-1 sm:mt-2 text-sm text-slate-600", "{profile.bio}" }
                }
            }
        }
    }
}
