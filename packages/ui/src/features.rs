use dioxus::prelude::*;
use store::Section;

use crate::nav::{register_anchor, use_section_anchors};

const FEATURES: [(&str, &str); 3] = [
    (
        "Register & Verify",
        "Quick sign-up and optional verification. Keep your details private or public as you choose.",
    ),
    (
        "Update Profile",
        "Add work, projects, skills, and interests. Keep your alumni profile current.",
    ),
    (
        "Network & Mentor",
        "Search alumni by batch, skills, or location. Request mentorship or share opportunities.",
    ),
];

#[component]
pub fn Features() -> Element {
    let anchors = use_section_anchors();

    rsx! {
        section {
            id: Section::Features.anchor_id(),
            class: "py-10",
            onmounted: move |evt: MountedEvent| register_anchor(anchors, Section::Features, evt.data()),
            h3 { class: "text-xl sm:text-2xl font-semibold", "What you can do" }
            div {
                class: "mt-5 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4",
                for (title, desc) in FEATURES {
                    FeatureCard { key: "{title}", title: title.to_string(), desc: desc.to_string() }
                }
            }
        }
    }
}

#[component]
pub fn FeatureCard(title: String, desc: String) -> Element {
    rsx! {
        div {
            class: "p-3 sm:p-4 border border-slate-200 rounded-lg bg-white",
            h4 { class: "font-semibold", "{title}" }
            p { class: "mt-1 text-sm text-slate-600", "{desc}" }
        }
    }
}
