use dioxus::prelude::*;
use store::{strength_fill_percent, StrengthLevel, MAX_STRENGTH};

/// Proportional bar for a password strength score.
#[component]
pub fn PasswordStrengthBar(score: u8) -> Element {
    let width = strength_fill_percent(score);
    let color = StrengthLevel::from_score(score)
        .map(StrengthLevel::color)
        .unwrap_or("transparent");
    let max = MAX_STRENGTH;

    rsx! {
        div {
            class: "w-full h-2 rounded bg-gray-200 mt-1",
            title: "Password strength {score}/{max}",
            div {
                class: "h-2 rounded transition-all duration-200",
                style: "width: {width}%; background-color: {color};",
            }
        }
    }
}
