use dioxus::prelude::*;
use store::Modal;

use crate::directory::Directory;
use crate::features::Features;
use crate::footer::{CallToAction, Footer};
use crate::header::Header;
use crate::hero::Hero;
use crate::login_form::LoginForm;
use crate::signup_form::SignupForm;
use crate::state::use_landing;
use crate::status::StatusBanner;
use crate::TAILWIND_CSS;

/// The whole landing page. Must be rendered inside a `LandingProvider`.
#[component]
pub fn LandingView() -> Element {
    let state = use_landing();
    let modal = state.read().modal;

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }

        div {
            class: "min-h-screen bg-gradient-to-b from-slate-50 to-white text-slate-900",
            Header {}
            StatusBanner {}

            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6",
                Hero {}
                Features {}
                Directory {}
                CallToAction {}
                Footer {}
            }

            {match modal {
                Modal::Signup => rsx! { SignupForm {} },
                Modal::Login => rsx! { LoginForm {} },
                Modal::None => rsx! {},
            }}
        }
    }
}
