//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod config;
pub use config::load_config;

mod delay;
pub use delay::TimerDelay;

mod state;
pub use state::{
    dispatch, submit_login, submit_signup, use_landing, use_mock_auth, LandingAuth,
    LandingProvider,
};

mod nav;
pub use nav::{register_anchor, scroll_to_section, use_section_anchors, SectionAnchors};

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod features;
pub use features::{FeatureCard, Features};

mod directory;
pub use directory::{Directory, ProfileCard};

mod footer;
pub use footer::{CallToAction, Footer};

mod strength_bar;
pub use strength_bar::PasswordStrengthBar;

mod status;
pub use status::{FormMessage, StatusBanner};

mod signup_form;
pub use signup_form::SignupForm;

mod login_form;
pub use login_form::LoginForm;
