//! Headless core of the AlumniConnect landing page: directory data, form
//! validation, the immutable state container and the mock auth flows.
//! Nothing here depends on a renderer.

pub mod auth;
pub mod config;
pub mod delay;
pub mod form;
pub mod models;
pub mod search;
pub mod state;
pub mod strength;

pub use auth::MockAuth;
pub use config::AlumniConfig;
pub use delay::{Delay, InstantDelay};
pub use form::{Field, FormState, ValidationError};
pub use models::{Profile, Section, UserType};
pub use search::filter_profiles;
pub use state::{Action, AppState, AuthState, Modal, StatusLevel, StatusMessage};
pub use strength::{password_strength, strength_fill_percent, StrengthLevel, MAX_STRENGTH};
