//! # Landing page state container
//!
//! [`AppState`] is an immutable snapshot of everything the page renders.
//! It never changes in place: [`AppState::apply`] takes an [`Action`] and
//! returns the next snapshot, so every transition can be tested without a
//! renderer.
//!
//! ## Transitions
//!
//! | Action | Effect |
//! |--------|--------|
//! | `OpenModal` | Show one modal (replacing any other) and clear the status message. |
//! | `CloseModal` | Hide the modal and clear the status message. The form keeps its contents. |
//! | `SetField` / `SetUserType` | Edit the form buffer. |
//! | `SetQuery` / `ClearQuery` | Edit the directory search query. |
//! | `Rejected` | Show a validation error. Nothing else changes. |
//! | `DismissMessage` | Clear the status message. |
//! | `SignupRequested` / `LoginRequested` | Enter the loading state. |
//! | `SignupSucceeded` | Prepend the new profile, log in as it, close the signup modal if still open, reset the form. |
//! | `LoginSucceeded` | Log in as the first profile in the directory, close the login modal if still open, reset the form. |
//! | `Logout` | Forget the current user. |

use crate::config::AlumniConfig;
use crate::form::{Field, FormState, ValidationError};
use crate::models::{Profile, UserType};
use crate::search::filter_profiles;

/// Which modal, if any, is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Signup,
    Login,
}

/// Who is signed in. Being logged in and having a user are the same fact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Profile>,
}

impl AuthState {
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Error,
    Success,
}

/// Free-text notice surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }
}

pub const SIGNUP_SUCCESS: &str = "Signup successful!";
pub const NO_PROFILES: &str = "No alumni profiles to sign in as.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenModal(Modal),
    CloseModal,
    SetField(Field, String),
    SetUserType(UserType),
    SetQuery(String),
    ClearQuery,
    Rejected(ValidationError),
    DismissMessage,
    SignupRequested,
    SignupSucceeded(Profile),
    LoginRequested,
    LoginSucceeded,
    Logout,
}

/// Everything the landing page renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub modal: Modal,
    pub loading: bool,
    pub form: FormState,
    /// Newest first.
    pub profiles: Vec<Profile>,
    pub auth: AuthState,
    pub query: String,
    pub message: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AlumniConfig::default())
    }
}

impl AppState {
    /// Fresh session seeded with the configured directory.
    pub fn new(config: &AlumniConfig) -> Self {
        Self {
            modal: Modal::None,
            loading: false,
            form: FormState::default(),
            profiles: config.directory.seed.clone(),
            auth: AuthState::default(),
            query: String::new(),
            message: None,
        }
    }

    /// Profiles matching the current search query.
    pub fn visible_profiles(&self) -> Vec<&Profile> {
        filter_profiles(&self.profiles, &self.query)
    }

    /// Produce the snapshot that follows `action`.
    pub fn apply(&self, action: Action) -> AppState {
        let mut next = self.clone();
        match action {
            Action::OpenModal(modal) => {
                next.modal = modal;
                next.message = None;
            }
            Action::CloseModal => {
                next.modal = Modal::None;
                next.message = None;
            }
            Action::SetField(field, value) => next.form.set(field, value),
            Action::SetUserType(user_type) => next.form.user_type = user_type,
            Action::SetQuery(query) => next.query = query,
            Action::ClearQuery => next.query.clear(),
            Action::Rejected(err) => {
                next.message = Some(StatusMessage::error(err.to_string()));
            }
            Action::DismissMessage => next.message = None,
            Action::SignupRequested | Action::LoginRequested => {
                next.loading = true;
                next.message = None;
            }
            Action::SignupSucceeded(profile) => {
                next.profiles.insert(0, profile.clone());
                next.auth.user = Some(profile);
                next.finish_submit(Modal::Signup);
                next.message = Some(StatusMessage::success(SIGNUP_SUCCESS));
            }
            Action::LoginSucceeded => match next.profiles.first().cloned() {
                Some(profile) => {
                    next.auth.user = Some(profile);
                    next.finish_submit(Modal::Login);
                }
                None => {
                    next.loading = false;
                    next.message = Some(StatusMessage::error(NO_PROFILES));
                }
            },
            Action::Logout => next.auth = AuthState::default(),
        }
        next
    }

    /// End a submit started from `origin`. A modal opened during the
    /// wait stays on screen.
    fn finish_submit(&mut self, origin: Modal) {
        self.loading = false;
        if self.modal == origin {
            self.modal = Modal::None;
        }
        self.form = FormState::default();
    }
}
