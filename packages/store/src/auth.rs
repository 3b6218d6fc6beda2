//! # Mock authentication handlers
//!
//! [`MockAuth`] implements the signup, login and logout flows against the
//! in-memory directory. There is no backend: signup validates the form and
//! invents a profile, login accepts any non-empty credentials and signs in
//! as the first profile in the directory. Both pause on the injected
//! [`Delay`] to stand in for a network round-trip.
//!
//! Each flow is split into a synchronous `begin_*` step (guard, validate,
//! enter loading) and an async `complete_*` step, so callers can run the
//! first one before spawning. Handlers never touch state directly. They
//! read a snapshot and report transitions through a `dispatch` callback, which the caller applies
//! with [`AppState::apply`](crate::AppState::apply).

use crate::config::AlumniConfig;
use crate::delay::Delay;
use crate::form::SignupRequest;
use crate::models::random_id;
use crate::state::{Action, AppState};

#[derive(Clone, Debug)]
pub struct MockAuth<D: Delay> {
    delay: D,
    config: AlumniConfig,
}

impl<D: Delay> MockAuth<D> {
    pub fn new(delay: D, config: AlumniConfig) -> Self {
        Self { delay, config }
    }

    /// Validate the signup form in `snapshot` and enter the loading state.
    ///
    /// Runs synchronously so a second submit sees `loading` before any
    /// await. Returns `None` when the submit is rejected or ignored.
    pub fn begin_signup(
        &self,
        snapshot: &AppState,
        mut dispatch: impl FnMut(Action),
    ) -> Option<SignupRequest> {
        if snapshot.loading {
            tracing::debug!("signup ignored: a submit is already in flight");
            return None;
        }
        match snapshot.form.validate_signup() {
            Ok(request) => {
                dispatch(Action::SignupRequested);
                Some(request)
            }
            Err(err) => {
                tracing::debug!(%err, "signup rejected");
                dispatch(Action::Rejected(err));
                None
            }
        }
    }

    /// Wait out the simulated round-trip and publish the new profile.
    pub async fn complete_signup(&self, request: SignupRequest, mut dispatch: impl FnMut(Action)) {
        self.delay.sleep(self.config.signup_latency()).await;

        let profile = request.into_profile(random_id(), &self.config.directory.year_placeholder);
        tracing::info!(profile_id = %profile.id, user_type = %profile.user_type, "signup completed");
        dispatch(Action::SignupSucceeded(profile));
    }

    /// Submit the signup form held in `snapshot`.
    pub async fn register(&self, snapshot: &AppState, mut dispatch: impl FnMut(Action)) {
        if let Some(request) = self.begin_signup(snapshot, &mut dispatch) {
            self.complete_signup(request, dispatch).await;
        }
    }

    /// Validate the login form in `snapshot` and enter the loading state.
    pub fn begin_login(&self, snapshot: &AppState, mut dispatch: impl FnMut(Action)) -> bool {
        if snapshot.loading {
            tracing::debug!("login ignored: a submit is already in flight");
            return false;
        }
        if let Err(err) = snapshot.form.validate_login() {
            tracing::debug!(%err, "login rejected");
            dispatch(Action::Rejected(err));
            return false;
        }
        dispatch(Action::LoginRequested);
        true
    }

    /// Wait out the simulated round-trip and sign in.
    ///
    /// Any non-empty credentials succeed; the session resolves to whichever
    /// profile heads the directory when the delay ends.
    pub async fn complete_login(&self, mut dispatch: impl FnMut(Action)) {
        self.delay.sleep(self.config.login_latency()).await;

        tracing::info!("login completed");
        dispatch(Action::LoginSucceeded);
    }

    /// Submit the login form held in `snapshot`.
    pub async fn login(&self, snapshot: &AppState, mut dispatch: impl FnMut(Action)) {
        if self.begin_login(snapshot, &mut dispatch) {
            self.complete_login(dispatch).await;
        }
    }

    pub fn logout(&self, mut dispatch: impl FnMut(Action)) {
        tracing::info!("logout");
        dispatch(Action::Logout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::Future;
    use std::time::Duration;

    use crate::config::LatencyConfig;
    use crate::delay::InstantDelay;
    use crate::form::Field;
    use crate::models::UserType;
    use crate::state::{Modal, StatusMessage, SIGNUP_SUCCESS};

    /// Resolves immediately but remembers every requested pause.
    #[derive(Default)]
    struct RecordingDelay {
        calls: RefCell<Vec<Duration>>,
    }

    impl Delay for RecordingDelay {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.calls.borrow_mut().push(duration);
            std::future::ready(())
        }
    }

    fn auth() -> MockAuth<InstantDelay> {
        MockAuth::new(InstantDelay, AlumniConfig::default())
    }

    fn with_fields(fields: &[(Field, &str)]) -> AppState {
        fields
            .iter()
            .fold(AppState::default(), |state, (field, value)| {
                state.apply(Action::SetField(*field, value.to_string()))
            })
    }

    fn signup_form() -> AppState {
        with_fields(&[
            (Field::FullName, "Asha Rao"),
            (Field::Email, "asha@example.com"),
            (Field::Password, "Secret#42"),
            (Field::ConfirmPassword, "Secret#42"),
        ])
        .apply(Action::OpenModal(Modal::Signup))
    }

    #[tokio::test]
    async fn test_register_prepends_and_logs_in() {
        let mut state = signup_form().apply(Action::SetUserType(UserType::InCampus));
        let before = state.profiles.len();
        let snapshot = state.clone();
        let mut seen = Vec::new();

        auth()
            .register(&snapshot, |action| {
                seen.push(action.clone());
                state = state.apply(action);
            })
            .await;

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], Action::SignupRequested);
        assert_eq!(state.profiles.len(), before + 1);
        let newest = &state.profiles[0];
        assert_eq!(newest.name, "Asha Rao");
        assert_eq!(newest.avatar, "AR");
        assert_eq!(newest.year, "—");
        assert_eq!(newest.user_type, UserType::InCampus);
        assert_eq!(newest.id.len(), 7);
        assert_eq!(state.auth.user.as_ref(), Some(newest));
        assert_eq!(state.modal, Modal::None);
        assert!(state.form.full_name.is_empty());
        assert!(!state.loading);
        assert_eq!(state.message, Some(StatusMessage::success(SIGNUP_SUCCESS)));
    }

    #[tokio::test]
    async fn test_register_missing_field_leaves_profiles() {
        let mut state = signup_form().apply(Action::SetField(Field::Email, String::new()));
        let snapshot = state.clone();

        auth().register(&snapshot, |a| state = state.apply(a)).await;

        assert_eq!(state.profiles, snapshot.profiles);
        assert_eq!(
            state.message,
            Some(StatusMessage::error("Fill all required fields."))
        );
        assert!(!state.auth.logged_in());
        assert_eq!(state.modal, Modal::Signup);
    }

    #[tokio::test]
    async fn test_register_mismatch_leaves_profiles() {
        let mut state = signup_form().apply(Action::SetField(
            Field::ConfirmPassword,
            "Secret#43".to_string(),
        ));
        let snapshot = state.clone();

        auth().register(&snapshot, |a| state = state.apply(a)).await;

        assert_eq!(state.profiles.len(), 3);
        assert_eq!(
            state.message,
            Some(StatusMessage::error("Passwords do not match."))
        );
    }

    #[tokio::test]
    async fn test_duplicate_signups_are_accepted() {
        let auth = auth();
        let mut state = signup_form();
        for _ in 0..2 {
            let snapshot = state.clone();
            auth.register(&snapshot, |a| state = state.apply(a)).await;
            state = signup_form_over(state);
        }
        assert_eq!(state.profiles.len(), 5);
        assert_eq!(state.profiles[0].name, state.profiles[1].name);
        assert_ne!(state.profiles[0].id, state.profiles[1].id);
    }

    fn signup_form_over(state: AppState) -> AppState {
        [
            (Field::FullName, "Asha Rao"),
            (Field::Email, "asha@example.com"),
            (Field::Password, "pw"),
            (Field::ConfirmPassword, "pw"),
        ]
        .into_iter()
        .fold(state, |s, (field, value)| {
            s.apply(Action::SetField(field, value.to_string()))
        })
    }

    #[tokio::test]
    async fn test_login_ignores_credentials() {
        let mut state = with_fields(&[(Field::Email, "who@ever"), (Field::Password, "wrong")])
            .apply(Action::OpenModal(Modal::Login));
        let snapshot = state.clone();

        auth().login(&snapshot, |a| state = state.apply(a)).await;

        assert!(state.auth.logged_in());
        assert_eq!(state.auth.user.as_ref(), state.profiles.first());
        assert_eq!(state.modal, Modal::None);
        assert!(state.form.email.is_empty());
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        for fields in [
            vec![],
            vec![(Field::Email, "a@b.c")],
            vec![(Field::Password, "pw")],
        ] {
            let mut state = with_fields(&fields);
            let snapshot = state.clone();
            auth().login(&snapshot, |a| state = state.apply(a)).await;
            assert!(!state.auth.logged_in());
            assert_eq!(
                state.message,
                Some(StatusMessage::error("Enter email & password."))
            );
        }
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_existing_session() {
        let mut state = AppState::default().apply(Action::LoginSucceeded);
        let snapshot = state.clone();
        auth().login(&snapshot, |a| state = state.apply(a)).await;
        assert!(state.auth.logged_in());
    }

    #[tokio::test]
    async fn test_latency_comes_from_config() {
        let delay = RecordingDelay::default();
        let config = AlumniConfig {
            latency: LatencyConfig {
                signup_ms: 120,
                login_ms: 45,
            },
            ..AlumniConfig::default()
        };
        let auth = MockAuth::new(delay, config);

        let mut state = signup_form();
        let snapshot = state.clone();
        auth.register(&snapshot, |a| state = state.apply(a)).await;

        let mut state = with_fields(&[(Field::Email, "e"), (Field::Password, "p")]);
        let snapshot = state.clone();
        auth.login(&snapshot, |a| state = state.apply(a)).await;

        assert_eq!(
            *auth.delay.calls.borrow(),
            [Duration::from_millis(120), Duration::from_millis(45)]
        );
    }

    #[tokio::test]
    async fn test_default_latency() {
        let auth = MockAuth::new(RecordingDelay::default(), AlumniConfig::default());
        let mut state = signup_form();
        let snapshot = state.clone();
        auth.register(&snapshot, |a| state = state.apply(a)).await;
        assert_eq!(*auth.delay.calls.borrow(), [Duration::from_millis(800)]);
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let snapshot = signup_form().apply(Action::SignupRequested);
        let mut dispatched = Vec::new();

        auth().register(&snapshot, |a| dispatched.push(a)).await;
        auth().login(&snapshot, |a| dispatched.push(a)).await;

        assert!(dispatched.is_empty());
    }

    #[test]
    fn test_second_begin_after_first_is_applied_does_nothing() {
        let auth = auth();
        let mut state = signup_form();

        let first = auth.begin_signup(&state.clone(), |a| state = state.apply(a));
        assert!(first.is_some());
        assert!(state.loading);

        let mut dispatched = Vec::new();
        let second = auth.begin_signup(&state, |a| dispatched.push(a));
        assert!(second.is_none());
        assert!(!auth.begin_login(&state, |a| dispatched.push(a)));
        assert!(dispatched.is_empty());
    }

    #[tokio::test]
    async fn test_begin_then_complete_matches_register() {
        let auth = auth();
        let mut state = signup_form();

        let request = auth
            .begin_signup(&state.clone(), |a| state = state.apply(a))
            .unwrap();
        assert_eq!(state.modal, Modal::Signup);
        auth.complete_signup(request, |a| state = state.apply(a)).await;

        assert!(!state.loading);
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.profiles[0].name, "Asha Rao");
    }

    #[test]
    fn test_logout() {
        let mut state = AppState::default().apply(Action::LoginSucceeded);
        auth().logout(|a| state = state.apply(a));
        assert!(!state.auth.logged_in());
        assert!(state.auth.user.is_none());
    }
}
