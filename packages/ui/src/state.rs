//! Landing page state context and the glue between Dioxus events and the
//! reducer in [`store::state`].

use dioxus::prelude::*;
use store::{Action, AlumniConfig, AppState, MockAuth};

use crate::delay::TimerDelay;
use crate::nav::SectionAnchors;

/// The mock auth handlers as wired for the running app.
pub type LandingAuth = MockAuth<TimerDelay>;

/// Get the landing page state.
pub fn use_landing() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_mock_auth() -> LandingAuth {
    use_context::<LandingAuth>()
}

/// Replace the current snapshot with the one that follows `action`.
pub fn dispatch(mut state: Signal<AppState>, action: Action) {
    let next = state.peek().apply(action);
    state.set(next);
}

/// Run the signup flow against the current snapshot.
///
/// Validation and the switch to `loading` happen before the task is
/// spawned, so a second click in the same frame is already ignored.
pub fn submit_signup(state: Signal<AppState>, auth: LandingAuth) {
    let snapshot = state.peek().clone();
    let Some(request) = auth.begin_signup(&snapshot, |action| dispatch(state, action)) else {
        return;
    };
    spawn(async move {
        auth.complete_signup(request, move |action| dispatch(state, action))
            .await;
    });
}

/// Run the login flow against the current snapshot.
pub fn submit_login(state: Signal<AppState>, auth: LandingAuth) {
    let snapshot = state.peek().clone();
    if !auth.begin_login(&snapshot, |action| dispatch(state, action)) {
        return;
    }
    spawn(async move {
        auth.complete_login(move |action| dispatch(state, action))
            .await;
    });
}

/// Provider component that owns the landing page state.
/// Wrap the page with this component to enable [`use_landing`].
#[component]
pub fn LandingProvider(config: AlumniConfig, children: Element) -> Element {
    let state = use_signal({
        let config = config.clone();
        move || AppState::new(&config)
    });

    use_context_provider(|| state);
    use_context_provider(|| MockAuth::new(TimerDelay, config.clone()));
    use_context_provider(|| Signal::new(SectionAnchors::default()));

    rsx! {
        {children}
    }
}
