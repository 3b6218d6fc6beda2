use std::future::Future;
use std::time::Duration;

/// Async pause used to simulate a network round-trip.
///
/// The UI supplies a real timer; tests supply [`InstantDelay`] so the
/// mock auth flows complete without waiting.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// A delay that resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantDelay;

impl Delay for InstantDelay {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}
