use std::time::Duration;

use store::Delay;

/// Platform timer backing the simulated auth latency.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}
