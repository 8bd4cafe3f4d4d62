use shared::Timer;
use std::future::Future;
use std::time::Duration;

/// Browser event-loop timer for the classifier's simulated delays.
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
