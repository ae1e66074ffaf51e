use std::time::Duration;

/// Artificial delay applied before each service call resolves,
/// standing in for network latency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const NONE: Latency = Latency(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Latency(Duration::from_millis(ms))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        sleep(self.0).await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
