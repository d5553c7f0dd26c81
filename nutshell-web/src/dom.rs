use gloo::timers::future::TimeoutFuture;

/// Yield execution for the requested number of milliseconds.
#[allow(clippy::future_not_send)] // Wasm futures are single-threaded.
pub async fn sleep_ms(duration_ms: u32) {
    TimeoutFuture::new(duration_ms).await;
}
