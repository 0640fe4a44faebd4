use contracts::shared::notification::Scheduler;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Runs each task on its own browser timeout. Tasks are never cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}
