use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Single threaded timer source used to drive a [`Debouncer`](crate::Debouncer).
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
    /// Runs `task` on the current thread's executor.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// Timer backed by tokio. Tasks go through [`tokio::task::spawn_local`], so
/// this must be used from inside a [`tokio::task::LocalSet`].
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "tokio")]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}
