//! Last-write-wins debouncing on a single thread.
//!
//! Every call to [`Debouncer::schedule`] aborts the timer started by the
//! previous call, so for a burst of calls only the last value is ever handed
//! to the action, once the quiet period has passed without another call.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use futures::future::{AbortHandle, Abortable};
use tracing::trace;

use crate::timer::Timer;

struct Pending<T> {
    value: Option<T>,
    handle: Option<AbortHandle>,
}

impl<T> Pending<T> {
    fn clear(&mut self) -> Option<T> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.value.take()
    }
}

pub struct Debouncer<T: 'static> {
    timer: Box<dyn Timer>,
    quiet_period: Duration,
    action: Rc<dyn Fn(T)>,
    pending: Rc<RefCell<Pending<T>>>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(
        timer: impl Timer + 'static,
        quiet_period: Duration,
        action: impl Fn(T) + 'static,
    ) -> Self {
        Self {
            timer: Box::new(timer),
            quiet_period,
            action: Rc::new(action),
            pending: Rc::new(RefCell::new(Pending {
                value: None,
                handle: None,
            })),
        }
    }

    /// Records `value` and restarts the quiet period, superseding anything still pending.
    pub fn schedule(&self, value: T) {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut pending = self.pending.borrow_mut();
            if let Some(previous) = pending.handle.replace(handle) {
                previous.abort();
                trace!("debounce timer superseded");
            }
            pending.value = Some(value);
        }
        // an aborted sleep resolves to Err even if it elapsed before being polled
        let sleep = Abortable::new(self.timer.sleep(self.quiet_period), registration);
        let pending = Rc::downgrade(&self.pending);
        let action = Rc::clone(&self.action);
        self.timer.spawn_local(Box::pin(async move {
            if sleep.await.is_err() {
                return;
            }
            if let Some(value) = take_elapsed(&pending) {
                action(value);
            }
        }));
    }

    /// Drops the pending value without running the action.
    pub fn cancel(&self) -> bool {
        let cancelled = self.pending.borrow_mut().clear().is_some();
        if cancelled {
            trace!("debounce timer cancelled");
        }
        cancelled
    }

    /// Runs the action right away with the pending value, if there is one.
    pub fn flush(&self) -> bool {
        let value = self.pending.borrow_mut().clear();
        match value {
            Some(value) => {
                (self.action)(value);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().handle.is_some()
    }
}

fn take_elapsed<T>(pending: &Weak<RefCell<Pending<T>>>) -> Option<T> {
    let pending = pending.upgrade()?;
    let mut pending = pending.borrow_mut();
    pending.handle = None;
    pending.value.take()
}

impl<T: 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.pending.borrow_mut().clear();
    }
}

#[cfg(all(test, feature = "tokio"))]
mod tests {
    use super::*;
    use crate::timer::TokioTimer;
    use std::future::Future;
    use tokio::{task::LocalSet, time::sleep};

    const QUIET: Duration = Duration::from_millis(300);

    async fn local(test: impl Future<Output = ()>) {
        LocalSet::new().run_until(test).await
    }

    fn recording_debouncer() -> (Debouncer<String>, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let debouncer = Debouncer::new(TokioTimer, QUIET, move |term: String| {
            recorded.borrow_mut().push(term)
        });
        (debouncer, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_delivers_only_the_last_value() {
        local(async {
            let (debouncer, calls) = recording_debouncer();
            for term in ["s", "sh", "sho", "shoe", "shoes"] {
                debouncer.schedule(term.to_string());
                sleep(Duration::from_millis(100)).await;
            }
            assert!(calls.borrow().is_empty());
            assert!(debouncer.is_pending());

            sleep(Duration::from_millis(150)).await;
            assert!(calls.borrow().is_empty());

            sleep(Duration::from_millis(100)).await;
            assert_eq!(*calls.borrow(), vec!["shoes"]);
            assert!(!debouncer.is_pending());

            sleep(Duration::from_secs(2)).await;
            assert_eq!(calls.borrow().len(), 1);
        })
        .await
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_out_values_each_fire() {
        local(async {
            let (debouncer, calls) = recording_debouncer();
            debouncer.schedule("a".to_string());
            sleep(Duration::from_millis(400)).await;
            debouncer.schedule("b".to_string());
            sleep(Duration::from_millis(400)).await;
            debouncer.schedule("b".to_string());
            sleep(Duration::from_millis(400)).await;
            assert_eq!(*calls.borrow(), vec!["a", "b", "b"]);
        })
        .await
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels_pending_fire() {
        local(async {
            let (debouncer, calls) = recording_debouncer();
            debouncer.schedule("gone".to_string());
            sleep(Duration::from_millis(100)).await;
            drop(debouncer);
            sleep(Duration::from_secs(1)).await;
            assert!(calls.borrow().is_empty());
        })
        .await
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_flush() {
        local(async {
            let (debouncer, calls) = recording_debouncer();
            assert!(!debouncer.cancel());

            debouncer.schedule("never".to_string());
            assert!(debouncer.cancel());
            assert!(!debouncer.is_pending());
            sleep(Duration::from_secs(1)).await;
            assert!(calls.borrow().is_empty());

            debouncer.schedule("now".to_string());
            assert!(debouncer.flush());
            assert_eq!(*calls.borrow(), vec!["now"]);
            assert!(!debouncer.flush());
            sleep(Duration::from_secs(1)).await;
            assert_eq!(*calls.borrow(), vec!["now"]);
        })
        .await
    }

    #[tokio::test(start_paused = true)]
    async fn action_can_reschedule() {
        local(async {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let slot: Rc<RefCell<Option<Rc<Debouncer<u32>>>>> = Rc::new(RefCell::new(None));
            let recorded = calls.clone();
            let weak_slot = Rc::downgrade(&slot);
            let debouncer = Rc::new(Debouncer::new(TokioTimer, QUIET, move |n: u32| {
                recorded.borrow_mut().push(n);
                if n < 3 {
                    let Some(slot) = weak_slot.upgrade() else {
                        return;
                    };
                    let debouncer = slot.borrow().clone();
                    if let Some(debouncer) = debouncer {
                        debouncer.schedule(n + 1);
                    }
                }
            }));
            *slot.borrow_mut() = Some(debouncer.clone());
            debouncer.schedule(1);
            sleep(Duration::from_secs(2)).await;
            assert_eq!(*calls.borrow(), vec![1, 2, 3]);
            slot.borrow_mut().take();
        })
        .await
    }
}
