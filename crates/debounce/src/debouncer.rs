//! Debounce facade wiring the machine to a Tokio worker task.
//!
//! [`Debouncer`] owns a [`DebounceMachine`] behind a [`StateCell`], a
//! delivery callback, and the join handle of the single worker timing
//! the current burst. Updates go in through [`Debouncer::emit`] from
//! any thread; the settled value comes out through the callback on the
//! worker task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::cell::StateCell;
use crate::machine::{DebounceMachine, Wake};

/// Trailing-edge debouncer.
///
/// Collapses a burst of [`emit`](Self::emit) calls into one invocation
/// of the delivery callback with the most recent value, once emits have
/// been quiet for the window passed to [`new`](Self::new). Each burst
/// is timed by exactly one worker task; emits that land mid-burst
/// update the pending value and push the deadline out without spawning
/// anything.
///
/// Dropping the debouncer (or calling [`cancel`](Self::cancel)) aborts
/// the worker. A worker aborted while it is still sleeping, strictly
/// before the deadline, never delivers; an abort that races the
/// deadline itself is best effort and may let a delivery through.
pub struct Debouncer<T> {
    machine: Arc<StateCell<DebounceMachine<T>>>,
    deliver: Arc<dyn Fn(T) + Send + Sync>,
    runtime: Handle,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that calls `deliver` with the settled value
    /// of each burst.
    ///
    /// The callback runs on the worker task. A callback that panics
    /// kills that worker but leaves the debouncer consistent; the next
    /// emit starts a fresh burst.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime. The runtime handle
    /// is captured here, which is what lets `emit` be called from
    /// threads the runtime knows nothing about.
    pub fn new(window: Duration, deliver: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            machine: Arc::new(StateCell::new(DebounceMachine::new(window))),
            deliver: Arc::new(deliver),
            runtime: Handle::current(),
            worker: Mutex::new(None),
        }
    }

    /// The configured quiet window.
    pub fn window(&self) -> Duration {
        self.machine.update(|machine| machine.window())
    }

    /// Feed a value in. Callable from any thread.
    ///
    /// Starts the burst worker when none is running; otherwise the
    /// value is coalesced and the live worker's deadline pushed out.
    pub fn emit(&self, value: T) {
        // Slot lock first, machine lock second. Workers only ever take
        // the machine lock, so a waking worker never holds emit up for
        // longer than one transition.
        let mut worker = self.worker.lock();
        if let Some(due) = self.machine.update(|machine| machine.record(value)) {
            debug!("burst started, spawning debounce worker");
            let machine = Arc::clone(&self.machine);
            let deliver = Arc::clone(&self.deliver);
            let handle = self.runtime.spawn(run_worker(machine, deliver, due));
            if let Some(stale) = worker.replace(handle) {
                // Left over from the previous burst's worker, which has
                // already delivered and finished. Aborting a finished
                // task does nothing.
                stale.abort();
            }
        }
    }

    /// Tear the debouncer down, discarding any pending value.
    ///
    /// Idempotent by construction: `cancel` consumes the debouncer, and
    /// plain [`drop`] does the same job. The machine state is left
    /// alone on purpose; a worker that has already woken finishes its
    /// final transition instead of finding the burst yanked out from
    /// under it.
    pub fn cancel(self) {
        if let Some(worker) = self.worker.lock().take() {
            debug!("debounce cancelled, aborting worker");
            worker.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Abort lands at the worker's sleep, so a burst that has not
        // reached its deadline is suppressed.
        if let Some(worker) = self.worker.lock().take() {
            worker.abort();
        }
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.machine.update(|machine| machine.window()))
            .finish_non_exhaustive()
    }
}

/// Sleep until the machine hands the settled value out, then deliver it.
async fn run_worker<T: Send + 'static>(
    machine: Arc<StateCell<DebounceMachine<T>>>,
    deliver: Arc<dyn Fn(T) + Send + Sync>,
    mut due: Instant,
) {
    loop {
        sleep_until(due).await;
        match machine.update(|machine| machine.wake()) {
            Wake::Rearm(next) => {
                trace!("updates landed mid-sleep, re-arming");
                due = next;
            }
            Wake::Deliver(value) => {
                debug!("burst settled, delivering");
                deliver(value);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use tokio::time;

    use super::*;

    const WINDOW: Duration = Duration::from_millis(160);

    /// Collects deliveries with the instant they happened at.
    fn logging_debouncer<T: Send + 'static>(
        window: Duration,
    ) -> (Debouncer<T>, Arc<Mutex<Vec<(T, Instant)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let debouncer = Debouncer::new(window, move |value| {
            sink.lock().push((value, Instant::now()));
        });
        (debouncer, log)
    }

    #[tokio::test(start_paused = true)]
    async fn test_lone_emit_delivers_one_window_later() {
        let (debouncer, log) = logging_debouncer(WINDOW);
        let start = Instant::now();

        debouncer.emit("A");
        time::sleep(Duration::from_secs(1)).await;

        assert_eq!(*log.lock(), vec![("A", start + WINDOW)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_burst_settles_on_last_value() {
        let (debouncer, log) = logging_debouncer(WINDOW);
        let start = Instant::now();

        // Three picks 50ms apart; only the final one may come out, one
        // full window after it.
        debouncer.emit("red");
        time::sleep(Duration::from_millis(50)).await;
        debouncer.emit("green");
        time::sleep(Duration::from_millis(50)).await;
        debouncer.emit("blue");
        time::sleep(Duration::from_secs(1)).await;

        assert_eq!(*log.lock(), vec![("blue", start + Duration::from_millis(260))]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_rearms_across_long_burst() {
        let (debouncer, log) = logging_debouncer(WINDOW);
        let start = Instant::now();

        // Emits at 0, 150 and 300ms keep one worker alive through two
        // re-arms; no intermediate value leaks out.
        debouncer.emit("a");
        time::sleep(Duration::from_millis(150)).await;
        debouncer.emit("b");
        time::sleep(Duration::from_millis(150)).await;
        debouncer.emit("c");
        time::sleep(Duration::from_secs(1)).await;

        assert_eq!(*log.lock(), vec![("c", start + Duration::from_millis(460))]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_deliver_separately() {
        let (debouncer, log) = logging_debouncer(WINDOW);
        let start = Instant::now();

        debouncer.emit("a");
        time::sleep(Duration::from_millis(500)).await;
        debouncer.emit("b");
        time::sleep(Duration::from_millis(500)).await;

        assert_eq!(
            *log.lock(),
            vec![
                ("a", start + WINDOW),
                ("b", start + Duration::from_millis(660)),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_before_deadline_suppresses_delivery() {
        let (debouncer, log) = logging_debouncer(WINDOW);

        debouncer.emit("red");
        time::sleep(Duration::from_millis(10)).await;
        drop(debouncer);

        time::sleep(Duration::from_secs(1)).await;
        assert!(log.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_deadline_suppresses_delivery() {
        let (debouncer, log) = logging_debouncer(WINDOW);

        debouncer.emit("red");
        time::sleep(Duration::from_millis(10)).await;
        debouncer.cancel();

        time::sleep(Duration::from_secs(1)).await;
        assert!(log.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_after_delivery_is_harmless() {
        let (debouncer, log) = logging_debouncer(WINDOW);
        let start = Instant::now();

        debouncer.emit("done");
        time::sleep(Duration::from_millis(500)).await;
        drop(debouncer);

        assert_eq!(*log.lock(), vec![("done", start + WINDOW)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_window_delivers_immediately() {
        let (debouncer, log) = logging_debouncer(Duration::ZERO);
        let start = Instant::now();

        debouncer.emit("now");
        time::sleep(Duration::from_millis(1)).await;

        assert_eq!(*log.lock(), vec![("now", start)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_callback_leaves_debouncer_usable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let delivered = Arc::new(Mutex::new(Vec::new()));

        let debouncer = Debouncer::new(WINDOW, {
            let calls = Arc::clone(&calls);
            let delivered = Arc::clone(&delivered);
            move |value: &str| {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    panic!("delivery blew up");
                }
                delivered.lock().push(value);
            }
        });

        // The panic dies with the worker task; the machine went idle
        // before delivery started, so the next burst is clean.
        debouncer.emit("a");
        time::sleep(Duration::from_millis(500)).await;
        debouncer.emit("b");
        time::sleep(Duration::from_millis(500)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*delivered.lock(), vec!["b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_accessor() {
        let (debouncer, _log) = logging_debouncer::<&str>(WINDOW);
        assert_eq!(debouncer.window(), WINDOW);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_emits_from_foreign_threads_settle_once() {
        // Real clock: emit storms from plain threads must still settle
        // to a single delivery of one of the emitted values.
        let log = Arc::new(Mutex::new(Vec::new()));
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(250), {
            let log = Arc::clone(&log);
            move |value: u32| log.lock().push(value)
        }));

        let mut threads = Vec::new();
        for i in 0..8u32 {
            let debouncer = Arc::clone(&debouncer);
            threads.push(thread::spawn(move || debouncer.emit(i)));
        }
        for handle in threads {
            handle.join().unwrap();
        }

        time::sleep(Duration::from_millis(750)).await;

        let log = log.lock();
        assert_eq!(log.len(), 1, "storm must settle exactly once");
        assert!(log[0] < 8);
    }
}
