//! Coalescing state machine for trailing-edge debouncing.
//!
//! Pure transition logic: no tasks, no locks, no clock reads beyond
//! stamping due times. The caller feeds updates in through
//! [`DebounceMachine::record`] and runs a single timer off the returned
//! due times; the machine decides at each expiry whether the timer
//! re-arms or the burst is over.
//!
//! # State Machine
//!
//! ```text
//!           record(v) -> Some(due)
//!  Idle ──────────────────────────► Debouncing ◄──┐
//!   ▲                                   │  │      │ record(v') -> None
//!   │                                   │  │      │   (value coalesced, due pushed out)
//!   │      wake() -> Deliver(last)      │  │      │ wake() -> Rearm(due')
//!   │      (no update since the         │  └──────┘   (an update landed mid-sleep)
//!   │       worker last went to sleep)  │
//!   └───────────────────────────────────┘
//! ```
//!
//! - **Idle:** No burst in progress. The next update starts one.
//! - **Debouncing:** A burst is live and exactly one worker is timing
//!   it. Further updates replace the pending value and push the due
//!   time out; they never start a second worker.

use std::time::Duration;

use tokio::time::Instant;

/// Result of [`DebounceMachine::wake`], telling the worker what its
/// timer expiry meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wake<T> {
    /// An update arrived while the worker slept. Sleep again until the
    /// new due time.
    Rearm(Instant),

    /// The stream stayed quiet for a full window. Deliver this value
    /// and let the worker finish; the machine is idle again.
    Deliver(T),
}

/// Internal state of the machine.
#[derive(Debug)]
enum State<T> {
    Idle,
    Debouncing {
        /// Most recent value, the only candidate for delivery.
        value: T,
        /// When the current quiet window ends.
        due: Instant,
        /// Whether an update landed since the worker last went to sleep.
        refreshed: bool,
    },
}

/// A trailing-edge debounce machine.
///
/// Coalesces a burst of updates into one delivery of the latest value,
/// no earlier than `window` after the final update. The machine only
/// decides; the caller owns the worker that sleeps and calls
/// [`wake`](Self::wake).
#[derive(Debug)]
pub struct DebounceMachine<T> {
    window: Duration,
    state: State<T>,
}

impl<T> DebounceMachine<T> {
    /// Create a machine with the given quiet window.
    ///
    /// A zero window is allowed: due times land on the current instant
    /// and delivery happens on the worker's first wake.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: State::Idle,
        }
    }

    /// The configured quiet window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether no burst is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Record an update.
    ///
    /// | State | Result |
    /// |-------|--------|
    /// | Idle | `Some(due)`: a burst started; start exactly one worker sleeping until `due` |
    /// | Debouncing | `None`: value replaced and due pushed to `now + window`; the live worker picks it up |
    #[must_use = "Some(due) means the caller must start the worker for this burst"]
    pub fn record(&mut self, value: T) -> Option<Instant> {
        let due = Instant::now() + self.window;
        match &mut self.state {
            State::Idle => {
                self.state = State::Debouncing {
                    value,
                    due,
                    refreshed: false,
                };
                Some(due)
            }
            State::Debouncing {
                value: pending,
                due: deadline,
                refreshed,
            } => {
                *pending = value;
                *deadline = due;
                *refreshed = true;
                None
            }
        }
    }

    /// Handle a worker timer expiry.
    ///
    /// | State | Mid-sleep update? | Result |
    /// |-------|-------------------|--------|
    /// | Debouncing | yes | [`Wake::Rearm`] with the pushed-out due time |
    /// | Debouncing | no | [`Wake::Deliver`] with the final value, machine idle again |
    /// | Idle | n/a | panics |
    ///
    /// # Panics
    ///
    /// Panics when called while idle. Only the single worker started by
    /// a `Some` return from [`record`](Self::record) may call this, and
    /// only until it gets [`Wake::Deliver`]; a wake with no burst in
    /// progress means the caller is running a worker the machine never
    /// asked for.
    pub fn wake(&mut self) -> Wake<T> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Debouncing {
                value,
                due,
                refreshed: true,
            } => {
                self.state = State::Debouncing {
                    value,
                    due,
                    refreshed: false,
                };
                Wake::Rearm(due)
            }
            State::Debouncing {
                value,
                refreshed: false,
                ..
            } => Wake::Deliver(value),
            State::Idle => {
                panic!("debounce wake with no burst in progress: wake() may only be called by the worker that record() asked for")
            }
        }
    }
}
