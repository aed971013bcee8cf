//! Trailing-edge debouncing for bursty value streams
//!
//! This crate coalesces rapid-fire updates (slider drags, keystrokes,
//! file events) into a single delivery of the most recent value once the
//! stream has been quiet for a configured window:
//! - One timer task per burst, re-armed in place instead of respawned
//! - Last value wins, never delivered earlier than window after the
//!   final update
//! - Cancellation by dropping the handle, safe at any point
//!
//! [`Debouncer`] is the ready-to-use facade. The pieces it is built
//! from, [`DebounceMachine`] and [`StateCell`], are public for callers
//! that need to drive the timing themselves.

pub mod cell;
pub mod debouncer;
pub mod machine;

pub use cell::StateCell;
pub use debouncer::Debouncer;
pub use machine::{DebounceMachine, Wake};
