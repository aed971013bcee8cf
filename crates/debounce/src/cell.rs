//! Mutex-guarded shared state with closure-scoped access.

use parking_lot::Mutex;

/// Shared mutable state behind a mutex.
///
/// Every access runs with the lock held and the lock is released on all
/// exit paths, including a panic inside an [`update`](Self::update)
/// closure. Compound read-modify-write sequences belong in a single
/// `update` call; a [`get`](Self::get) followed by a [`set`](Self::set)
/// is two critical sections and other threads can interleave between
/// them.
#[derive(Debug, Default)]
pub struct StateCell<T> {
    inner: Mutex<T>,
}

impl<T> StateCell<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.inner.lock() = value;
    }

    /// Run a closure against the value with the lock held and pass its
    /// result back out.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T: Clone> StateCell<T> {
    /// Snapshot the current value.
    pub fn get(&self) -> T {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_get_returns_snapshot() {
        let cell = StateCell::new(7);
        assert_eq!(cell.get(), 7);

        let snapshot = cell.get();
        cell.set(8);
        assert_eq!(snapshot, 7);
        assert_eq!(cell.get(), 8);
    }

    #[test]
    fn test_update_passes_result_out() {
        let cell = StateCell::new(String::from("colorwell"));
        let len = cell.update(|s| {
            s.push('!');
            s.len()
        });
        assert_eq!(len, 10);
        assert_eq!(cell.get(), "colorwell!");
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let cell = Arc::new(StateCell::new(0u64));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let cell = Arc::clone(&cell);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    cell.update(|n| *n += 1);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cell.get(), 8000);
    }

    #[test]
    fn test_lock_released_after_panicking_closure() {
        let cell = StateCell::new(1);

        let result = catch_unwind(AssertUnwindSafe(|| {
            cell.update(|_| panic!("boom"));
        }));
        assert!(result.is_err());

        // The panic must not leave the lock held.
        assert_eq!(cell.get(), 1);
        cell.set(2);
        assert_eq!(cell.get(), 2);
    }
}
