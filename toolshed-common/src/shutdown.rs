//! Ordered cleanup before process exit.
//!
//! A [`ShutdownSequence`] is created by the program entry point and handed to
//! whatever needs to register cleanup work. Callbacks run in reverse
//! registration order, so resources are released in the opposite order they
//! were acquired.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use toolshed_common::ShutdownSequence;
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let shutdown = ShutdownSequence::new();
//!
//! let first = Arc::clone(&log);
//! shutdown.push(move || first.lock().unwrap().push("close database"));
//! let second = Arc::clone(&log);
//! shutdown.push(move || second.lock().unwrap().push("flush cache"));
//!
//! shutdown.run();
//! assert_eq!(*log.lock().unwrap(), vec!["flush cache", "close database"]);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

type Callback = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Hooks {
    next_id: u64,
    pending: Vec<(u64, Callback)>,
}

/// An owned, shareable list of callbacks to run before exiting.
///
/// Cloning yields another handle to the same list.
#[derive(Clone, Default)]
pub struct ShutdownSequence {
    hooks: Arc<Mutex<Hooks>>,
}

impl fmt::Debug for ShutdownSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShutdownSequence")
            .field("pending", &self.len())
            .finish()
    }
}

impl ShutdownSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Hooks> {
        // A panicking hook must not prevent the remaining ones from running.
        self.hooks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `callback` to run on shutdown.
    ///
    /// The returned [`ShutdownHook`] can cancel the registration. Dropping it
    /// keeps the callback registered.
    pub fn push<F>(&self, callback: F) -> ShutdownHook
    where
        F: FnOnce() + Send + 'static,
    {
        let mut hooks = self.lock();
        let id = hooks.next_id;
        hooks.next_id += 1;
        hooks.pending.push((id, Box::new(callback)));
        tracing::trace!(id, "registered shutdown hook");
        ShutdownHook {
            id,
            hooks: Arc::clone(&self.hooks),
        }
    }

    /// Number of callbacks still registered
    pub fn len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Returns true if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every registered callback in reverse registration order.
    ///
    /// The list is drained first and the lock released, so callbacks may
    /// register or cancel hooks without deadlocking. Hooks registered while
    /// running are kept for the next call.
    pub fn run(&self) {
        let pending = std::mem::take(&mut self.lock().pending);
        tracing::debug!(count = pending.len(), "running shutdown hooks");
        for (_, callback) in pending.into_iter().rev() {
            callback();
        }
    }

    /// Run all callbacks, then terminate the process with `code`.
    pub fn exit(&self, code: i32) -> ! {
        self.run();
        std::process::exit(code)
    }

    /// Write `message` to stderr, run all callbacks and exit with code 1.
    pub fn fail(&self, message: impl fmt::Display) -> ! {
        eprintln!("{message}");
        self.exit(1)
    }
}

/// Registration handle returned by [`ShutdownSequence::push`]
#[derive(Debug)]
pub struct ShutdownHook {
    id: u64,
    hooks: Arc<Mutex<Hooks>>,
}

impl ShutdownHook {
    /// Remove the callback from its sequence without running it.
    ///
    /// Returns false if the callback already ran or was cancelled.
    pub fn cancel(self) -> bool {
        let mut hooks = self
            .hooks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match hooks.pending.iter().position(|(id, _)| *id == self.id) {
            Some(index) => {
                hooks.pending.remove(index);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("next_id", &self.next_id)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce() + Send>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |n: u32| {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().unwrap().push(n)) as Box<dyn FnOnce() + Send>
        };
        (log, make)
    }

    #[test]
    fn test_runs_in_reverse_order() {
        let (log, make) = recorder();
        let shutdown = ShutdownSequence::new();
        for n in 1..=3 {
            shutdown.push(make(n));
        }
        shutdown.run();
        assert_eq!(*log.lock().unwrap(), vec![3, 2, 1]);
        assert!(shutdown.is_empty());
    }

    #[test]
    fn test_cancel_removes_only_that_hook() {
        let (log, make) = recorder();
        let shutdown = ShutdownSequence::new();
        shutdown.push(make(1));
        let hook = shutdown.push(make(2));
        shutdown.push(make(3));

        assert!(hook.cancel());
        assert_eq!(shutdown.len(), 2);
        shutdown.run();
        assert_eq!(*log.lock().unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_cancel_after_run_is_noop() {
        let shutdown = ShutdownSequence::new();
        let hook = shutdown.push(|| {});
        shutdown.run();
        assert!(!hook.cancel());
    }

    #[test]
    fn test_hooks_run_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let shutdown = ShutdownSequence::new();
        let counter = Arc::clone(&count);
        shutdown.push(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        shutdown.run();
        shutdown.run();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_hook_may_register_another_hook() {
        let shutdown = ShutdownSequence::new();
        let inner = shutdown.clone();
        shutdown.push(move || {
            inner.push(|| {});
        });
        shutdown.run();
        assert_eq!(shutdown.len(), 1);
    }

    #[test]
    fn test_clones_share_hooks() {
        let shutdown = ShutdownSequence::new();
        let other = shutdown.clone();
        other.push(|| {});
        assert_eq!(shutdown.len(), 1);
        assert!(format!("{:?}", shutdown).contains("pending: 1"));
    }

    #[test]
    fn test_concurrent_registration() {
        let shutdown = ShutdownSequence::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shutdown = shutdown.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        shutdown.push(|| {});
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shutdown.len(), 80);
    }
}
