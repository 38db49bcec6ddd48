//! [`ScopedEnv`] for tests that mutate process environment variables.
//!
//! Environment state is process-global, so tests touching it must not
//! run concurrently. Constructing a [`ScopedEnv`] takes a process-wide
//! lock held until drop, and every mutation made through it is undone on
//! drop in reverse order.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serialized, self-restoring environment mutation for tests.
pub struct ScopedEnv {
    _guard: MutexGuard<'static, ()>,
    saved: Vec<(OsString, Option<OsString>)>,
}

impl ScopedEnv {
    /// Acquire the environment lock. Blocks until no other [`ScopedEnv`]
    /// is alive anywhere in the process.
    pub fn new() -> Self {
        let guard = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            // A test that panicked while holding the lock must not wedge
            // every later test.
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            _guard: guard,
            saved: Vec::new(),
        }
    }

    /// Set `key` to `value`, remembering the previous state.
    pub fn set(&mut self, key: &str, value: impl AsRef<OsStr>) {
        self.saved.push((OsString::from(key), env::var_os(key)));
        // SAFETY: all environment mutation in the test suites goes through
        // ScopedEnv, which holds ENV_LOCK for its whole lifetime.
        unsafe { env::set_var(key, value) };
    }

    /// Remove `key`, remembering the previous state.
    pub fn remove(&mut self, key: &str) {
        self.saved.push((OsString::from(key), env::var_os(key)));
        // SAFETY: as in `set`.
        unsafe { env::remove_var(key) };
    }
}

impl Default for ScopedEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            // SAFETY: as in `set`; the lock is still held during drop.
            match value {
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            }
        }
    }
}
