//! Shared test utilities for `nightlight` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::CONFIG_DIR_ENV;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify `NIGHTLIGHT_CONFIG_DIR`.
static CONFIG_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `NIGHTLIGHT_CONFIG_DIR` at a temp directory for a
/// test scope and restores the original value when dropped.
///
/// `std::env::set_var` is unsafe because another thread may read the
/// environment concurrently. Holding `CONFIG_DIR_LOCK` for the guard's lifetime
/// serializes every test that touches the variable.
pub struct ConfigDirGuard {
    original: Option<std::ffi::OsString>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl ConfigDirGuard {
    /// Create a new guard that sets `NIGHTLIGHT_CONFIG_DIR` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A panicking test poisons the lock; the environment is still restored by Drop
        let lock = CONFIG_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(CONFIG_DIR_ENV);
        // SAFETY: CONFIG_DIR_LOCK is held, so no other test reads or writes the variable.
        unsafe {
            std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until `_lock` drops after this body.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(CONFIG_DIR_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(CONFIG_DIR_ENV);
            }
        }
    }
}
