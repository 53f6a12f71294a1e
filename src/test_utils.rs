#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for knob demo unit tests.
//!
//! This module provides common test infrastructure used across multiple test
//! modules. It is only compiled during testing (`#[cfg(test)]`).

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify environment variables.
/// This prevents race conditions when multiple tests run in parallel and try
/// to set different values for the same variable.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a small solid-color PNG fixture as `<dir>/<name>.png`.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 90, 200, 255]));
    image.save(dir.join(format!("{name}.png"))).unwrap();
}

/// RAII guard that sets one environment variable for a test scope and
/// restores the original value when dropped.
///
/// # Safety Considerations
///
/// This guard uses `std::env::set_var` and `std::env::remove_var`, which are
/// marked unsafe because they can cause data races when other threads read
/// environment variables concurrently.
///
/// **Safety Invariants:**
/// 1. The `ENV_LOCK` mutex ensures tests modify the environment serially,
///    not concurrently
/// 2. The guard is RAII-based and restores the original value on drop,
///    preventing environment pollution between tests
/// 3. No additional threads are spawned while a guard is alive within the
///    same test function
///
/// Tests can safely run in parallel (`cargo test --lib`) without
/// `--test-threads=1` because the lock is held for the guard's lifetime.
pub struct EnvVarGuard {
    name: &'static str,
    original: Option<String>,
    // Lock guard must be held for the lifetime of this struct to ensure
    // exclusive access to the environment across parallel tests
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables with documented safety invariants. Safe in parallel test execution."
)]
impl EnvVarGuard {
    /// Create a guard that sets the named variable to the given value.
    pub fn set(name: &'static str, value: impl AsRef<str>) -> Self {
        // Acquire lock to serialize environment modifications across parallel tests
        let lock = ENV_LOCK.lock().unwrap();

        let original = std::env::var(name).ok();
        // SAFETY: This is safe because:
        // 1. The ENV_LOCK mutex guarantees exclusive environment access
        // 2. The guard is RAII-based and restores the original value on drop
        // 3. No other threads are spawned during the test function
        // See struct-level documentation for full safety invariants.
        unsafe {
            std::env::set_var(name, value.as_ref());
        }
        Self {
            name,
            original,
            _lock: lock,
        }
    }

    /// Create a guard that removes the named variable for the test scope.
    pub fn unset(name: &'static str) -> Self {
        let lock = ENV_LOCK.lock().unwrap();

        let original = std::env::var(name).ok();
        // SAFETY: Same invariants as `set`; see struct-level documentation.
        unsafe {
            std::env::remove_var(name);
        }
        Self {
            name,
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables with documented safety invariants. Safe in parallel test execution."
)]
impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: This is safe because:
        // 1. The ENV_LOCK mutex is still held by this guard instance
        // 2. We're restoring the original state, preventing test pollution
        // 3. Drop runs in the same thread that created the guard
        // See struct-level documentation for full safety invariants.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(self.name, original);
            }
        } else {
            unsafe {
                std::env::remove_var(self.name);
            }
        }
    }
}
