//! Process-wide tuning for the concurrent search family.
//!
//! The only knob is the chunk multiplier: a concurrent search splits its work
//! across [`parallelism()`] workers only when the container holds at least
//! `parallelism() * chunk_multiplier()` elements, otherwise it scans with a
//! single worker. The value never affects results, only how they are computed.
//!
//! The multiplier starts at [`DEFAULT_CHUNK_MULTIPLIER`] unless the
//! [`CHUNK_MULTIPLIER_ENV`] environment variable holds a valid unsigned integer
//! when it is first read. [`set_chunk_multiplier`] overrides both.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

/// Default chunk multiplier.
pub const DEFAULT_CHUNK_MULTIPLIER: usize = 4;

/// Environment variable consulted once for an initial chunk multiplier.
pub const CHUNK_MULTIPLIER_ENV: &str = "SEQCORE_CHUNK_MULTIPLIER";

static CHUNK_MULTIPLIER: AtomicUsize = AtomicUsize::new(DEFAULT_CHUNK_MULTIPLIER);
static ENVIRONMENT: Once = Once::new();

fn load_environment() {
    ENVIRONMENT.call_once(|| {
        let Ok(raw) = std::env::var(CHUNK_MULTIPLIER_ENV) else {
            return;
        };

        match raw.trim().parse::<usize>() {
            Ok(value) => {
                tracing::debug!(value, "chunk multiplier taken from environment");
                CHUNK_MULTIPLIER.store(value, Ordering::Relaxed);
            }
            Err(error) => {
                tracing::warn!(%raw, %error, "ignoring invalid {}", CHUNK_MULTIPLIER_ENV);
            }
        }
    });
}

/// Current chunk multiplier.
pub fn chunk_multiplier() -> usize {
    load_environment();
    CHUNK_MULTIPLIER.load(Ordering::Relaxed)
}

/// Replaces the chunk multiplier for the whole process.
///
/// A value of `0` makes every non-empty search use all workers.
pub fn set_chunk_multiplier(value: usize) {
    // environment must not overwrite an explicit value later on
    load_environment();
    CHUNK_MULTIPLIER.store(value, Ordering::Relaxed);
}

/// Number of workers a concurrent search may use.
pub fn parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}
