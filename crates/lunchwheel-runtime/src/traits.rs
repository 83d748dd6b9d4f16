#![forbid(unsafe_code)]

//! Collaborator seams: storage, rendering, and wall-clock time.
//!
//! The runtime never touches a storage medium, a terminal, or the system
//! clock directly — hosts inject implementations, and tests inject fakes.

use chrono::{DateTime, Utc};
use lunchwheel_core::Item;
use thiserror::Error;

/// A persistence failure surfaced at spin settle.
///
/// Deliberately opaque: the runtime reports it and moves on; the concrete
/// store keeps its own richer error type.
#[derive(Debug, Error)]
#[error("persistence failed: {0}")]
pub struct PersistError(pub String);

/// Persistent storage for the item list.
pub trait Storage {
    /// Load the item list. Fails soft: malformed or missing data yields an
    /// empty list, never an error.
    fn load(&mut self) -> Vec<Item>;

    /// Persist the full item list.
    fn save(&mut self, items: &[Item]) -> Result<(), PersistError>;
}

/// Receives one frame per animation tick, and one more after settling with
/// the normalized angle. Rendering must be idempotent — the runtime may
/// hand it the same angle twice.
pub trait WheelRenderer {
    fn frame(&mut self, angle: f64, candidates: &[Item]);
}

/// Wall-clock source for the "last chosen" stamp.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
