#![forbid(unsafe_code)]

//! Spin session: one spin's frozen parameters and its frame scheduler.
//!
//! A [`SpinSession`] is created at spin start and destroyed at settle. It
//! carries the candidate snapshot, the plan (target, final angle, duration),
//! and the start instant; [`SpinSession::frame`] maps any monotonic
//! timestamp to the rotation at that instant. The session never reads a
//! clock — the caller feeds timestamps in, so a test harness can drive the
//! whole animation with synthetic time.
//!
//! # Invariants
//!
//! 1. All parameters are fixed at construction; nothing is recomputed
//!    mid-flight (no index drift, no duration drift).
//! 2. Interpolation anchors at the frozen `start_angle` and runs on the
//!    unbounded accumulated angle — normalization happens at settle, not
//!    per frame.
//! 3. At full progress the reported angle is the plan's `final_angle`
//!    bit-for-bit, not a lerp result that merely approximates it.
//! 4. A stopped session reports [`Frame::Stopped`] forever; no rotation or
//!    completion escapes it after [`SpinSession::stop`].

use std::time::Duration;

use lunchwheel_core::{Item, SpinPlan, settle_ease};

/// Linear interpolation on the accumulated (unnormalized) angle.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// What one scheduler step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Mid-spin rotation for this instant; reschedule for the next frame.
    Running(f64),
    /// The spin is complete; the angle is the plan's final angle, exactly.
    Done(f64),
    /// The session was stopped; no further frames will be produced.
    Stopped,
}

/// One in-flight spin.
#[derive(Debug, Clone)]
pub struct SpinSession {
    candidates: Vec<Item>,
    start_angle: f64,
    plan: SpinPlan,
    started_at: Duration,
    stopped: bool,
}

impl SpinSession {
    /// Freeze a spin: candidate snapshot, start angle carried from the
    /// previous settle, the plan, and the start instant.
    #[must_use]
    pub fn begin(
        candidates: Vec<Item>,
        start_angle: f64,
        plan: SpinPlan,
        started_at: Duration,
    ) -> Self {
        assert!(
            plan.target_index < candidates.len(),
            "plan target {} out of range for {} candidates",
            plan.target_index,
            candidates.len()
        );
        Self {
            candidates,
            start_angle,
            plan,
            started_at,
            stopped: false,
        }
    }

    /// The rotation at monotonic instant `now`.
    ///
    /// `progress = min(1, (now − started_at) / duration)`, eased through the
    /// settle curve; timestamps before the start clamp to zero progress.
    #[must_use]
    pub fn frame(&self, now: Duration) -> Frame {
        if self.stopped {
            return Frame::Stopped;
        }
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.plan.duration {
            // Report the planned angle directly: a lerp at t=1 can round
            // away from it, and one ulp here is a wrong-looking pointer.
            return Frame::Done(self.plan.final_angle);
        }
        let progress = elapsed.as_secs_f64() / self.plan.duration.as_secs_f64();
        Frame::Running(lerp(
            self.start_angle,
            self.plan.final_angle,
            settle_ease(progress),
        ))
    }

    /// Stop the session cooperatively. Every later [`frame`](Self::frame)
    /// call reports [`Frame::Stopped`].
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The frozen candidate snapshot, in wheel order.
    #[must_use]
    pub fn candidates(&self) -> &[Item] {
        &self.candidates
    }

    /// The candidate this spin was planned to land on.
    #[must_use]
    pub fn winner(&self) -> &Item {
        &self.candidates[self.plan.target_index]
    }

    #[must_use]
    pub fn plan(&self) -> &SpinPlan {
        &self.plan
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}
