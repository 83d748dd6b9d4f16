#![forbid(unsafe_code)]

//! Wheel geometry: sector layout, the forward spin formula, and its inverse.
//!
//! Sectors are laid out counterclockwise in candidate order, each
//! `2π / count` wide; rotating the wheel by `θ` moves sector `i` to
//! `[i·slice + θ, (i+1)·slice + θ)`. The pointer sits at a fixed angle
//! ([`POINTER_ANGLE`], the top of the wheel), so the pointer rests on the
//! midpoint of sector `i` exactly when
//! `θ ≡ POINTER_ANGLE − midpoint(i)  (mod 2π)`.
//!
//! # Invariants
//!
//! 1. The forward formula ([`SpinPlan::for_target`]) and the inverse
//!    ([`sector_at`]) agree for every `(target_index, count, turns)` —
//!    exact integer equality, pinned by tests.
//! 2. A plan's `final_angle` exceeds any normalized start angle (whole
//!    forward turns only; the wheel never decelerates backward).
//! 3. Angles accumulate unbounded during a spin; [`normalize`] is applied
//!    only at settle, to keep interpolation free of wraparound artifacts.
//!
//! # Failure Modes
//!
//! - `count == 0`: sector width is undefined; planning functions panic.
//!   Callers refuse to start a spin on an empty candidate set first.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use rand::Rng;

/// Fixed angular position of the pointer: top of the wheel, aimed at the
/// center.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Whole forward turns added to every spin, drawn per spin. Enough
/// rotation to read as a committed spin, never so much it drags.
pub const TURN_BAND: RangeInclusive<u32> = 12..=16;

/// Spin duration band in milliseconds, drawn per spin.
pub const DURATION_BAND_MS: Range<u64> = 3200..3900;

/// Angular width of one sector.
#[must_use]
pub fn slice_width(count: usize) -> f64 {
    assert!(count > 0, "sector width undefined for an empty wheel");
    TAU / count as f64
}

/// Midpoint angle of sector `index` on an unrotated wheel.
#[must_use]
pub fn sector_midpoint(index: usize, count: usize) -> f64 {
    let slice = slice_width(count);
    index as f64 * slice + slice / 2.0
}

/// Fold an accumulated angle into `[0, 2π)`.
#[must_use]
pub fn normalize(angle: f64) -> f64 {
    let folded = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if folded >= TAU { 0.0 } else { folded }
}

/// Which sector rests under the pointer at rotation `angle`.
///
/// This is the exact inverse of [`SpinPlan::for_target`]: resolving a plan's
/// normalized `final_angle` recovers its `target_index`. The runtime carries
/// the target through the spin instead of reconstructing it, but hosts use
/// this to display the sector under the pointer while the wheel is moving.
#[must_use]
pub fn sector_at(angle: f64, count: usize) -> usize {
    let slice = slice_width(count);
    let rel = (TAU - normalize(angle) + POINTER_ANGLE).rem_euclid(TAU);
    let index = (rel / slice) as usize;
    // rel/slice can graze count at the wrap seam.
    index.min(count - 1)
}

/// A fully determined spin: chosen target, absolute final rotation, and
/// duration. Computed once at spin start and immutable for the spin's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Index of the winning candidate, in candidate-set order.
    pub target_index: usize,
    /// Absolute (unnormalized) rotation the wheel settles on.
    pub final_angle: f64,
    /// Animation duration, fixed at spin start.
    pub duration: Duration,
}

impl SpinPlan {
    /// Deterministic planning kernel: the final angle that parks the pointer
    /// on the midpoint of `target_index`'s sector after `turns` whole
    /// forward rotations.
    ///
    /// The session's start angle is a settled (normalized) angle in
    /// `[0, 2π)`, so any `turns` in [`TURN_BAND`] lands the final angle well
    /// ahead of it.
    #[must_use]
    pub fn for_target(
        target_index: usize,
        count: usize,
        turns: u32,
        duration: Duration,
    ) -> SpinPlan {
        assert!(
            target_index < count,
            "target index {target_index} out of range for {count} candidates"
        );
        let final_angle =
            f64::from(turns) * TAU + POINTER_ANGLE - sector_midpoint(target_index, count);
        SpinPlan {
            target_index,
            final_angle,
            duration,
        }
    }
}

/// Plan a spin over `count` candidates: target drawn uniformly, turn count
/// and duration jittered within their bands.
///
/// Every candidate wins with probability `1/count`. The RNG is injected so
/// hosts can seed it and tests can fix it.
pub fn plan_spin(count: usize, rng: &mut impl Rng) -> SpinPlan {
    assert!(count > 0, "cannot plan a spin over an empty candidate set");
    let target_index = rng.random_range(0..count);
    let turns = rng.random_range(TURN_BAND);
    let duration = Duration::from_millis(rng.random_range(DURATION_BAND_MS));
    SpinPlan::for_target(target_index, count, turns, duration)
}
