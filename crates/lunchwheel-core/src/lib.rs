#![forbid(unsafe_code)]

//! Core: item model, candidate filtering, and wheel geometry.
//!
//! # Role in lunchwheel
//! `lunchwheel-core` is the pure domain layer. It owns the item model, the
//! recency filter that derives the eligible candidate set, the easing curve,
//! and the angle arithmetic that maps a chosen candidate to a final wheel
//! rotation (and back).
//!
//! # Primary responsibilities
//! - **Item**: named entries with an optional last-chosen timestamp.
//! - **Candidate filter**: order-preserving eligibility under a recency rule.
//! - **Spin planning**: uniform target selection, turn count and duration
//!   jitter, and the forward angle formula.
//! - **Sector resolution**: the exact inverse of the forward formula.
//!
//! # How it fits in the system
//! The runtime (`lunchwheel-runtime`) consumes [`SpinPlan`] values and drives
//! the animation; persistence (`lunchwheel-store`) serializes [`Item`] lists.
//! Nothing in this crate performs I/O or reads clocks — callers pass time in.

pub mod angle;
pub mod easing;
pub mod filter;
pub mod model;

pub use angle::{POINTER_ANGLE, SpinPlan, normalize, plan_spin, sector_at, sector_midpoint};
pub use easing::{EasingFn, settle_ease};
pub use filter::{RecencyRule, eligible};
pub use model::{Item, ItemError};
