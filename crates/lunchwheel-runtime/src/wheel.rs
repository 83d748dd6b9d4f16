#![forbid(unsafe_code)]

//! The spin state machine: idle → spinning → idle.
//!
//! [`Wheel`] owns the item list, the resting angle, and the (at most one)
//! in-flight [`SpinSession`]. Hosts call [`Wheel::request_spin`] on a
//! trigger and [`Wheel::tick`] once per frame with a monotonic timestamp.
//!
//! # Invariants
//!
//! 1. Single flight: a request while spinning is a no-op, never queued.
//! 2. An empty candidate set refuses to spin and changes no state.
//! 3. Settle runs on one logical turn: stamp the winner, persist, report —
//!    and the machine lands in idle even when persistence fails.
//! 4. The resting angle is always normalized into [0, 2π); only an
//!    in-flight session works with unbounded angles.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use lunchwheel_core::{Item, RecencyRule, SpinPlan, eligible, normalize, plan_spin};

use crate::session::{Frame, SpinSession};
use crate::traits::{Clock, PersistError, Storage, WheelRenderer};

/// Errors a spin request can surface. All recoverable; the machine stays
/// (or lands) in idle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    /// The filter left nothing to spin over. Add items or relax the rule.
    #[error("no eligible candidates to spin")]
    EmptyCandidates,
}

pub type Result<T> = std::result::Result<T, SpinError>;

/// Outcome of a spin request. Already-spinning is an outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A session started: `candidates` entries, animating for `duration`.
    Started {
        candidates: usize,
        duration: Duration,
    },
    /// A spin is in flight; the request was ignored.
    AlreadySpinning,
}

/// The settle report handed to the host.
#[derive(Debug)]
pub struct Settled {
    /// The winning item, timestamp already stamped.
    pub winner: Item,
    /// The normalized resting angle (the next spin's start angle).
    pub angle: f64,
    /// Set when persisting the list failed. The spin is still complete;
    /// the host may retry persistence independently.
    pub persist_error: Option<PersistError>,
}

/// What one tick produced.
#[derive(Debug)]
pub enum Tick {
    /// Nothing in flight.
    Idle,
    /// Mid-spin; the renderer has been fed this rotation.
    Frame(f64),
    /// The spin settled.
    Settled(Settled),
    /// The session was cancelled; no winner, angle unchanged.
    Cancelled,
}

/// The wheel: item list, resting angle, recency rule, and the spin slot.
#[derive(Debug)]
pub struct Wheel {
    items: Vec<Item>,
    rule: RecencyRule,
    angle: f64,
    session: Option<SpinSession>,
}

impl Wheel {
    #[must_use]
    pub fn new(items: Vec<Item>, rule: RecencyRule) -> Self {
        Self {
            items,
            rule,
            angle: 0.0,
            session: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The resting (or pre-spin) normalized angle.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// The candidate set a spin started now would run over.
    #[must_use]
    pub fn eligible_now(&self, clock: &impl Clock) -> Vec<Item> {
        eligible(&self.items, self.rule, clock.now_utc())
    }

    /// Reset the pointer to the zero rotation. Ignored while spinning.
    /// Returns whether the reset happened.
    pub fn reset_pointer(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.angle = 0.0;
        true
    }

    /// Request a spin: filter, plan, and open the session.
    ///
    /// `now` is the monotonic timestamp of this instant (the session's start
    /// time). While a session is in flight this is a silent no-op.
    pub fn request_spin(
        &mut self,
        rng: &mut impl Rng,
        clock: &impl Clock,
        now: Duration,
    ) -> Result<RequestOutcome> {
        if self.is_spinning() {
            debug!("spin requested while spinning; ignored");
            return Ok(RequestOutcome::AlreadySpinning);
        }
        let candidates = self.eligible_now(clock);
        if candidates.is_empty() {
            return Err(SpinError::EmptyCandidates);
        }
        let plan = plan_spin(candidates.len(), rng);
        self.start(candidates, plan, now)
    }

    /// Request a spin with a caller-supplied plan.
    ///
    /// Same state rules as [`request_spin`](Self::request_spin); used by
    /// deterministic hosts and the test harness. The plan's target must fit
    /// the current candidate set.
    pub fn request_spin_with(
        &mut self,
        plan: SpinPlan,
        clock: &impl Clock,
        now: Duration,
    ) -> Result<RequestOutcome> {
        if self.is_spinning() {
            debug!("spin requested while spinning; ignored");
            return Ok(RequestOutcome::AlreadySpinning);
        }
        let candidates = self.eligible_now(clock);
        if candidates.is_empty() {
            return Err(SpinError::EmptyCandidates);
        }
        self.start(candidates, plan, now)
    }

    fn start(
        &mut self,
        candidates: Vec<Item>,
        plan: SpinPlan,
        now: Duration,
    ) -> Result<RequestOutcome> {
        let count = candidates.len();
        let duration = plan.duration;
        info!(
            candidates = count,
            target = plan.target_index,
            duration_ms = duration.as_millis() as u64,
            "spin started"
        );
        self.session = Some(SpinSession::begin(candidates, self.angle, plan, now));
        Ok(RequestOutcome::Started {
            candidates: count,
            duration,
        })
    }

    /// Cancel an in-flight spin. Idle is a no-op. The resting angle keeps
    /// its pre-spin value; nothing is stamped or persisted.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.stop();
            info!("spin cancelled");
        }
        self.session = None;
    }

    /// Advance the animation to monotonic instant `now`.
    ///
    /// Mid-spin the renderer receives the frame's rotation. On completion
    /// the winner is stamped via `clock`, the list is persisted through
    /// `storage`, the renderer gets one final frame with the normalized
    /// angle, and the machine returns to idle.
    ///
    /// Hosts must feed non-decreasing timestamps.
    pub fn tick(
        &mut self,
        now: Duration,
        renderer: &mut impl WheelRenderer,
        storage: &mut impl Storage,
        clock: &impl Clock,
    ) -> Tick {
        let Some(session) = self.session.take() else {
            return Tick::Idle;
        };
        match session.frame(now) {
            Frame::Running(angle) => {
                renderer.frame(angle, session.candidates());
                self.session = Some(session);
                Tick::Frame(angle)
            }
            Frame::Stopped => Tick::Cancelled,
            Frame::Done(final_angle) => {
                let settled = normalize(final_angle);
                self.angle = settled;

                let when = clock.now_utc();
                let mut winner = session.winner().clone();
                winner.mark_chosen(when);
                if let Some(item) = self.items.iter_mut().find(|i| i.name == winner.name) {
                    item.mark_chosen(when);
                }

                let persist_error = storage.save(&self.items).err();
                if let Some(err) = &persist_error {
                    warn!(%err, "winner kept, persistence failed");
                }

                renderer.frame(settled, session.candidates());
                info!(winner = %winner.name, angle = settled, "spin settled");

                Tick::Settled(Settled {
                    winner,
                    angle: settled,
                    persist_error,
                })
            }
        }
    }
}
