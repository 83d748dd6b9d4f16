//! Property-based invariant tests for the wheel geometry and easing curves.
//!
//! These pin the invariants the animation depends on:
//!
//! 1. Forward/inverse agreement: planning a spin for any target and
//!    resolving its final angle recovers the same target, exactly
//! 2. Normalization always lands in [0, 2π) and preserves congruence
//! 3. Easing curves are monotonic with exact endpoints
//! 4. Recency filtering is order-preserving and boundary-exact

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use lunchwheel_core::filter::DAY_MS;
use lunchwheel_core::{
    Item, RecencyRule, SpinPlan, eligible, normalize, sector_at, settle_ease,
};
use proptest::prelude::*;

const TAU: f64 = std::f64::consts::TAU;

// ── Strategies ──────────────────────────────────────────────────────────

fn wheel_shape() -> impl Strategy<Value = (usize, usize, u32)> {
    // (count, target, turns) with target < count
    (1usize..200).prop_flat_map(|count| {
        (Just(count), 0..count, 12u32..=16)
    })
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Forward/inverse agreement
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn planned_angle_resolves_to_target((count, target, turns) in wheel_shape()) {
        let plan = SpinPlan::for_target(target, count, turns, Duration::from_millis(1000));
        prop_assert_eq!(sector_at(plan.final_angle, count), target);
        prop_assert_eq!(sector_at(normalize(plan.final_angle), count), target);
    }

    #[test]
    fn sector_at_is_always_in_range(angle in -1000.0f64..1000.0, count in 1usize..200) {
        prop_assert!(sector_at(angle, count) < count);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Normalization
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalize_lands_in_range(angle in -1e6f64..1e6) {
        let n = normalize(angle);
        prop_assert!((0.0..TAU).contains(&n), "normalize({}) = {}", angle, n);
    }

    #[test]
    fn normalize_is_idempotent(angle in -1e6f64..1e6) {
        let n = normalize(angle);
        prop_assert_eq!(normalize(n), n);
    }

    #[test]
    fn normalize_preserves_sector(angle in -1e4f64..1e4, count in 1usize..64) {
        // Folding the angle must not move the pointer to a different sector.
        prop_assert_eq!(sector_at(angle, count), sector_at(normalize(angle), count));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Easing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn settle_ease_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(settle_ease(lo) <= settle_ease(hi) + 1e-12);
    }

    #[test]
    fn settle_ease_stays_in_unit_range(t in -2.0f64..3.0) {
        let v = settle_ease(t);
        prop_assert!((0.0..=1.0).contains(&v));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Recency filter
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filter_output_is_a_subsequence(enabled in proptest::collection::vec(any::<bool>(), 0..24)) {
        let now = Utc::now();
        let items: Vec<Item> = enabled
            .iter()
            .enumerate()
            .map(|(i, &on)| {
                let mut item = Item::new(&format!("item-{i}")).unwrap();
                item.enabled = on;
                item
            })
            .collect();
        let out = eligible(&items, RecencyRule::None, now);
        // Order-preserving subsequence of the enabled items.
        let want: Vec<String> = items
            .iter()
            .filter(|i| i.enabled)
            .map(|i| i.name.clone())
            .collect();
        let got: Vec<String> = out.into_iter().map(|i| i.name).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn recency_boundary_is_exact(days in 1u32..30, offset_secs in -3600i64..3600) {
        // Items chosen strictly inside the window are excluded; strictly
        // outside, eligible. (offset 0 == exactly on the cutoff: excluded.)
        let now = Utc::now();
        let ago = TimeDelta::milliseconds(i64::from(days) * DAY_MS)
            + TimeDelta::seconds(offset_secs);
        let mut item = Item::new("probe").unwrap();
        item.last_chosen_at = Some(now - ago);
        let out = eligible(&[item], RecencyRule::ExcludeWithinDays(days), now);
        if offset_secs > 0 {
            prop_assert_eq!(out.len(), 1, "older than the window must stay eligible");
        } else {
            prop_assert!(out.is_empty(), "inside the window must be excluded");
        }
    }
}
