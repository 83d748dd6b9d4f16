#![forbid(unsafe_code)]

//! Candidate filter: derive the eligible subset of a list.
//!
//! Eligibility is evaluated once, between spins. The spin session snapshots
//! the result, so re-filtering mid-animation cannot shift indices under a
//! running spin.
//!
//! # Invariants
//!
//! 1. Output preserves input order.
//! 2. Disabled items are never eligible.
//! 3. Never-chosen items are always eligible.
//! 4. Days are a fixed 86,400,000 ms — no calendar arithmetic.

use chrono::{DateTime, TimeDelta, Utc};

use crate::model::Item;

/// Milliseconds in one recency "day".
pub const DAY_MS: i64 = 86_400_000;

/// The recency rule applied when deriving the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecencyRule {
    /// Every enabled item is eligible.
    #[default]
    None,
    /// Exclude items chosen within the trailing `n`-day window (`n > 0`).
    ExcludeWithinDays(u32),
}

/// Derive the eligible candidate set from `items` at time `now`.
///
/// Pure: no side effects, `now` is passed in. Returns owned clones so the
/// caller can snapshot them for the duration of a spin.
///
/// An item last chosen *exactly* on the window boundary is excluded; one
/// second older is eligible again.
pub fn eligible(items: &[Item], rule: RecencyRule, now: DateTime<Utc>) -> Vec<Item> {
    let cutoff = match rule {
        RecencyRule::None => None,
        RecencyRule::ExcludeWithinDays(days) => {
            Some(now - TimeDelta::milliseconds(i64::from(days) * DAY_MS))
        }
    };
    items
        .iter()
        .filter(|item| item.enabled)
        .filter(|item| match (cutoff, item.last_chosen_at) {
            (Some(cutoff), Some(last)) => last < cutoff,
            _ => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn item(name: &str) -> Item {
        Item::new(name).unwrap()
    }

    fn chosen_ago(name: &str, now: DateTime<Utc>, ago: TimeDelta) -> Item {
        let mut item = item(name);
        item.last_chosen_at = Some(now - ago);
        item
    }

    // ---- ordering and enabled flag ----------------------------------------

    #[test]
    fn preserves_input_order() {
        let now = Utc::now();
        let items = vec![item("a"), item("b"), item("c")];
        let names: Vec<_> = eligible(&items, RecencyRule::None, now)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn disabled_items_are_dropped() {
        let now = Utc::now();
        let mut items = vec![item("a"), item("b")];
        items[0].enabled = false;
        let out = eligible(&items, RecencyRule::None, now);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "b");
    }

    #[test]
    fn disabled_items_are_dropped_even_when_stale() {
        let now = Utc::now();
        let mut it = chosen_ago("a", now, TimeDelta::days(30));
        it.enabled = false;
        assert!(eligible(&[it], RecencyRule::ExcludeWithinDays(3), now).is_empty());
    }

    // ---- recency window ---------------------------------------------------

    #[test]
    fn never_chosen_is_always_eligible() {
        let now = Utc::now();
        let items = vec![item("fresh")];
        assert_eq!(
            eligible(&items, RecencyRule::ExcludeWithinDays(7), now).len(),
            1
        );
    }

    #[test]
    fn within_window_is_excluded() {
        let now = Utc::now();
        let items = vec![chosen_ago("recent", now, TimeDelta::hours(12))];
        assert!(eligible(&items, RecencyRule::ExcludeWithinDays(3), now).is_empty());
    }

    #[test]
    fn boundary_one_second_inside_is_excluded() {
        let now = Utc::now();
        let ago = TimeDelta::milliseconds(3 * DAY_MS) - TimeDelta::seconds(1);
        let items = vec![chosen_ago("edge", now, ago)];
        assert!(eligible(&items, RecencyRule::ExcludeWithinDays(3), now).is_empty());
    }

    #[test]
    fn boundary_one_second_outside_is_eligible() {
        let now = Utc::now();
        let ago = TimeDelta::milliseconds(3 * DAY_MS) + TimeDelta::seconds(1);
        let items = vec![chosen_ago("edge", now, ago)];
        assert_eq!(
            eligible(&items, RecencyRule::ExcludeWithinDays(3), now).len(),
            1
        );
    }

    #[test]
    fn exact_boundary_is_excluded() {
        let now = Utc::now();
        let ago = TimeDelta::milliseconds(3 * DAY_MS);
        let items = vec![chosen_ago("edge", now, ago)];
        assert!(eligible(&items, RecencyRule::ExcludeWithinDays(3), now).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(eligible(&[], RecencyRule::None, Utc::now()).is_empty());
    }
}
