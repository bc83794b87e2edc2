// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag interpretation: pointer tracking and the fixed swipe policy.
//!
//! Two layers live here:
//!
//! - [`DragTracker`] turns a stream of pointer positions into the horizontal
//!   translation of the active gesture. Hosts whose input layer already
//!   reports translations can skip it and feed
//!   [`RevealCore`](crate::reveal::RevealCore) directly.
//! - [`drag_offset`] and [`snap_offset`] are the pure policy functions: how a
//!   translation maps to a clamped scroll offset mid-gesture, and where the
//!   row settles when the gesture ends.
//!
//! The policy constants are fixed, not configuration:
//!
//! - [`DEAD_ZONE`]: translations of magnitude 16 or less are ignored while
//!   the drag is still within the "would open" window, so a row does not
//!   creep open under a near-tap.
//! - The release rule is a midpoint snap: the drag must cross half the total
//!   reveal width for the row to stay open.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] with the initial pointer position.
//! 2) On each move event, call [`DragTracker::update`]; its returned
//!    translation's x component feeds
//!    [`RevealCore::drag_update`](crate::reveal::RevealCore::drag_update).
//! 3) On release, feed [`DragTracker::translation_x`] to
//!    [`RevealCore::drag_end`](crate::reveal::RevealCore::drag_end) and call
//!    [`DragTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use swipe_reveal::drag::{DragTracker, drag_offset, snap_offset};
//!
//! let mut tracker = DragTracker::default();
//! tracker.start(Point::new(200.0, 40.0));
//!
//! let translation = tracker.update(Point::new(140.0, 42.0)).unwrap();
//! assert_eq!(translation.x, -60.0);
//!
//! // With a 100-unit reveal row, -60 is past the dead zone and within range.
//! assert_eq!(drag_offset(translation.x, 100.0), -60.0);
//! // On release, -60 is past the 50-unit midpoint, so the row stays open.
//! assert_eq!(snap_offset(tracker.translation_x().unwrap(), 100.0), -100.0);
//! ```

use kurbo::{Point, Vec2};

/// Minimum drag magnitude below which near-zero drags are ignored while the
/// gesture is still within the "would open" window.
pub const DEAD_ZONE: f64 = 16.0;

/// Duration, in seconds, of the linear settle animation requested when a
/// drag ends.
pub const END_TRANSITION_SECONDS: f64 = 0.2;

/// Tracks one continuous drag gesture as a translation from its start.
///
/// The reveal core only ever consumes the gesture's total translation, so
/// the tracker keeps just the start position and the most recent pointer
/// position and reports the running start-to-current translation; per-step
/// deltas are never materialized.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragTracker {
    /// Start tracking a new drag operation from the given position.
    ///
    /// Starting over mid-gesture rebases the translation on the new
    /// position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position, returning the gesture's translation
    /// from its start position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start_pos = self.start_pos?;
        self.last_pos = Some(pos);
        Some(pos - start_pos)
    }

    /// Translation from the drag start to the most recent position.
    #[must_use]
    pub fn translation(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.start_pos?)
    }

    /// Horizontal component of [`DragTracker::translation`].
    ///
    /// This is the value the reveal core consumes; the vertical component is
    /// ignored by design (the row only moves along X).
    #[must_use]
    pub fn translation_x(&self) -> Option<f64> {
        self.translation().map(|v| v.x)
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag operation is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}

/// Maps a mid-gesture translation to a clamped scroll offset.
///
/// - Positive translations (dragging toward closed) pin the row at `0`.
/// - Translations that would open the row less than `total_width` pass
///   through unchanged, except that magnitudes of [`DEAD_ZONE`] or less are
///   treated as `0`.
/// - Translations past the full reveal width clamp to `-total_width`.
///
/// The result always lies in `[-total_width, 0]`. With `total_width == 0`
/// (no measured actions) the result is always zero.
#[must_use]
pub fn drag_offset(translation_x: f64, total_width: f64) -> f64 {
    if translation_x > 0.0 {
        return 0.0;
    }
    if translation_x + total_width > 0.0 {
        if exceeds_dead_zone(translation_x) {
            translation_x
        } else {
            0.0
        }
    } else {
        -total_width
    }
}

/// Where the row settles when a gesture ends: the midpoint snap rule.
///
/// The drag must cross half the total reveal width to stay open; otherwise
/// the row snaps shut.
#[must_use]
pub fn snap_offset(translation_x: f64, total_width: f64) -> f64 {
    if translation_x + total_width / 2.0 > 0.0 {
        0.0
    } else {
        -total_width
    }
}

// Written without `f64::abs` so the comparison builds on `core` alone.
fn exceeds_dead_zone(translation_x: f64) -> bool {
    translation_x > DEAD_ZONE || translation_x < -DEAD_ZONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_not_active() {
        let tracker = DragTracker::default();
        assert!(!tracker.is_active());
        assert!(tracker.translation().is_none());
    }

    #[test]
    fn start_update_end_lifecycle() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(100.0, 50.0));
        assert!(tracker.is_active());
        // The translation at the start position is zero.
        assert_eq!(tracker.translation(), Some(Vec2::ZERO));

        let translation = tracker.update(Point::new(90.0, 52.0));
        assert_eq!(translation, Some(Vec2::new(-10.0, 2.0)));

        // Updates report cumulative movement from the start, not per-step
        // deltas.
        let translation = tracker.update(Point::new(60.0, 55.0));
        assert_eq!(translation, Some(Vec2::new(-40.0, 5.0)));
        assert_eq!(tracker.translation_x(), Some(-40.0));

        tracker.end();
        assert!(!tracker.is_active());
        assert!(tracker.translation().is_none());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.update(Point::new(5.0, 5.0)), None);
        assert!(tracker.translation().is_none());
    }

    #[test]
    fn restart_rebases_the_translation() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(0.0, 0.0));
        tracker.update(Point::new(-50.0, 0.0));

        tracker.start(Point::new(200.0, 10.0));
        let translation = tracker.update(Point::new(195.0, 10.0));
        assert_eq!(translation, Some(Vec2::new(-5.0, 0.0)));
    }

    #[test]
    fn translation_ignores_vertical_movement() {
        let mut tracker = DragTracker::default();
        tracker.start(Point::new(0.0, 0.0));
        tracker.update(Point::new(-30.0, 500.0));
        assert_eq!(tracker.translation_x(), Some(-30.0));
    }

    #[test]
    fn positive_translation_pins_closed() {
        assert_eq!(drag_offset(40.0, 120.0), 0.0);
        assert_eq!(drag_offset(0.5, 0.0), 0.0);
    }

    #[test]
    fn dead_zone_swallows_small_drags() {
        // Magnitude 10 <= 16 while the candidate (90) is still positive.
        assert_eq!(drag_offset(-10.0, 100.0), 0.0);
        // Exactly at the threshold still counts as inside the dead zone.
        assert_eq!(drag_offset(-16.0, 100.0), 0.0);
        // Just past it, the raw translation applies.
        assert_eq!(drag_offset(-16.5, 100.0), -16.5);
    }

    #[test]
    fn overdrag_clamps_to_total_width() {
        assert_eq!(drag_offset(-150.0, 120.0), -120.0);
        assert_eq!(drag_offset(-120.0, 120.0), -120.0);
    }

    #[test]
    fn offsets_stay_in_domain_for_many_translations() {
        let total = 120.0;
        let mut tx = -400.0;
        while tx <= 400.0 {
            let offset = drag_offset(tx, total);
            assert!(
                (-total..=0.0).contains(&offset),
                "offset {offset} out of [-{total}, 0] for translation {tx}"
            );
            tx += 7.3;
        }
    }

    #[test]
    fn snap_uses_half_width_midpoint() {
        // -40 has not crossed the 60-unit midpoint of a 120 row: snap shut.
        assert_eq!(snap_offset(-40.0, 120.0), 0.0);
        // -90 has: stay open.
        assert_eq!(snap_offset(-90.0, 120.0), -120.0);
        // Exactly at the midpoint stays open.
        assert_eq!(snap_offset(-60.0, 120.0), -120.0);
    }

    #[test]
    fn zero_width_row_always_snaps_shut() {
        assert_eq!(snap_offset(-500.0, 0.0), -0.0);
        assert_eq!(drag_offset(-500.0, 0.0), -0.0);
        assert_eq!(snap_offset(3.0, 0.0), 0.0);
    }
}
