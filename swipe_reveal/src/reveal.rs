// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal/fold state machine.
//!
//! [`RevealCore`] owns the mutable interaction state of one swipe row: the
//! clamped horizontal scroll offset, the optional locked selection, the
//! dragging flag, and the measurements the host's layout pass feeds back
//! (per-button widths keyed by label, content height samples).
//!
//! The discrete states are:
//!
//! - **Collapsed**: no selection, `scroll_offset == 0`.
//! - **Partially open**: no selection, mid-drag, offset strictly between
//!   `0` and `-total_button_width`.
//! - **Fully open**: no selection, offset pinned at `-total_button_width`.
//! - **Locked(i)**: a selection pins the row open pointing at action `i`.
//!
//! Every mutating operation returns a [`Transition`] hint describing how the
//! host should animate toward the new state. Hints are requests, not
//! obligations; the host always renders from current state, and a newer
//! state change simply supersedes an in-flight animation.
//!
//! Changes bump a monotonically increasing revision counter, so hosts can
//! cheaply detect "something changed, re-render" without diffing state.
//!
//! ## Measurement feedback
//!
//! Button widths arrive asynchronously, keyed by label, after the host lays
//! out an off-screen probe row at natural size (see
//! [`geometry::measurement_offset`](crate::geometry::measurement_offset)).
//! The merge rule is last-writer-wins per label; the total reveal width is
//! the sum over all reported labels. Labels are therefore expected to be
//! unique per row — a collision makes two buttons share one measurement
//! slot. Debug builds assert uniqueness at construction; release builds
//! keep the documented last-writer behavior.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::drag::{END_TRANSITION_SECONDS, drag_offset, snap_offset};

/// Drag-end offsets below this are treated as "effectively closed" and
/// clear the selection when a gesture ends.
const DESELECT_THRESHOLD: f64 = 5.0;

/// How the host should animate toward a new state.
///
/// Fire-and-forget: the core never waits for playback, and a newer hint
/// supersedes an in-flight one (last write wins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Jump to the new values without animating.
    Instant,
    /// Animate with the host's default easing.
    Smooth,
    /// Animate linearly over a fixed duration in seconds.
    Linear {
        /// Animation duration in seconds.
        duration: f64,
    },
}

/// Discrete reveal phase derived from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No selection, row fully closed.
    Collapsed,
    /// No selection, offset strictly between closed and fully open.
    PartiallyOpen,
    /// No selection, offset pinned at the full reveal width.
    FullyOpen,
    /// Selection locked onto the action at this index.
    Locked(usize),
}

/// What a tap on an action should do, as decided by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// First tap on a tip action while nothing was selected: the row locked
    /// open onto it. Nothing is invoked.
    Selected,
    /// The action fires: run its callback if it has one, otherwise fold.
    Activated,
}

/// Per-action data the core tracks: the measurement key and the tip flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSlot {
    /// Label the host reports this action's measured width under.
    pub label: String,
    /// Whether the action requires a reveal-confirm step (see
    /// [`crate::action`]).
    pub is_tip: bool,
}

/// Mutable reveal/fold state of one swipe row.
///
/// Created once per widget instance at mount and kept for the widget's
/// lifetime. All mutation happens synchronously on the host's single event
/// queue; there is no cross-instance sharing.
#[derive(Debug, Clone)]
pub struct RevealCore {
    max_width: f64,
    slots: Vec<ActionSlot>,
    widths: HashMap<String, f64>,
    total_button_width: f64,
    scroll_offset: f64,
    selected: Option<usize>,
    is_dragging: bool,
    content_height: f64,
    revision: u64,
}

impl RevealCore {
    /// Creates a collapsed core for a row `max_width` units wide with the
    /// given action slots (in render order).
    ///
    /// Debug builds assert that slot labels are unique; duplicate labels
    /// share one width-measurement slot (last writer wins), which skews
    /// geometry.
    #[must_use]
    pub fn new(max_width: f64, slots: Vec<ActionSlot>) -> Self {
        #[cfg(debug_assertions)]
        for (i, slot) in slots.iter().enumerate() {
            debug_assert!(
                !slots[..i].iter().any(|prior| prior.label == slot.label),
                "duplicate action label {:?} shares a width-measurement slot",
                slot.label
            );
        }
        Self {
            max_width,
            slots,
            widths: HashMap::new(),
            total_button_width: 0.0,
            scroll_offset: 0.0,
            selected: None,
            is_dragging: false,
            content_height: 0.0,
            revision: 0,
        }
    }

    /// Configured row width.
    #[must_use]
    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    /// Action slots in render order.
    #[must_use]
    pub fn slots(&self) -> &[ActionSlot] {
        &self.slots
    }

    /// Number of configured actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no actions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current signed horizontal offset of the content row, always within
    /// `[-total_button_width, 0]`.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Index of the locked selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Sum of all reported button widths: the full reveal width.
    #[must_use]
    pub fn total_button_width(&self) -> f64 {
        self.total_button_width
    }

    /// Content height, the maximum over the most recent height report.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Monotonically increasing change counter. Bumps exactly when state
    /// actually changes, so hosts can re-render on `revision() != last`.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Measured width for `label`, or `0` when no measurement has arrived.
    #[must_use]
    pub fn measured_width(&self, label: &str) -> f64 {
        self.widths.get(label).copied().unwrap_or(0.0)
    }

    /// Measured width of the action at `index`, or `0` when unmeasured or
    /// out of range.
    #[must_use]
    pub fn width_at(&self, index: usize) -> f64 {
        self.slots
            .get(index)
            .map_or(0.0, |slot| self.measured_width(&slot.label))
    }

    /// Sum of the measured widths of all actions before `index`.
    #[must_use]
    pub fn width_before(&self, index: usize) -> f64 {
        self.slots
            .iter()
            .take(index)
            .map(|slot| self.measured_width(&slot.label))
            .sum()
    }

    /// Discrete phase derived from the current state.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        if let Some(index) = self.selected {
            return RevealPhase::Locked(index);
        }
        if self.scroll_offset >= 0.0 || self.total_button_width == 0.0 {
            RevealPhase::Collapsed
        } else if self.scroll_offset <= -self.total_button_width {
            RevealPhase::FullyOpen
        } else {
            RevealPhase::PartiallyOpen
        }
    }

    /// Records one measured button width, keyed by label.
    ///
    /// Later reports for the same label overwrite earlier ones; the total
    /// reveal width is recomputed as the sum over all reported labels.
    /// Re-reporting an unchanged value is a no-op.
    pub fn report_width(&mut self, label: &str, width: f64) {
        if self.widths.get(label) == Some(&width) {
            return;
        }
        match self.widths.get_mut(label) {
            Some(slot) => *slot = width,
            None => {
                self.widths.insert(String::from(label), width);
            }
        }
        self.total_button_width = self.widths.values().sum();
        self.bump();
    }

    /// Records content height samples from the host's layout pass.
    ///
    /// The content height becomes the maximum of the report; an empty
    /// report leaves the previous value in place.
    pub fn report_heights(&mut self, samples: &[f64]) {
        if samples.is_empty() {
            return;
        }
        let height = samples.iter().fold(0.0_f64, |acc, &next| acc.max(next));
        if height != self.content_height {
            self.content_height = height;
            self.bump();
        }
    }

    /// Applies one mid-gesture drag sample.
    ///
    /// The translation is the gesture's total horizontal movement since it
    /// began. The resulting offset is clamped to `[-total_button_width, 0]`
    /// with a dead-zone filter near zero (see [`crate::drag`]).
    pub fn drag_update(&mut self, translation_x: f64) -> Transition {
        let offset = drag_offset(translation_x, self.total_button_width);
        let changed = self.set_scroll_offset(offset) | self.set_dragging(true);
        if changed {
            self.bump();
        }
        Transition::Smooth
    }

    /// Applies the end of a drag gesture: midpoint snap to fully open or
    /// closed, then a short linear settle.
    ///
    /// A settle at an effectively-closed offset also clears the selection.
    pub fn drag_end(&mut self, translation_x: f64) -> Transition {
        let offset = snap_offset(translation_x, self.total_button_width);
        let mut changed = self.set_scroll_offset(offset) | self.set_dragging(false);
        if self.scroll_offset < DESELECT_THRESHOLD && self.selected.is_some() {
            self.selected = None;
            changed = true;
        }
        if changed {
            self.bump();
        }
        Transition::Linear {
            duration: END_TRANSITION_SECONDS,
        }
    }

    /// Collapses the row: offset to `0`, selection cleared. Idempotent.
    pub fn fold(&mut self) -> Transition {
        let changed = self.set_scroll_offset(0.0) | self.selected.take().is_some();
        if changed {
            self.bump();
        }
        Transition::Smooth
    }

    /// Opens the row to the full reveal width. Does not touch the
    /// selection.
    pub fn unfold(&mut self) -> Transition {
        if self.set_scroll_offset(-self.total_button_width) {
            self.bump();
        }
        Transition::Smooth
    }

    /// Sets or clears the locked selection.
    ///
    /// The scroll offset is left alone; the geometry resolver derives the
    /// locked visuals from the combination. An out-of-range index is a
    /// debug-asserted no-op.
    pub fn select(&mut self, selected: Option<usize>) -> Transition {
        if let Some(index) = selected {
            debug_assert!(
                index < self.slots.len(),
                "selected index {index} out of range for {} actions",
                self.slots.len()
            );
            if index >= self.slots.len() {
                return Transition::Smooth;
            }
        }
        if self.selected != selected {
            self.selected = selected;
            self.bump();
        }
        Transition::Smooth
    }

    /// Decides what a tap on the action at `index` should do.
    ///
    /// Returns `None` when `index` is out of range (debug-asserted).
    pub fn tap_action(&mut self, index: usize) -> Option<TapOutcome> {
        debug_assert!(
            index < self.slots.len(),
            "tapped index {index} out of range for {} actions",
            self.slots.len()
        );
        let slot = self.slots.get(index)?;
        if self.selected.is_none() && slot.is_tip {
            self.select(Some(index));
            return Some(TapOutcome::Selected);
        }
        Some(TapOutcome::Activated)
    }

    /// Handles a tap on the dimmed overlay covering the content: clears the
    /// selection if one is locked, otherwise folds the row.
    pub fn tap_overlay(&mut self) -> Transition {
        if self.selected.is_some() {
            self.select(None)
        } else {
            self.fold()
        }
    }

    fn set_scroll_offset(&mut self, offset: f64) -> bool {
        if self.scroll_offset == offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    fn set_dragging(&mut self, dragging: bool) -> bool {
        if self.is_dragging == dragging {
            return false;
        }
        self.is_dragging = dragging;
        true
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::*;

    fn slot(label: &str, is_tip: bool) -> ActionSlot {
        ActionSlot {
            label: String::from(label),
            is_tip,
        }
    }

    fn measured_core() -> RevealCore {
        let mut core = RevealCore::new(320.0, vec![slot("Delete", true), slot("Pin", false)]);
        core.report_width("Delete", 72.0);
        core.report_width("Pin", 48.0);
        core
    }

    #[test]
    fn new_core_is_collapsed() {
        let core = RevealCore::new(320.0, vec![slot("Delete", true)]);
        assert_eq!(core.phase(), RevealPhase::Collapsed);
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.total_button_width(), 0.0);
        assert_eq!(core.revision(), 0);
    }

    #[test]
    fn width_reports_accumulate_and_last_writer_wins() {
        let mut core = measured_core();
        assert_eq!(core.total_button_width(), 120.0);
        assert_eq!(core.measured_width("Delete"), 72.0);
        assert_eq!(core.width_before(1), 72.0);

        // Layout ran again with a different result for one label.
        core.report_width("Delete", 80.0);
        assert_eq!(core.total_button_width(), 128.0);

        // Unchanged re-report does not bump the revision.
        let rev = core.revision();
        core.report_width("Delete", 80.0);
        assert_eq!(core.revision(), rev);
    }

    #[test]
    fn missing_measurement_reads_as_zero() {
        let core = RevealCore::new(320.0, vec![slot("Delete", true)]);
        assert_eq!(core.measured_width("Delete"), 0.0);
        assert_eq!(core.width_at(0), 0.0);
        assert_eq!(core.width_at(7), 0.0);
    }

    #[test]
    fn height_report_keeps_max_and_ignores_empty() {
        let mut core = measured_core();
        core.report_heights(&[12.0, 44.0, 31.0]);
        assert_eq!(core.content_height(), 44.0);

        core.report_heights(&[]);
        assert_eq!(core.content_height(), 44.0);

        // A fresh report replaces the value outright (it is not sticky-max
        // across reports).
        core.report_heights(&[20.0]);
        assert_eq!(core.content_height(), 20.0);
    }

    #[test]
    fn drag_update_clamps_and_sets_dragging() {
        let mut core = measured_core();
        let hint = core.drag_update(-90.0);
        assert_eq!(hint, Transition::Smooth);
        assert!(core.is_dragging());
        assert_eq!(core.scroll_offset(), -90.0);
        assert_eq!(core.phase(), RevealPhase::PartiallyOpen);

        core.drag_update(-400.0);
        assert_eq!(core.scroll_offset(), -120.0);
        assert_eq!(core.phase(), RevealPhase::FullyOpen);

        core.drag_update(25.0);
        assert_eq!(core.scroll_offset(), 0.0);
    }

    #[test]
    fn drag_end_snaps_at_midpoint_and_settles_linearly() {
        let mut core = measured_core();
        core.drag_update(-40.0);
        let hint = core.drag_end(-40.0);
        assert_eq!(
            hint,
            Transition::Linear {
                duration: END_TRANSITION_SECONDS
            }
        );
        assert!(!core.is_dragging());
        assert_eq!(core.scroll_offset(), 0.0);

        core.drag_update(-90.0);
        core.drag_end(-90.0);
        assert_eq!(core.scroll_offset(), -120.0);
        assert_eq!(core.phase(), RevealPhase::FullyOpen);
    }

    #[test]
    fn drag_end_clears_a_locked_selection() {
        let mut core = measured_core();
        core.select(Some(0));
        assert_eq!(core.phase(), RevealPhase::Locked(0));

        core.drag_update(-30.0);
        core.drag_end(-30.0);
        assert_eq!(core.selected(), None);
        assert_eq!(core.phase(), RevealPhase::Collapsed);
    }

    #[test]
    fn fold_is_idempotent() {
        let mut core = measured_core();
        core.unfold();
        core.select(Some(1));

        core.fold();
        let rev = core.revision();
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.selected(), None);

        core.fold();
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.selected(), None);
        assert_eq!(core.revision(), rev);
    }

    #[test]
    fn unfold_then_fold_round_trips() {
        let mut core = measured_core();
        core.unfold();
        assert_eq!(core.scroll_offset(), -120.0);
        core.fold();
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.selected(), None);
    }

    #[test]
    fn select_ignores_out_of_range_indices() {
        let mut core = measured_core();
        let rev = core.revision();
        // Out-of-range select must not panic in release nor change state.
        #[cfg(not(debug_assertions))]
        {
            core.select(Some(9));
            assert_eq!(core.selected(), None);
            assert_eq!(core.revision(), rev);
        }
        #[cfg(debug_assertions)]
        {
            let _ = rev;
        }
        core.select(Some(1));
        assert_eq!(core.selected(), Some(1));
    }

    #[test]
    fn tap_on_tip_selects_first_then_activates() {
        let mut core = measured_core();
        assert_eq!(core.tap_action(0), Some(TapOutcome::Selected));
        assert_eq!(core.phase(), RevealPhase::Locked(0));

        // Second tap, selection present: the action fires.
        assert_eq!(core.tap_action(0), Some(TapOutcome::Activated));
    }

    #[test]
    fn tap_on_quick_activates_immediately() {
        let mut core = measured_core();
        assert_eq!(core.tap_action(1), Some(TapOutcome::Activated));
        assert_eq!(core.selected(), None);
    }

    #[test]
    fn overlay_tap_deselects_then_folds() {
        let mut core = measured_core();
        core.unfold();
        core.select(Some(0));

        core.tap_overlay();
        assert_eq!(core.selected(), None);
        // Offset untouched by the deselect; a second tap folds.
        assert_eq!(core.scroll_offset(), -120.0);

        core.tap_overlay();
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.phase(), RevealPhase::Collapsed);
    }

    #[test]
    fn zero_actions_make_drags_a_no_op() {
        let mut core = RevealCore::new(320.0, vec![]);
        core.drag_update(-200.0);
        assert_eq!(core.scroll_offset(), -0.0);
        core.drag_end(-200.0);
        assert_eq!(core.scroll_offset(), 0.0);
        assert_eq!(core.phase(), RevealPhase::Collapsed);
    }

    #[test]
    fn scroll_offset_stays_in_domain_across_a_gesture() {
        let mut core = measured_core();
        let total = core.total_button_width();
        for translation in [-10.0, -17.0, -60.0, -119.0, -121.0, -500.0, 3.0, 40.0] {
            core.drag_update(translation);
            let offset = core.scroll_offset();
            assert!(
                (-total..=0.0).contains(&offset),
                "offset {offset} escaped [-{total}, 0] at translation {translation}"
            );
        }
    }
}
