// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SwipeRow`]: a small controller tying actions, state, and geometry
//! together.
//!
//! The row owns the configured [`SwipeAction`]s, a [`RevealCore`], and the
//! shared pending-close flag that action callbacks signal through their
//! [`CloseHandle`]s. Hosts that want to drive the pieces themselves can use
//! [`RevealCore`] and the [`crate::geometry`] functions directly; the row
//! exists for the common case where tap dispatch and close-signal draining
//! should just work.
//!
//! ## Event loop contract
//!
//! All methods are called synchronously from the host's single event queue
//! (gesture samples, layout reports, taps). Action callbacks may stash
//! their [`CloseHandle`] and call it on a later turn; the host calls
//! [`SwipeRow::poll_close`] once per turn to pick the request up.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::action::{ActionSpec, CloseHandle, SwipeAction};
use crate::geometry::{self, RenderFrame};
use crate::reveal::{ActionSlot, RevealCore, TapOutcome, Transition};

/// What happened in response to a tap on an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResponse {
    /// First tap on a tip action: the row locked open onto it, nothing was
    /// invoked.
    Locked,
    /// The action's callback ran; the row folds later, when the callback's
    /// [`CloseHandle`] fires and [`SwipeRow::poll_close`] drains it.
    Invoked,
    /// The action had no callback; the row folded immediately.
    Folded,
}

/// A swipe-to-reveal row: content that slides aside to expose a strip of
/// action buttons.
#[derive(Debug)]
pub struct SwipeRow {
    actions: Vec<SwipeAction>,
    core: RevealCore,
    close_requested: Rc<Cell<bool>>,
}

impl SwipeRow {
    /// Builds a row `max_width` units wide from the given action specs.
    ///
    /// Specs are added in order; `Quick`/`Common` specs with empty labels
    /// are silently dropped (see [`ActionSpec::build`]).
    #[must_use]
    pub fn new(max_width: f64, specs: impl IntoIterator<Item = ActionSpec>) -> Self {
        let actions: Vec<SwipeAction> = specs.into_iter().filter_map(ActionSpec::build).collect();
        let slots = actions
            .iter()
            .map(|action| ActionSlot {
                label: action.label.clone(),
                is_tip: action.is_tip,
            })
            .collect();
        Self {
            actions,
            core: RevealCore::new(max_width, slots),
            close_requested: Rc::new(Cell::new(false)),
        }
    }

    /// The configured actions, in render order.
    #[must_use]
    pub fn actions(&self) -> &[SwipeAction] {
        &self.actions
    }

    /// Read access to the reveal state.
    #[must_use]
    pub fn core(&self) -> &RevealCore {
        &self.core
    }

    /// Mutable access to the reveal state, for hosts driving transitions
    /// the row does not wrap.
    pub fn core_mut(&mut self) -> &mut RevealCore {
        &mut self.core
    }

    /// Resolves the current per-frame layout.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        geometry::frame(&self.core)
    }

    /// Applies one mid-gesture drag sample. See
    /// [`RevealCore::drag_update`].
    pub fn drag_update(&mut self, translation_x: f64) -> Transition {
        self.core.drag_update(translation_x)
    }

    /// Applies the end of a drag gesture. See [`RevealCore::drag_end`].
    pub fn drag_end(&mut self, translation_x: f64) -> Transition {
        self.core.drag_end(translation_x)
    }

    /// Collapses the row. See [`RevealCore::fold`].
    pub fn fold(&mut self) -> Transition {
        self.core.fold()
    }

    /// Opens the row to the full reveal width. See [`RevealCore::unfold`].
    pub fn unfold(&mut self) -> Transition {
        self.core.unfold()
    }

    /// Handles a tap on the dimmed overlay. See
    /// [`RevealCore::tap_overlay`].
    pub fn tap_overlay(&mut self) -> Transition {
        self.core.tap_overlay()
    }

    /// Records one measured button width. See [`RevealCore::report_width`].
    pub fn report_width(&mut self, label: &str, width: f64) {
        self.core.report_width(label, width);
    }

    /// Records content height samples. See [`RevealCore::report_heights`].
    pub fn report_heights(&mut self, samples: &[f64]) {
        self.core.report_heights(samples);
    }

    /// Dispatches a tap on the action at `index`.
    ///
    /// Tip actions lock the row open on their first tap; otherwise the
    /// action fires — its callback runs with a fresh [`CloseHandle`], or,
    /// with no callback, the row folds immediately. Returns `None` when
    /// `index` is out of range (debug-asserted in [`RevealCore`]).
    pub fn tap_action(&mut self, index: usize) -> Option<TapResponse> {
        match self.core.tap_action(index)? {
            TapOutcome::Selected => Some(TapResponse::Locked),
            TapOutcome::Activated => {
                if let Some(on_invoke) = self.actions[index].on_invoke.as_mut() {
                    let handle = CloseHandle::new(Rc::clone(&self.close_requested));
                    on_invoke(handle);
                    Some(TapResponse::Invoked)
                } else {
                    self.core.fold();
                    Some(TapResponse::Folded)
                }
            }
        }
    }

    /// Drains a pending close request from an action callback, folding the
    /// row if one arrived since the last poll.
    ///
    /// Call once per event turn. Returns the fold's transition hint, or
    /// `None` when nothing was pending. Multiple close calls between polls
    /// collapse into one fold (last write wins).
    pub fn poll_close(&mut self) -> Option<Transition> {
        if self.close_requested.replace(false) {
            Some(self.core.fold())
        } else {
            None
        }
    }
}
