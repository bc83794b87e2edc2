// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry resolution: from reveal state to per-button render offsets.
//!
//! Pure queries over a [`RevealCore`]. Nothing here mutates state; the host
//! calls these each frame (or on each revision bump) and positions its
//! views accordingly.
//!
//! The layout model matches the row's render structure: the whole row —
//! content and buttons together — is translated by the current scroll
//! offset, and each button carries an additional x-offset *within* that
//! translated row. With no selection, a button's offset interpolates
//! between parked at the right edge (`max_width + preceding widths`, row
//! closed) and stacked flush against the preceding buttons (row fully
//! open), producing the staggered reveal. A locked selection pins the
//! selected button at the reveal boundary at the full reveal width, hides
//! the buttons before it, and pushes the buttons after it off-screen.
//!
//! The degenerate `total_button_width == 0` case (no actions, or no
//! measurements yet) must not divide; every offset resolves to `max_width`
//! and the overlay stays parked over the (closed) content.

use alloc::vec::Vec;

use crate::reveal::RevealCore;

/// Opacity of the dimmed overlay shown over the content while the row has
/// a reveal strip.
pub const OVERLAY_OPACITY: f64 = 0.3;

/// Width and x-offset for one action button, in row-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    /// Instantaneous button width.
    pub width: f64,
    /// X-offset within the (already scroll-translated) row.
    pub x_offset: f64,
}

/// Placement of the dimmed overlay covering the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    /// Whether the overlay participates at all (any reveal width exists).
    pub visible: bool,
    /// X-offset within the row.
    pub x_offset: f64,
    /// Overlay opacity.
    pub opacity: f64,
}

/// Everything the host needs to render one frame of the row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Horizontal translation applied to the whole row.
    pub content_offset: f64,
    /// Per-action layout, in action order.
    pub buttons: Vec<ButtonLayout>,
    /// Dimmed overlay placement.
    pub overlay: OverlayLayout,
    /// Clip width (the configured row width).
    pub clip_width: f64,
    /// Clip height (the measured content height).
    pub clip_height: f64,
}

/// Fraction of the reveal that is currently visible, in `[0, 1]`.
///
/// `0` when closed, `1` when fully open. Zero total width resolves to `0`
/// (a row with nothing to reveal is closed) rather than dividing.
#[must_use]
pub fn reveal_fraction(core: &RevealCore) -> f64 {
    let total = core.total_button_width();
    if total == 0.0 {
        return 0.0;
    }
    -core.scroll_offset() / total
}

/// Instantaneous width of the button at `index`.
///
/// With no selection every button renders at its measured width. A locked
/// selection partitions the strip: buttons before the selected one collapse
/// to zero, the selected one expands to the full reveal width, and buttons
/// after it keep their measured width (they are pushed off-screen by
/// [`button_offset`] instead).
#[must_use]
pub fn button_width(core: &RevealCore, index: usize) -> f64 {
    match core.selected() {
        Some(selected) if selected > index => 0.0,
        Some(selected) if selected == index => core.total_button_width(),
        _ => core.width_at(index),
    }
}

/// X-offset of the button at `index` within the scroll-translated row.
///
/// Unselected buttons interpolate proportionally to the drag progress so
/// the strip fans out as the row opens. When `total_button_width == 0` the
/// formula would divide by zero; every offset resolves to `max_width`
/// (fully parked) instead.
#[must_use]
pub fn button_offset(core: &RevealCore, index: usize) -> f64 {
    let max_width = core.max_width();
    let total = core.total_button_width();
    if total == 0.0 {
        return max_width;
    }
    match core.selected() {
        Some(selected) if selected < index => max_width + total,
        Some(selected) if selected == index => max_width,
        _ => {
            let pre = core.width_before(index);
            max_width + pre - pre * (core.scroll_offset() + total) / total
        }
    }
}

/// X-offset of the dimmed overlay within the row.
///
/// Slides from `max_width` (parked beside the closed content) toward `0`
/// as the row opens; the same divide guard as [`button_offset`] applies.
#[must_use]
pub fn overlay_offset(core: &RevealCore) -> f64 {
    let total = core.total_button_width();
    if total == 0.0 {
        return core.max_width();
    }
    core.max_width() * (core.scroll_offset() + total) / total
}

/// X-offset at which the host should park the off-screen measurement probe
/// row (buttons laid out at natural size so their widths can be reported).
#[must_use]
pub fn measurement_offset(core: &RevealCore) -> f64 {
    core.max_width() + core.total_button_width()
}

/// Resolves the full per-frame layout for the current state.
#[must_use]
pub fn frame(core: &RevealCore) -> RenderFrame {
    let buttons = (0..core.len())
        .map(|index| ButtonLayout {
            width: button_width(core, index),
            x_offset: button_offset(core, index),
        })
        .collect();
    RenderFrame {
        content_offset: core.scroll_offset(),
        buttons,
        overlay: OverlayLayout {
            visible: core.total_button_width() > 0.0,
            x_offset: overlay_offset(core),
            opacity: OVERLAY_OPACITY,
        },
        clip_width: core.max_width(),
        clip_height: core.content_height(),
    }
}
