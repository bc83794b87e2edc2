// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe Reveal: renderer-agnostic state and geometry for swipe-to-reveal rows.
//!
//! This crate implements the interaction core of a "swipe button" row: a piece
//! of content that can be dragged horizontally to reveal a strip of action
//! buttons behind it (delete, archive, ...), in the style of swipeable rows in
//! mobile messaging and mail apps.
//!
//! The crate deliberately knows nothing about widgets, layout engines, or
//! painting. Hosts own rendering, hit testing, and animation playback; the
//! core consumes three event sources and answers one question:
//!
//! - **Inputs**: drag-gesture samples (horizontal translations plus an end
//!   event), layout measurement reports (per-button widths keyed by label,
//!   content height samples), and taps (on an action, or on the dimmed
//!   overlay that covers the content while the row is open).
//! - **Output**: a [`geometry::RenderFrame`] describing, for the current
//!   state, the content row's offset, each button's width and x-offset, the
//!   overlay's offset and opacity, and the clip bounds.
//!
//! The moving parts:
//!
//! - [`drag`]: pointer tracking plus the fixed drag policy — a 16-unit dead
//!   zone, clamping to the reveal width, and a half-width midpoint snap on
//!   release.
//! - [`reveal`]: the discrete reveal/fold state machine
//!   ([`reveal::RevealCore`]) — collapsed, partially open, fully open, or
//!   locked onto one selected action — plus the measurement-report merge
//!   rules and a revision counter hosts can poll to re-render on change.
//! - [`geometry`]: pure functions mapping the current state to per-button
//!   widths and x-offsets, so buttons stagger in proportionally to the drag
//!   and a locked selection pins one button at the full reveal width.
//! - [`action`]: action definitions — label, colors, tip-vs-quick behavior,
//!   and an optional callback handed a [`action::CloseHandle`] to fold the
//!   row once the action's (possibly asynchronous) work completes.
//! - [`row`]: [`row::SwipeRow`], a small controller tying the above together
//!   for hosts that want tap dispatch and close-signal draining handled.
//!
//! Every state change carries a [`reveal::Transition`] hint (smooth, fixed
//! linear duration, or instant). Hints are fire-and-forget requests to the
//! host's animation layer; the core never waits on them.
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use swipe_reveal::action::ActionSpec;
//! use swipe_reveal::row::SwipeRow;
//!
//! let mut row = SwipeRow::new(
//!     320.0,
//!     [
//!         ActionSpec::Simple {
//!             label: "Delete".into(),
//!             background: Color::from_rgb8(0xd0, 0x21, 0x2b),
//!         },
//!         ActionSpec::Quick {
//!             label: "Pin".into(),
//!             background: Color::from_rgb8(0x2b, 0x6c, 0xd0),
//!             on_invoke: Box::new(|close| close.close()),
//!         },
//!     ],
//! );
//!
//! // The host reports measured button widths after its layout pass.
//! row.report_width("Delete", 72.0);
//! row.report_width("Pin", 56.0);
//!
//! // A drag to the left opens the row; crossing half the reveal width
//! // makes it stay open on release.
//! row.drag_update(-80.0);
//! row.drag_end(-80.0);
//! assert_eq!(row.core().scroll_offset(), -128.0);
//!
//! let frame = row.frame();
//! assert_eq!(frame.buttons.len(), 2);
//! ```
//!
//! All offsets and widths live in the host's logical coordinate space
//! (typically logical pixels) and are expected to be finite. This crate is
//! `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod action;
pub mod drag;
pub mod geometry;
pub mod reveal;
pub mod row;

pub use action::{ActionSpec, CloseHandle, SwipeAction};
pub use geometry::{ButtonLayout, OverlayLayout, RenderFrame};
pub use reveal::{ActionSlot, RevealCore, RevealPhase, TapOutcome, Transition};
pub use row::{SwipeRow, TapResponse};
