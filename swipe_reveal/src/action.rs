// Copyright 2025 the Swipe Reveal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action definitions for a swipe row.
//!
//! A [`SwipeAction`] is one button in the reveal strip. Two tap behaviors
//! exist:
//!
//! - **Tip** actions (`is_tip == true`): the first tap while nothing is
//!   selected only locks the row open onto the action as a confirmation
//!   step; a second tap invokes it.
//! - **Quick** actions: a single tap invokes the callback directly.
//!
//! Actions are normally built through [`ActionSpec`], which mirrors the four
//! construction forms hosts use and applies the empty-label drop rule.
//! Callbacks receive a [`CloseHandle`] and are expected to call
//! [`CloseHandle::close`] when their work is done (actions without a
//! callback fold the row immediately).

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use peniko::Color;

/// Callback invoked when an action fires.
///
/// The handle it receives folds the row; call it once the action's work
/// (which may complete asynchronously, on a later event turn) is done.
pub type ActionCallback = Box<dyn FnMut(CloseHandle)>;

/// Requests that the owning row fold back to the collapsed state.
///
/// Cheap to clone; all clones share one pending-close flag. The flag is
/// drained by the owning [`SwipeRow`](crate::row::SwipeRow) on its event
/// turn, so calling [`CloseHandle::close`] from inside a callback never
/// re-enters the row mid-dispatch. Calling it more than once is harmless.
#[derive(Debug, Clone)]
pub struct CloseHandle {
    requested: Rc<Cell<bool>>,
}

impl CloseHandle {
    pub(crate) fn new(requested: Rc<Cell<bool>>) -> Self {
        Self { requested }
    }

    /// Records a pending close request.
    pub fn close(&self) {
        self.requested.set(true);
    }
}

/// One configured action button.
pub struct SwipeAction {
    /// Button label; also the key under which the host reports this
    /// button's measured width.
    pub label: String,
    /// Button background color.
    pub background: Color,
    /// Label foreground color.
    pub foreground: Color,
    /// Tip actions require a reveal-confirm step before invoking.
    pub is_tip: bool,
    /// Invoked when the action fires; `None` folds the row immediately.
    pub on_invoke: Option<ActionCallback>,
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("label", &self.label)
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("is_tip", &self.is_tip)
            .field("on_invoke", &self.on_invoke.is_some())
            .finish()
    }
}

/// Tagged construction forms for [`SwipeAction`].
///
/// `Quick` and `Common` silently drop actions with empty labels; `Custom`
/// and `Simple` add their action unconditionally.
pub enum ActionSpec {
    /// Fully specified action: any label, both colors, a callback.
    /// Tip behavior.
    Custom {
        /// Button label (may be empty).
        label: String,
        /// Button background color.
        background: Color,
        /// Label foreground color.
        foreground: Color,
        /// Callback invoked when the action fires.
        on_invoke: ActionCallback,
    },
    /// Single-tap action with a white foreground. Dropped if the label is
    /// empty.
    Quick {
        /// Button label; must be non-empty for the action to be added.
        label: String,
        /// Button background color.
        background: Color,
        /// Callback invoked when the action fires.
        on_invoke: ActionCallback,
    },
    /// Label and background only: no callback, tip behavior. Firing it
    /// folds the row.
    Simple {
        /// Button label (may be empty).
        label: String,
        /// Button background color.
        background: Color,
    },
    /// Tip action with a white foreground. Dropped if the label is empty.
    Common {
        /// Button label; must be non-empty for the action to be added.
        label: String,
        /// Button background color.
        background: Color,
        /// Callback invoked when the action fires.
        on_invoke: ActionCallback,
    },
}

impl fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Custom { .. } => "Custom",
            Self::Quick { .. } => "Quick",
            Self::Simple { .. } => "Simple",
            Self::Common { .. } => "Common",
        };
        f.debug_struct("ActionSpec").field("form", &name).finish()
    }
}

impl ActionSpec {
    /// Builds the action, or `None` when the empty-label drop rule applies.
    #[must_use]
    pub fn build(self) -> Option<SwipeAction> {
        match self {
            Self::Custom {
                label,
                background,
                foreground,
                on_invoke,
            } => Some(SwipeAction {
                label,
                background,
                foreground,
                is_tip: true,
                on_invoke: Some(on_invoke),
            }),
            Self::Quick {
                label,
                background,
                on_invoke,
            } => {
                if label.is_empty() {
                    return None;
                }
                Some(SwipeAction {
                    label,
                    background,
                    foreground: Color::WHITE,
                    is_tip: false,
                    on_invoke: Some(on_invoke),
                })
            }
            Self::Simple { label, background } => Some(SwipeAction {
                label,
                background,
                foreground: Color::WHITE,
                is_tip: true,
                on_invoke: None,
            }),
            Self::Common {
                label,
                background,
                on_invoke,
            } => {
                if label.is_empty() {
                    return None;
                }
                Some(SwipeAction {
                    label,
                    background,
                    foreground: Color::WHITE,
                    is_tip: true,
                    on_invoke: Some(on_invoke),
                })
            }
        }
    }
}
