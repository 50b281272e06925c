//! Overlay visibility: the two-state machine behind the lightbox.
//!
//! The overlay starts [`Visibility::Hidden`]. Opening a thumbnail moves it to
//! [`Visibility::Shown`] (or keeps it there with new image data); closing or a
//! background click moves it back. There is no terminal state.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::DISPLAY_HIDDEN;

/// Whether the overlay layer is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    /// CSS `display` value for this state, using `shown` for the visible case.
    #[must_use]
    pub fn css_display(self, shown: &str) -> &str {
        match self {
            Self::Shown => shown,
            Self::Hidden => DISPLAY_HIDDEN,
        }
    }
}

/// User activations that drive the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A thumbnail was activated.
    Open,
    /// The close control was activated.
    Close,
    /// The overlay itself (not a descendant) was clicked.
    BackgroundClick,
}

impl Transition {
    /// State the overlay ends up in after this transition.
    ///
    /// The result does not depend on the current state: closing a hidden
    /// overlay stays hidden and opening a shown overlay stays shown.
    #[must_use]
    pub fn target(self) -> Visibility {
        match self {
            Self::Open => Visibility::Shown,
            Self::Close | Self::BackgroundClick => Visibility::Hidden,
        }
    }
}
