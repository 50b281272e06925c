//! The lightbox controller.
//!
//! Owns the overlay layer and its zoom image, and tracks the overlay's
//! [`Visibility`]. Each operation corresponds to one user activation:
//!
//! - [`Lightbox::open`] on a thumbnail click,
//! - [`Lightbox::close`] on a close-control click,
//! - [`Lightbox::dismiss_on_background_click`] on any click that reaches the
//!   overlay, including ones bubbling up from its descendants.
//!
//! Nothing here touches `web-sys` directly, so the whole state machine runs
//! under plain `cargo test`.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::consts::DISPLAY_SHOWN;
use crate::element::{OverlayLayer, PreviewImage, Thumbnail, ZoomImage};
use crate::overlay::{Transition, Visibility};

pub struct Lightbox<O, Z> {
    overlay: O,
    image: Z,
    shown_display: String,
    visibility: Visibility,
}

impl<O: OverlayLayer, Z: ZoomImage> Lightbox<O, Z> {
    /// Bind a controller to its overlay and zoom image. The overlay is assumed
    /// to start hidden, as the markup ships it.
    #[must_use]
    pub fn new(overlay: O, image: Z) -> Self {
        Self::with_shown_display(overlay, image, DISPLAY_SHOWN)
    }

    /// Like [`Lightbox::new`], but shows the overlay with a custom CSS
    /// `display` value (e.g. `flex` for a centered layout).
    #[must_use]
    pub fn with_shown_display(overlay: O, image: Z, shown_display: impl Into<String>) -> Self {
        Self {
            overlay,
            image,
            shown_display: shown_display.into(),
            visibility: Visibility::Hidden,
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Show `thumbnail`'s preview image in the overlay.
    ///
    /// The zoom image's `src` and `alt` are overwritten before the overlay is
    /// shown, so the last activation always wins. A thumbnail without a
    /// preview image leaves everything untouched. Returns whether the overlay
    /// was updated.
    pub fn open<T: Thumbnail>(&mut self, thumbnail: &T) -> bool {
        let preview = match thumbnail.image() {
            Ok(preview) => preview,
            Err(reason) => {
                log::warn!("lightbox: ignoring activation: {reason}");
                return false;
            }
        };

        let src = preview.src();
        let alt = preview.alt();
        if self.visibility.is_shown() {
            log::debug!("lightbox: replacing displayed image with src={src}");
        }
        self.image.set_src(&src);
        self.image.set_alt(&alt);
        log::debug!("lightbox: open src={src} alt={alt}");

        self.transition(Transition::Open)
    }

    /// Hide the overlay regardless of its current state.
    pub fn close(&mut self) -> bool {
        self.transition(Transition::Close)
    }

    /// Hide the overlay when the click originated on the overlay itself.
    ///
    /// Clicks on descendants (the zoomed image, the close control) bubble up
    /// here too and are ignored. Returns whether the overlay was hidden.
    pub fn dismiss_on_background_click(&mut self, target: &O::Target) -> bool {
        if !self.overlay.is_target(target) {
            return false;
        }
        self.transition(Transition::BackgroundClick)
    }

    fn transition(&mut self, transition: Transition) -> bool {
        let next = transition.target();
        match self.overlay.set_display(next.css_display(&self.shown_display)) {
            Ok(()) => {
                if next != self.visibility {
                    log::debug!("lightbox: {:?} -> {next:?} via {transition:?}", self.visibility);
                }
                self.visibility = next;
                true
            }
            Err(message) => {
                log::warn!("lightbox: failed to apply {transition:?}: {message}");
                false
            }
        }
    }
}
