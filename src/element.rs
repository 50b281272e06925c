//! Markup roles the lightbox depends on.
//!
//! The controller never queries a document. It is handed values implementing
//! these traits: [`crate::dom`] implements them for `web-sys` elements and the
//! tests implement them with in-memory fakes.

/// A clickable container wrapping a preview image.
pub trait Thumbnail {
    type Image: PreviewImage;

    /// The container's descendant preview image.
    ///
    /// # Errors
    ///
    /// Returns why no image is available: none matched, or the lookup
    /// itself failed.
    fn image(&self) -> Result<Self::Image, String>;
}

/// Read side of a preview image.
pub trait PreviewImage {
    fn src(&self) -> String;
    fn alt(&self) -> String;
}

/// The overlay's `<img>`, written on every open.
pub trait ZoomImage {
    fn set_src(&self, src: &str);
    fn set_alt(&self, alt: &str);
}

/// The fullscreen overlay layer.
pub trait OverlayLayer {
    /// Whatever an activation reports as its origin.
    type Target;

    /// Apply a CSS `display` value. Errors carry the browser's message.
    ///
    /// # Errors
    ///
    /// Returns the failure message when the style write is rejected.
    fn set_display(&self, display: &str) -> Result<(), String>;

    /// True when `target` is this very element, not a descendant or a
    /// look-alike with the same classes.
    fn is_target(&self, target: &Self::Target) -> bool;
}
