//! Shared constants for the lightbox crate.

// ── Default selectors ───────────────────────────────────────────

/// Every element matching this selector opens the overlay when clicked.
pub const THUMBNAIL_SELECTOR: &str = ".zoomable-image-container";

/// Preview image looked up inside each thumbnail container.
pub const THUMBNAIL_IMAGE_SELECTOR: &str = "img";

/// The fullscreen overlay layer.
pub const OVERLAY_SELECTOR: &str = "#fullpage";

/// The `<img>` inside the overlay that receives the zoomed source.
pub const OVERLAY_IMAGE_SELECTOR: &str = "#fullscreen-image";

/// The close control inside the overlay.
pub const CLOSE_CONTROL_SELECTOR: &str = "#fullpage .close-btn";

// ── CSS display values ──────────────────────────────────────────

/// `display` value applied when the overlay is shown.
pub const DISPLAY_SHOWN: &str = "block";

/// `display` value applied when the overlay is hidden.
pub const DISPLAY_HIDDEN: &str = "none";

// ── DOM ─────────────────────────────────────────────────────────

pub const CLICK_EVENT: &str = "click";
pub const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";

/// Console log level used when the config does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
