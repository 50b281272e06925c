//! Lightbox configuration.
//!
//! Every field has a default matching the stock markup, so an empty JSON
//! object (or no config at all) binds to `.zoomable-image-container`
//! thumbnails and the `#fullpage` overlay.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CLOSE_CONTROL_SELECTOR, DEFAULT_LOG_LEVEL, DISPLAY_HIDDEN, DISPLAY_SHOWN, OVERLAY_IMAGE_SELECTOR, OVERLAY_SELECTOR,
    THUMBNAIL_IMAGE_SELECTOR, THUMBNAIL_SELECTOR,
};
use crate::error::LightboxError;

/// CSS selectors locating each markup role.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    /// Thumbnail containers (0..N).
    pub thumbnail: String,
    /// Preview image, relative to its thumbnail container.
    pub thumbnail_image: String,
    /// The overlay root (exactly one).
    pub overlay: String,
    /// The overlay's zoom image (exactly one).
    pub overlay_image: String,
    /// The close control (exactly one).
    pub close_control: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            thumbnail: THUMBNAIL_SELECTOR.to_owned(),
            thumbnail_image: THUMBNAIL_IMAGE_SELECTOR.to_owned(),
            overlay: OVERLAY_SELECTOR.to_owned(),
            overlay_image: OVERLAY_IMAGE_SELECTOR.to_owned(),
            close_control: CLOSE_CONTROL_SELECTOR.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    pub selectors: Selectors,
    /// CSS `display` value used when the overlay is shown.
    pub shown_display: String,
    /// Browser console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            shown_display: DISPLAY_SHOWN.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl LightboxConfig {
    /// Parse a JSON config. Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::Config`] for malformed JSON or unknown fields,
    /// and whatever [`LightboxConfig::validate`] rejects.
    pub fn from_json(json: &str) -> Result<Self, LightboxError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::ShownDisplay`] when `shown_display` is blank or
    /// `none`: a blank value drops the inline style and lets the stylesheet
    /// hide the overlay again, so opening would do nothing visible.
    pub fn validate(&self) -> Result<(), LightboxError> {
        let display = self.shown_display.trim();
        if display.is_empty() || display.eq_ignore_ascii_case(DISPLAY_HIDDEN) {
            return Err(LightboxError::ShownDisplay(self.shown_display.clone()));
        }
        self.level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`LightboxError::LogLevel`] when the name is not a `log` level.
    pub fn level(&self) -> Result<log::Level, LightboxError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| LightboxError::LogLevel(self.log_level.clone()))
    }
}
