//! WebAssembly entry points.
//!
//! The host page loads the module and calls one of the exported functions
//! once. Binding waits for `DOMContentLoaded` when the document is still
//! parsing, otherwise it happens immediately.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::LightboxConfig;
use crate::consts::DOM_CONTENT_LOADED_EVENT;
use crate::dom::{Markup, bind, listen};
use crate::error::LightboxError;

/// Bind the lightbox to the stock markup.
///
/// # Errors
///
/// Throws a JS `Error` when the overlay, overlay image or close control is
/// missing. No listener is registered in that case.
#[wasm_bindgen]
pub fn init_lightbox() -> Result<(), JsValue> {
    start(LightboxConfig::default())?;
    Ok(())
}

/// Bind the lightbox using a JSON [`LightboxConfig`].
///
/// # Errors
///
/// Throws a JS `Error` for a malformed config or a configuration fault in
/// the markup.
#[wasm_bindgen]
pub fn init_lightbox_with_config(json: &str) -> Result<(), JsValue> {
    let config = LightboxConfig::from_json(json)?;
    start(config)?;
    Ok(())
}

fn start(config: LightboxConfig) -> Result<(), LightboxError> {
    config.validate()?;
    install_logging(config.level()?);

    let window = web_sys::window().ok_or(LightboxError::NoWindow)?;
    let document = window.document().ok_or(LightboxError::NoDocument)?;

    if document.ready_state() == "loading" {
        log::debug!("lightbox: document still loading; waiting for {DOM_CONTENT_LOADED_EVENT}");
        let doc = document.clone();
        let mut pending = Some(config);
        return listen(&document, DOM_CONTENT_LOADED_EVENT, move |_event| {
            let Some(config) = pending.take() else {
                return;
            };
            if let Err(err) = attach(&doc, &config) {
                log::error!("lightbox: {err}");
            }
        });
    }

    attach(&document, &config)
}

fn attach(document: &Document, config: &LightboxConfig) -> Result<(), LightboxError> {
    let markup = Markup::resolve(document, &config.selectors)?;
    let count = bind(markup, config)?;
    if count == 0 {
        log::info!("lightbox: no thumbnails match `{}`", config.selectors.thumbnail);
    } else {
        log::info!("lightbox: bound {count} thumbnails");
    }
    Ok(())
}

fn install_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("lightbox: console logger already installed");
    }
}
