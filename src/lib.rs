//! Lightbox image zoom for static pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Clicking a
//! thumbnail opens a fullscreen overlay with the full-size image; the overlay
//! closes from its close control or from a click on its background. The host
//! page only loads the module and calls [`boot::init_lightbox`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`lightbox`] | The controller: open, close, background dismissal |
//! | [`overlay`] | Overlay visibility state machine |
//! | [`element`] | Markup role traits the controller is generic over |
//! | [`dom`] | `web-sys` implementations, selector resolution, click wiring |
//! | [`boot`] | wasm-bindgen entry points, logging setup |
//! | [`config`] | Selectors and display settings |
//! | [`error`] | Initialization error type |
//! | [`consts`] | Default selectors and CSS values |

pub mod boot;
pub mod config;
pub mod consts;
pub mod dom;
pub mod element;
pub mod error;
pub mod lightbox;
pub mod overlay;
