//! Browser side of the lightbox: `web-sys` implementations of the
//! [`crate::element`] roles, selector resolution, and click wiring.
//!
//! ARCHITECTURE
//! ============
//! [`Markup::resolve`] finds every element up front and fails before any
//! listener exists. [`bind`] then shares one [`Lightbox`] between the
//! listeners through `Rc<RefCell<_>>`. Listeners live as long as the page, so
//! their closures are leaked with `forget` once all of them are registered.

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement};

use crate::config::{LightboxConfig, Selectors};
use crate::consts::CLICK_EVENT;
use crate::element::{OverlayLayer, PreviewImage, Thumbnail, ZoomImage};
use crate::error::{LightboxError, js_message};
use crate::lightbox::Lightbox;

/// The controller as bound to real DOM elements.
pub type DomLightbox = Lightbox<HtmlElement, HtmlImageElement>;

// =============================================================
// Element roles
// =============================================================

/// A thumbnail container and the selector of its preview image.
///
/// The preview image is looked up on every activation.
pub struct DomThumbnail {
    container: Element,
    image_selector: String,
}

impl DomThumbnail {
    #[must_use]
    pub fn new(container: Element, image_selector: impl Into<String>) -> Self {
        Self { container, image_selector: image_selector.into() }
    }
}

impl Thumbnail for DomThumbnail {
    type Image = HtmlImageElement;

    fn image(&self) -> Result<HtmlImageElement, String> {
        let found = self
            .container
            .query_selector(&self.image_selector)
            .map_err(|err| format!("preview lookup `{}` failed: {}", self.image_selector, js_message(&err)))?;
        found
            .and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned())
            .ok_or_else(|| format!("thumbnail has no `{}` preview image", self.image_selector))
    }
}

impl PreviewImage for HtmlImageElement {
    fn src(&self) -> String {
        HtmlImageElement::src(self)
    }

    fn alt(&self) -> String {
        HtmlImageElement::alt(self)
    }
}

impl ZoomImage for HtmlImageElement {
    fn set_src(&self, src: &str) {
        HtmlImageElement::set_src(self, src);
    }

    fn set_alt(&self, alt: &str) {
        HtmlImageElement::set_alt(self, alt);
    }
}

impl OverlayLayer for HtmlElement {
    type Target = EventTarget;

    fn set_display(&self, display: &str) -> Result<(), String> {
        self.style()
            .set_property("display", display)
            .map_err(|err| js_message(&err))
    }

    fn is_target(&self, target: &EventTarget) -> bool {
        // Strict JS identity, never a selector match.
        let this: &JsValue = self.as_ref();
        let target: &JsValue = target.as_ref();
        this == target
    }
}

// =============================================================
// Resolution
// =============================================================

/// Every element the lightbox needs, found in one document.
pub struct Markup {
    pub overlay: HtmlElement,
    pub overlay_image: HtmlImageElement,
    pub close_control: Element,
    pub thumbnails: Vec<Element>,
}

impl Markup {
    /// Locate the singletons and thumbnails named by `selectors`.
    ///
    /// # Errors
    ///
    /// Fails on a missing or mistyped singleton and on any selector the
    /// browser rejects. No thumbnails is not an error.
    pub fn resolve(document: &Document, selectors: &Selectors) -> Result<Self, LightboxError> {
        let overlay = query_one(document, &selectors.overlay, "overlay")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| LightboxError::WrongElementType {
                role: "overlay",
                selector: selectors.overlay.clone(),
                expected: "HTMLElement",
            })?;
        let overlay_image = query_one(document, &selectors.overlay_image, "overlay image")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| LightboxError::WrongElementType {
                role: "overlay image",
                selector: selectors.overlay_image.clone(),
                expected: "HTMLImageElement",
            })?;
        let close_control = query_one(document, &selectors.close_control, "close control")?;

        // Surface a bad preview selector now rather than on the first click.
        document
            .query_selector(&selectors.thumbnail_image)
            .map_err(|err| invalid_selector(&selectors.thumbnail_image, &err))?;

        let thumbnails = query_all(document, &selectors.thumbnail)?;

        Ok(Self { overlay, overlay_image, close_control, thumbnails })
    }
}

fn query_one(document: &Document, selector: &str, role: &'static str) -> Result<Element, LightboxError> {
    document
        .query_selector(selector)
        .map_err(|err| invalid_selector(selector, &err))?
        .ok_or_else(|| LightboxError::MissingElement { role, selector: selector.to_owned() })
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, LightboxError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| invalid_selector(selector, &err))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn invalid_selector(selector: &str, err: &JsValue) -> LightboxError {
    LightboxError::InvalidSelector { selector: selector.to_owned(), message: js_message(err) }
}

// =============================================================
// Binding
// =============================================================

/// Register the click listeners and return how many thumbnails were bound.
///
/// Listeners, in registration order:
/// - each thumbnail opens the overlay with its preview image,
/// - the close control closes it,
/// - the overlay dismisses itself when it is the click target. Clicks on the
///   close control bubble here as well; hiding twice is harmless.
///
/// Registration is all or nothing: listeners are only leaked once every one
/// of them was accepted.
///
/// # Errors
///
/// Returns [`LightboxError::Dom`] if the browser refuses a listener. Any
/// listener registered before the failure is removed again.
pub fn bind(markup: Markup, config: &LightboxConfig) -> Result<usize, LightboxError> {
    let count = markup.thumbnails.len();
    let mut listeners = Listeners::default();
    match register(&mut listeners, markup, config) {
        Ok(()) => {
            listeners.commit();
            Ok(count)
        }
        Err(err) => {
            listeners.rollback();
            Err(err)
        }
    }
}

fn register(listeners: &mut Listeners, markup: Markup, config: &LightboxConfig) -> Result<(), LightboxError> {
    let Markup { overlay, overlay_image, close_control, thumbnails } = markup;
    let lightbox = Rc::new(RefCell::new(Lightbox::with_shown_display(
        overlay.clone(),
        overlay_image,
        config.shown_display.clone(),
    )));

    for container in thumbnails {
        let thumbnail = DomThumbnail::new(container.clone(), config.selectors.thumbnail_image.clone());
        let lightbox = Rc::clone(&lightbox);
        listeners.add(&container, CLICK_EVENT, move |_event| {
            with_lightbox(&lightbox, |lb| {
                lb.open(&thumbnail);
            });
        })?;
    }

    {
        let lightbox = Rc::clone(&lightbox);
        listeners.add(&close_control, CLICK_EVENT, move |_event| {
            with_lightbox(&lightbox, |lb| {
                lb.close();
            });
        })?;
    }

    listeners.add(&overlay, CLICK_EVENT, move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        with_lightbox(&lightbox, |lb| {
            lb.dismiss_on_background_click(&target);
        });
    })
}

/// Attach `handler` to `target` for the page lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), LightboxError> {
    let mut listeners = Listeners::default();
    listeners.add(target, event, handler)?;
    listeners.commit();
    Ok(())
}

/// Listeners registered so far, held until they are committed or rolled back.
#[derive(Default)]
pub(crate) struct Listeners {
    registered: Vec<(EventTarget, &'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
    pub(crate) fn add(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), LightboxError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| LightboxError::Dom(js_message(&err)))?;
        self.registered.push((target.clone(), event, closure));
        Ok(())
    }

    /// Keep every listener alive for the page lifetime.
    pub(crate) fn commit(self) {
        for (_, _, closure) in self.registered {
            closure.forget();
        }
    }

    /// Detach every listener; the closures are dropped afterwards.
    pub(crate) fn rollback(self) {
        for (target, event, closure) in self.registered {
            if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
                log::warn!("lightbox: failed to detach {event} listener: {}", js_message(&err));
            }
        }
    }
}

fn with_lightbox(lightbox: &Rc<RefCell<DomLightbox>>, f: impl FnOnce(&mut DomLightbox)) {
    match lightbox.try_borrow_mut() {
        Ok(mut lb) => f(&mut lb),
        Err(_) => log::warn!("lightbox: controller busy; dropping activation"),
    }
}
