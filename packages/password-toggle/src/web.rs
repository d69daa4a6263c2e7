//! Browser bindings for the toggle, backed by `web-sys`.

use gloo::events::EventListener;
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast};
use web_sys::{Document, Element, HtmlInputElement};

use crate::{toggle_password, Config, ElementTree, InputMode};

/// An [`ElementTree`] over the live browser document.
#[derive(Debug, Clone)]
pub struct WebTree {
    document: Document,
}

impl WebTree {
    /// Wrap an existing document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, or [`None`] when not running in a browser page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl ElementTree for WebTree {
    type Handle = Element;

    fn lookup_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn is_checked(&self, element: &Element) -> bool {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn set_input_mode(&self, element: &Element, mode: InputMode) {
        match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_type(mode.as_type_attr()),
            None => {
                if let Err(err) = element.set_attribute("type", mode.as_type_attr()) {
                    tracing::trace!("failed to set type on #{}: {err:?}", element.id());
                }
            }
        }
    }

    fn input_mode(&self, element: &Element) -> Option<InputMode> {
        let ty = match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.type_(),
            None => element.get_attribute("type")?,
        };
        ty.parse().ok()
    }
}

/// Synchronize the password field `field_id` with the checkbox `checkbox_id` in the current document.
///
/// Exported to JavaScript as `togglePassword(checkboxId, passwordInputId)` so markup can call it from an
/// `onchange` attribute. Does nothing when either element is missing or when there is no document.
#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password_js(checkbox_id: &str, field_id: &str) {
    match WebTree::current() {
        Some(tree) => toggle_password(&tree, checkbox_id, field_id),
        None => tracing::trace!("no document available, skipping password toggle"),
    }
}

/// A live listener keeping a password field in sync with its checkbox.
///
/// The listener is removed when this is dropped.
#[must_use = "the field stops following the checkbox as soon as the binding is dropped"]
pub struct ToggleBinding {
    listener: EventListener,
}

impl ToggleBinding {
    /// Keep the listener installed for the lifetime of the page.
    pub fn forget(self) {
        self.listener.forget();
    }
}

/// Listen for the configured event on `checkbox_id` and sync `field_id` every time it fires.
///
/// Returns [`None`] if there is no document or the checkbox doesn't exist yet. The field does not
/// have to exist when attaching; both elements are looked up again on every event.
pub fn attach(checkbox_id: &str, field_id: &str, cfg: &Config) -> Option<ToggleBinding> {
    let tree = WebTree::current()?;
    let Some(checkbox) = tree.lookup_by_id(checkbox_id) else {
        tracing::debug!("cannot attach password toggle, no element with id {checkbox_id:?}");
        return None;
    };

    if cfg.sync_on_attach {
        toggle_password(&tree, checkbox_id, field_id);
    }

    let checkbox_id = checkbox_id.to_string();
    let field_id = field_id.to_string();
    let listener = EventListener::new(&checkbox, cfg.event.clone(), move |_| {
        toggle_password_js(&checkbox_id, &field_id);
    });

    Some(ToggleBinding { listener })
}

/// Attach a toggle with the default [`Config`] and keep it for the lifetime of the page.
///
/// Exported to JavaScript as `attachPasswordToggle(checkboxId, passwordInputId)`. Returns whether the
/// listener was installed.
#[wasm_bindgen(js_name = attachPasswordToggle)]
pub fn attach_js(checkbox_id: &str, field_id: &str) -> bool {
    attach(checkbox_id, field_id, &Config::new())
        .map(ToggleBinding::forget)
        .is_some()
}

/// Send `tracing` events at or above `level` to the browser console and log panics there too.
///
/// Returns `false` if a global subscriber was already installed, in which case that one is kept.
pub fn init_logging(level: tracing::Level) -> bool {
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    let subscriber = tracing_subscriber::registry().with(tracing_wasm::WASMLayer::new(config));

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
