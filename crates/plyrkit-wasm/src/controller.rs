//! Player controller - mounts the Plyr widget over a page video element
//!
//! The controller is an explicit, instantiable type rather than a page
//! global: the widget loader is constructor-injectable and every instance
//! carries its own lifecycle state.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use plyrkit_core::{ControllerState, Error, PlayerOptions, Result, SpeedConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlSourceElement, HtmlVideoElement};

use crate::lockout::{self, ListenerGuard};
use crate::log;
use crate::widget::{self, PlyrHandle, WIDGET_MODULE_PATH};

/// Mutable controller state, shared with in-flight initialization futures
struct ControllerInner {
    state: ControllerState,
    media_element: Option<HtmlVideoElement>,
    source_url: Option<String>,
    widget: Option<PlyrHandle>,
    /// Lockout listeners, detached again on re-initialization
    lockout_guards: Vec<ListenerGuard>,
    /// One-time ready hook applying the selected playback rate
    ready_hook: Option<Closure<dyn FnMut()>>,
    /// The registered end-of-playback callback, removable on teardown
    ended_callback: Option<Function>,
}

/// Controller for one video element and its player widget
#[wasm_bindgen]
pub struct PlayerController {
    inner: Rc<RefCell<ControllerInner>>,
    /// Caller-injected widget loader; `None` falls back to dynamic import
    loader: Option<Function>,
    module_path: String,
}

#[wasm_bindgen]
impl PlayerController {
    /// Controller using the default widget module path
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_module_path(WIDGET_MODULE_PATH.to_string())
    }

    /// Controller importing the widget from a non-default module path
    pub fn with_module_path(module_path: String) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                state: ControllerState::Uninitialized,
                media_element: None,
                source_url: None,
                widget: None,
                lockout_guards: Vec::new(),
                ready_hook: None,
                ended_callback: None,
            })),
            loader: None,
            module_path,
        }
    }

    /// Controller with a caller-injected widget loader
    ///
    /// The loader receives the module path and must return a promise
    /// resolving to the widget constructor. Lets hosts bundle the widget
    /// themselves and lets tests substitute it entirely.
    pub fn with_loader(loader: Function) -> Self {
        let mut controller = Self::new();
        controller.loader = Some(loader);
        controller
    }

    /// Mount the player: resolve the element, attach the media source, load
    /// the widget library, and apply configuration.
    ///
    /// `controls` is a JS array of control tokens or null for the default
    /// bar; `speed` is `{selected, options}` or null for rate 1.
    ///
    /// Failures are reported to the console and the returned promise still
    /// resolves, so the hosting page is never interrupted.
    pub fn initialize(
        &self,
        element_id: String,
        source_url: String,
        on_ended: Option<Function>,
        controls: JsValue,
        speed: JsValue,
        interactive: Option<bool>,
    ) -> Promise {
        let inner = Rc::clone(&self.inner);
        let loader = self.loader.clone();
        let module_path = self.module_path.clone();
        let options = parse_options(controls, speed, interactive);

        future_to_promise(async move {
            if let Err(err) =
                run_initialize(&inner, loader.as_ref(), &module_path, &element_id, source_url, on_ended, options).await
            {
                log::report(&err);
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Start playback through the widget
    ///
    /// Fails loudly when called before initialization completes: the error
    /// is reported to the console and returned, instead of faulting on an
    /// unset handle.
    pub fn play(&self) -> std::result::Result<(), JsValue> {
        let inner = self.inner.borrow();
        match (&inner.widget, inner.state) {
            (Some(widget), ControllerState::Ready) => {
                widget.play();
                Ok(())
            }
            _ => {
                let err = Error::NotReady { state: inner.state };
                log::report(&err);
                Err(JsValue::from_str(&err.to_string()))
            }
        }
    }

    /// Current lifecycle state name
    pub fn state(&self) -> String {
        self.inner.borrow().state.to_string()
    }

    /// True once initialization has fully completed
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().state.is_ready()
    }

    /// The attached media source URL, if any
    pub fn source_url(&self) -> Option<String> {
        self.inner.borrow().source_url.clone()
    }

    /// The video element this controller is mounted on, if any
    pub fn media_element(&self) -> Option<HtmlVideoElement> {
        self.inner.borrow().media_element.clone()
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the loosely-typed JS-side arguments into typed options
///
/// Malformed values degrade to the defaults with a console warning; a bad
/// option object never aborts the mount.
fn parse_options(controls: JsValue, speed: JsValue, interactive: Option<bool>) -> PlayerOptions {
    let controls = if controls.is_undefined() || controls.is_null() {
        None
    } else {
        match serde_wasm_bindgen::from_value(controls) {
            Ok(tokens) => Some(tokens),
            Err(err) => {
                log::warn(&format!("ignoring malformed controls: {err}"));
                None
            }
        }
    };

    let speed = if speed.is_undefined() || speed.is_null() {
        SpeedConfig::default()
    } else {
        match serde_wasm_bindgen::from_value(speed) {
            Ok(speed) => speed,
            Err(err) => {
                log::warn(&format!("ignoring malformed speed config: {err}"));
                SpeedConfig::default()
            }
        }
    };

    PlayerOptions {
        controls,
        speed,
        interactive: interactive.unwrap_or(true),
    }
}

async fn run_initialize(
    inner: &Rc<RefCell<ControllerInner>>,
    loader: Option<&Function>,
    module_path: &str,
    element_id: &str,
    source_url: String,
    on_ended: Option<Function>,
    options: PlayerOptions,
) -> Result<()> {
    // the element must resolve before any state is touched
    let element = lookup_video_element(element_id)?;

    {
        let mut guard = inner.borrow_mut();
        // a load already in flight must not be raced by a second one;
        // Ready/Failed controllers go back through Loading on re-init
        guard.state = guard.state.begin_loading()?;

        // re-initialization replaces the previous mount entirely
        teardown_previous(&mut guard);

        // the widget renders its own control bar
        element.set_controls(false);
        if let Err(err) = attach_media_source(&element, &source_url) {
            guard.state = ControllerState::Failed;
            return Err(err);
        }

        guard.media_element = Some(element.clone());
        guard.source_url = Some(source_url);
    }

    // single suspension point: the widget library resolves here
    let configured = match widget::resolve_constructor(loader, module_path).await {
        Ok(constructor) => configure_player(inner, &element, &constructor, &options, on_ended),
        Err(err) => Err(err),
    };

    if configured.is_err() {
        inner.borrow_mut().state = ControllerState::Failed;
    }
    configured
}

/// Build the widget instance and apply the requested configuration
fn configure_player(
    inner: &Rc<RefCell<ControllerInner>>,
    element: &HtmlVideoElement,
    constructor: &Function,
    options: &PlayerOptions,
    on_ended: Option<Function>,
) -> Result<()> {
    let handle = widget::construct(constructor, element, &options.widget_options())?;

    // the selected rate takes effect only once the widget reports readiness
    let rate = options.speed.selected;
    let widget_js = AsRef::<JsValue>::as_ref(&handle).clone();
    let apply_speed = Closure::<dyn FnMut()>::new(move || {
        let ready_handle: &PlyrHandle = widget_js.unchecked_ref();
        ready_handle.set_speed(rate);
    });
    handle.once("ready", apply_speed.as_ref().unchecked_ref());

    let guards = if options.interactive {
        Vec::new()
    } else {
        match lockout::apply(element, &handle) {
            Ok(guards) => guards,
            Err(err) => {
                // don't leave a half-configured instance wrapping the element
                handle.destroy();
                return Err(err);
            }
        }
    };

    if let Some(on_ended) = &on_ended {
        // never removed during the mount's lifetime: re-fires on every
        // playback end; only a re-initialization detaches it
        if let Err(e) = element.add_event_listener_with_callback("ended", on_ended) {
            for guard in &guards {
                guard.unregister();
            }
            handle.destroy();
            return Err(Error::Dom(log::describe(&e)));
        }
    }

    let mut inner = inner.borrow_mut();
    inner.lockout_guards = guards;
    inner.ready_hook = Some(apply_speed);
    inner.ended_callback = on_ended;
    inner.widget = Some(handle);
    inner.state = inner.state.transition_to(ControllerState::Ready)?;
    Ok(())
}

/// Destroy a previously mounted widget and detach everything it registered
///
/// Runs when a controller re-enters `Loading`, so a second `initialize`
/// replaces the first mount instead of stacking widget instances, lockout
/// listeners, and ended callbacks on the same element.
fn teardown_previous(inner: &mut ControllerInner) {
    if let Some(widget) = inner.widget.take() {
        widget.destroy();
    }

    if let (Some(element), Some(callback)) = (inner.media_element.as_ref(), inner.ended_callback.take())
    {
        let _ = element.remove_event_listener_with_callback("ended", &callback);
    }

    for guard in inner.lockout_guards.drain(..) {
        guard.unregister();
    }

    // a destroyed widget can no longer fire its ready event
    let _ = inner.ready_hook.take();
}

/// Find the target video element in the live page document
fn lookup_video_element(id: &str) -> Result<HtmlVideoElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Dom("no document in this context".to_string()))?;

    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok())
        .ok_or_else(|| Error::ElementNotFound { id: id.to_string() })
}

/// Attach the source URL as the element's single `<source>` child
///
/// Re-initialization reuses an existing child instead of appending a
/// duplicate. The `type` attribute stays unset: the browser sniffs the
/// container format for the supported mp4/webm/ogg/wmv/avi sources.
fn attach_media_source(element: &HtmlVideoElement, url: &str) -> Result<()> {
    let existing = element
        .query_selector("source")
        .map_err(|e| Error::Dom(log::describe(&e)))?;

    if let Some(source) = existing.and_then(|el| el.dyn_into::<HtmlSourceElement>().ok()) {
        source.set_src(url);
        return Ok(());
    }

    let document = element
        .owner_document()
        .ok_or_else(|| Error::Dom("element is not attached to a document".to_string()))?;
    let source: HtmlSourceElement = document
        .create_element("source")
        .map_err(|e| Error::Dom(log::describe(&e)))?
        .unchecked_into();
    source.set_src(url);
    element
        .append_child(&source)
        .map_err(|e| Error::Dom(log::describe(&e)))?;
    Ok(())
}
