//! Interaction lockout
//!
//! Suppresses user-initiated seeking, right-click, and keyboard shortcuts
//! on a mounted player. Each suppression is backed by a live event listener
//! whose closure must stay alive until the lockout is torn down.

use plyrkit_core::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, HtmlVideoElement};

use crate::log;
use crate::widget::{self, PlyrHandle};

/// Selector for the widget's chrome container around the element
const CHROME_SELECTOR: &str = ".plyr";
/// Selector for the seek bar inside the chrome container
const SEEK_BAR_SELECTOR: &str = ".plyr__progress__container";

/// A registered lockout listener, removable for teardown
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    fn register(
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| Error::Dom(log::describe(&e)))?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    /// Detach the listener so the backing closure can be dropped safely
    pub fn unregister(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Apply the full lockout: context menu, seek bar, keyboard
///
/// The seek-bar step silently no-ops when the chrome container is absent,
/// for example before the widget has wrapped the element.
pub fn apply(element: &HtmlVideoElement, handle: &PlyrHandle) -> Result<Vec<ListenerGuard>> {
    let mut guards = Vec::new();

    // right-click menu
    let block_menu = Closure::<dyn FnMut(Event)>::new(|event: Event| {
        event.prevent_default();
    });
    guards.push(ListenerGuard::register(
        element.clone().into(),
        "contextmenu",
        block_menu,
    )?);

    // seek bar: pointer-events suppression plus click interception
    if let Some(seek_bar) = find_seek_bar(element)? {
        if let Some(styled) = seek_bar.dyn_ref::<HtmlElement>() {
            styled
                .style()
                .set_property("pointer-events", "none")
                .map_err(|e| Error::Dom(log::describe(&e)))?;
        }

        let block_click = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            event.stop_propagation();
            event.prevent_default();
        });
        guards.push(ListenerGuard::register(seek_bar.into(), "click", block_click)?);
    }

    // keyboard shortcuts, both focus-scoped and global
    widget::disable_keyboard(handle)?;

    Ok(guards)
}

/// Locate the seek bar inside the nearest enclosing chrome container
fn find_seek_bar(element: &HtmlVideoElement) -> Result<Option<web_sys::Element>> {
    let chrome = element
        .closest(CHROME_SELECTOR)
        .map_err(|e| Error::Dom(log::describe(&e)))?;

    match chrome {
        Some(chrome) => chrome
            .query_selector(SEEK_BAR_SELECTOR)
            .map_err(|e| Error::Dom(log::describe(&e))),
        None => Ok(None),
    }
}
