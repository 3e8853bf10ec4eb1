//! Browser bindings: `web-sys` implementations of the page surface and the
//! preference store, plus the window/document listeners feeding the controller.

#[cfg(target_arch = "wasm32")]
mod browser_page;
#[cfg(target_arch = "wasm32")]
mod browser_storage;

#[cfg(target_arch = "wasm32")]
pub use browser_page::BrowserPage;
#[cfg(target_arch = "wasm32")]
pub use browser_storage::BrowserStorage;

use crate::configs::SiteConfig;
use crate::controller::SiteHandle;

/// Builds the controller against the live document. `None` off the web target
/// or without a window, in which case every control stays inert.
#[cfg(target_arch = "wasm32")]
pub fn connect(config: SiteConfig) -> Option<SiteHandle> {
    use std::cell::RefCell;
    use std::rc::{ Rc, Weak };
    use crate::controller::{ EventSink, SiteController, WeakSiteHandle };

    let window = web_sys::window()?;
    let document = window.document()?;
    let store = BrowserStorage::open(&window);

    let controller = Rc::new_cyclic(|weak: &Weak<RefCell<SiteController<BrowserStorage, BrowserPage>>>| {
        let sink: Weak<RefCell<dyn EventSink>> = weak.clone();
        let page = BrowserPage::new(window, document, WeakSiteHandle::new(sink));
        RefCell::new(SiteController::new(config, store, page))
    });
    let inner: Rc<RefCell<dyn EventSink>> = controller;
    Some(SiteHandle::new(inner))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn connect(config: SiteConfig) -> Option<SiteHandle> {
    log::debug!("No browser document for {:?}, page behaviours disabled", config.title);
    None
}

/// Attaches the window `scroll` and document `keydown` listeners, then signals readiness.
#[cfg(target_arch = "wasm32")]
pub fn install(handle: &SiteHandle) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use crate::controller::{ KeyPress, PageEvent };

    let Some(window) = web_sys::window() else {
        return;
    };

    let scroll_handle = handle.downgrade();
    let scroll_window = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        scroll_handle.dispatch(PageEvent::Scroll { scroll_y });
    });
    if let Err(e) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
        log::debug!("Could not listen for scroll: {:?}", e);
    }
    on_scroll.forget();

    if let Some(document) = window.document() {
        let key_handle = handle.downgrade();
        let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
            let key = KeyPress::from_key_name(&event.key());
            let outcome = key_handle.dispatch(PageEvent::Key { target: None, key });
            if outcome.default_prevented {
                event.prevent_default();
            }
        });
        if let Err(e) = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref()) {
            log::debug!("Could not listen for keydown: {:?}", e);
        }
        on_keydown.forget();
    }

    handle.dispatch(PageEvent::Ready);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install(handle: &SiteHandle) {
    handle.dispatch(crate::controller::PageEvent::Ready);
}
