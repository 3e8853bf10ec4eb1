use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{
    Document,
    Element,
    HtmlElement,
    HtmlIFrameElement,
    IntersectionObserver,
    IntersectionObserverEntry,
    IntersectionObserverInit,
    NodeList,
    ScrollBehavior,
    ScrollIntoViewOptions,
    ScrollLogicalPosition,
    Window,
};
use crate::controller::{
    ElementId,
    IntersectionEntry,
    ObserverKind,
    ObserverOptions,
    Page,
    PageEvent,
    Scheduler,
    SectionOffset,
    TimerId,
    WeakSiteHandle,
};
use crate::error::SiteError;
use crate::utils::Theme;

const REF_ATTRIBUTE: &str = "data-site-ref";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live document behind the controller.
///
/// Elements found by class are tagged with `data-site-ref` (their `id` when
/// they have one) so later lookups and observer entries map back to the same key.
pub struct BrowserPage {
    window: Window,
    document: Document,
    sink: WeakSiteHandle,
    observers: HashMap<ObserverKind, (IntersectionObserver, ObserverCallback)>,
}

impl BrowserPage {
    pub fn new(window: Window, document: Document, sink: WeakSiteHandle) -> Self {
        Self {
            window,
            document,
            sink,
            observers: HashMap::new(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id).or_else(|| {
            let selector = format!("[{}=\"{}\"]", REF_ATTRIBUTE, id);
            self.document.query_selector(&selector).ok().flatten()
        })
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn observer(&mut self, kind: ObserverKind, options: &ObserverOptions) -> Result<&IntersectionObserver, SiteError> {
        if !self.observers.contains_key(&kind) {
            let sink = self.sink.clone();
            let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        let target = entry.target();
                        let key = target.get_attribute(REF_ATTRIBUTE).unwrap_or_else(|| target.id());
                        IntersectionEntry::new(key, entry.is_intersecting())
                    })
                    .collect();
                sink.dispatch(PageEvent::Intersection { observer: kind, entries });
            });

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin());
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            self.observers.insert(kind, (observer, callback));
        }
        self.observers
            .get(&kind)
            .map(|(observer, _)| observer)
            .ok_or_else(|| SiteError::Dom("observer missing".to_string()))
    }
}

impl Page for BrowserPage {
    fn set_theme_marker(&mut self, theme: Theme) {
        if let Some(body) = self.document.body() {
            body.set_class_name(theme.as_str());
        }
    }

    fn applied_theme(&self) -> Theme {
        let dark = self.document
            .body()
            .is_some_and(|body| body.class_list().contains(Theme::Dark.as_str()));
        if dark { Theme::Dark } else { Theme::Light }
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        match self.document.query_selector_all(&format!(".{}", class)) {
            Ok(list) => keyed(&list, |index| format!("{}-{}", class, index)),
            Err(_) => Vec::new(),
        }
    }

    fn descendants_with_class(&self, container: &str, class: &str) -> Vec<ElementId> {
        let Some(root) = self.element(container) else {
            return Vec::new();
        };
        match root.query_selector_all(&format!(".{}", class)) {
            Ok(list) => keyed(&list, |index| format!("{}/{}-{}", container, class, index)),
            Err(_) => Vec::new(),
        }
    }

    fn section_offsets(&self) -> Vec<SectionOffset> {
        let Ok(list) = self.document.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index)?.dyn_into::<HtmlElement>().ok())
            .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
            .collect()
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(element) = self.html_element(id) {
            let _ = element.style().set_property(property, value);
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property(property, value);
        }
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.element(id) {
            let _ = element.set_attribute(name, value);
        }
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn set_text_content(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_frame_source(&mut self, id: &str, src: &str) {
        if let Some(frame) = self.element(id).and_then(|element| element.dyn_into::<HtmlIFrameElement>().ok()) {
            frame.set_src(src);
        }
    }

    fn observe(&mut self, kind: ObserverKind, options: &ObserverOptions, id: &str) -> Result<(), SiteError> {
        let element = self.element(id).ok_or_else(|| SiteError::Dom(format!("no element {}", id)))?;
        self.observer(kind, options)?.observe(&element);
        Ok(())
    }

    fn unobserve(&mut self, kind: ObserverKind, id: &str) {
        let Some(element) = self.element(id) else {
            return;
        };
        if let Some((observer, _)) = self.observers.get(&kind) {
            observer.unobserve(&element);
        }
    }
}

impl Scheduler for BrowserPage {
    fn set_timeout(&mut self, delay_ms: u32) -> Result<TimerId, SiteError> {
        let sink = self.sink.clone();
        let slot = Rc::new(Cell::new(0));
        let fired = slot.clone();
        let callback = Closure::once_into_js(move || {
            sink.dispatch(PageEvent::Timer(fired.get()));
        });
        let timer = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX)
        )?;
        slot.set(timer);
        Ok(timer)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.window.clear_timeout_with_handle(id);
    }

    fn request_animation_frame(&mut self) -> Result<(), SiteError> {
        let sink = self.sink.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            sink.dispatch(PageEvent::AnimationFrame { timestamp });
        });
        self.window.request_animation_frame(callback.unchecked_ref())?;
        Ok(())
    }
}

/// Keys every element of `list`, tagging untagged ones.
fn keyed(list: &NodeList, fallback: impl Fn(u32) -> String) -> Vec<ElementId> {
    (0..list.length())
        .filter_map(|index| {
            let element = list.item(index)?.dyn_into::<Element>().ok()?;
            if let Some(key) = element.get_attribute(REF_ATTRIBUTE) {
                return Some(key);
            }
            let key = if element.id().is_empty() { fallback(index) } else { element.id() };
            let _ = element.set_attribute(REF_ATTRIBUTE, &key);
            Some(key)
        })
        .collect()
}
