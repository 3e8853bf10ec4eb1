use std::collections::{ BTreeMap, HashMap, HashSet };
use crate::controller::{ ElementId, IntersectionEntry, ObserverKind, ObserverOptions, Page, Scheduler, SectionOffset, TimerId };
use crate::error::SiteError;
use crate::utils::{ PreferenceStore, Theme };

/// Visible fraction of an element spanning `top..top + height` (viewport
/// coordinates) inside the margin-adjusted viewport.
pub fn intersection_ratio(options: &ObserverOptions, top: f64, height: f64, viewport_height: f64) -> f64 {
    let root_bottom = viewport_height + options.root_margin_bottom;
    let bottom = top + height;
    if height <= 0.0 {
        return if top >= 0.0 && top <= root_bottom { 1.0 } else { 0.0 };
    }
    let visible = (bottom.min(root_bottom) - top.max(0.0)).max(0.0);
    (visible / height).min(1.0)
}

pub fn is_visible(options: &ObserverOptions, top: f64, height: f64, viewport_height: f64) -> bool {
    let ratio = intersection_ratio(options, top, height, viewport_height);
    ratio > 0.0 && ratio >= options.threshold
}

/// Store whose reads and writes always fail, like a blocked `localStorage`.
#[derive(Debug, Default)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SiteError> {
        Err(SiteError::Storage("storage unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::Storage("storage unavailable".to_string()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    pub classes: Vec<String>,
    pub parent: Option<String>,
    pub section_top: Option<f64>,
    pub rect: Option<(f64, f64)>,
    pub text: String,
    pub styles: HashMap<String, String>,
    pub attributes: HashMap<String, String>,
    pub src: Option<String>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Document top and height, used to simulate intersection.
    pub fn rect(mut self, top: f64, height: f64) -> Self {
        self.rect = Some((top, height));
        self
    }
}

/// In-memory page recording every effect, with a manually advanced clock.
#[derive(Debug, Default)]
pub struct FakePage {
    order: Vec<String>,
    elements: HashMap<String, FakeElement>,
    pub body_class: String,
    pub body_styles: HashMap<String, String>,
    pub scrolled_to: Vec<String>,
    observed: HashMap<ObserverKind, HashSet<String>>,
    observer_options: HashMap<ObserverKind, ObserverOptions>,
    pub now: f64,
    next_timer: TimerId,
    timers: BTreeMap<TimerId, f64>,
    pub frame_requested: bool,
    pub frame_requests: usize,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str, element: FakeElement) -> Self {
        self.order.push(id.to_string());
        self.elements.insert(id.to_string(), element);
        self
    }

    pub fn with_section(self, id: &str, top: f64) -> Self {
        let element = FakeElement { section_top: Some(top), ..FakeElement::default() };
        self.with_element(id, element)
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements.get(id)?.styles.get(property).map(String::as_str)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements.get(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|element| element.text.as_str())
    }

    pub fn frame_src(&self, id: &str) -> Option<&str> {
        self.elements.get(id)?.src.as_deref()
    }

    pub fn body_style(&self, property: &str) -> Option<&str> {
        self.body_styles.get(property).map(String::as_str)
    }

    pub fn is_observed(&self, kind: ObserverKind, id: &str) -> bool {
        self.observed.get(&kind).is_some_and(|ids| ids.contains(id))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward and returns the timers that came due, in id order.
    pub fn advance(&mut self, ms: f64) -> Vec<TimerId> {
        self.now += ms;
        let now = self.now;
        let due: Vec<TimerId> = self.timers
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.timers.remove(id);
        }
        due
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Entries an observer of `kind` would report with the viewport scrolled to `scroll_y`.
    pub fn intersections(&self, kind: ObserverKind, scroll_y: f64, viewport_height: f64) -> Vec<IntersectionEntry> {
        let (Some(ids), Some(options)) = (self.observed.get(&kind), self.observer_options.get(&kind)) else {
            return Vec::new();
        };
        self.order
            .iter()
            .filter(|id| ids.contains(*id))
            .filter_map(|id| {
                let (top, height) = self.elements.get(id)?.rect?;
                let visible = is_visible(options, top - scroll_y, height, viewport_height);
                Some(IntersectionEntry::new(id.clone(), visible))
            })
            .collect()
    }
}

impl Page for FakePage {
    fn set_theme_marker(&mut self, theme: Theme) {
        self.body_class = theme.as_str().to_string();
    }

    fn applied_theme(&self) -> Theme {
        if self.body_class.split_whitespace().any(|class| class == "dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.order
            .iter()
            .filter(|id| self.elements[*id].classes.iter().any(|c| c == class))
            .cloned()
            .collect()
    }

    fn descendants_with_class(&self, container: &str, class: &str) -> Vec<ElementId> {
        self.elements_with_class(class)
            .into_iter()
            .filter(|id| self.elements[id].parent.as_deref() == Some(container))
            .collect()
    }

    fn section_offsets(&self) -> Vec<SectionOffset> {
        self.order
            .iter()
            .filter_map(|id| Some(SectionOffset::new(id.clone(), self.elements[id].section_top?)))
            .collect()
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        self.scrolled_to.push(id.to_string());
        true
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        self.body_styles.insert(property.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.text.clone())
    }

    fn set_text_content(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn set_frame_source(&mut self, id: &str, src: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.src = Some(src.to_string());
        }
    }

    fn observe(&mut self, kind: ObserverKind, options: &ObserverOptions, id: &str) -> Result<(), SiteError> {
        if !self.elements.contains_key(id) {
            return Err(SiteError::Dom(format!("no element {}", id)));
        }
        self.observer_options.insert(kind, *options);
        self.observed.entry(kind).or_default().insert(id.to_string());
        Ok(())
    }

    fn unobserve(&mut self, kind: ObserverKind, id: &str) {
        if let Some(ids) = self.observed.get_mut(&kind) {
            ids.remove(id);
        }
    }
}

impl Scheduler for FakePage {
    fn set_timeout(&mut self, delay_ms: u32) -> Result<TimerId, SiteError> {
        self.next_timer += 1;
        self.timers.insert(self.next_timer, self.now + f64::from(delay_ms));
        Ok(self.next_timer)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }

    fn request_animation_frame(&mut self) -> Result<(), SiteError> {
        self.frame_requested = true;
        self.frame_requests += 1;
        Ok(())
    }
}
