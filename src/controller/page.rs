use crate::error::SiteError;
use crate::utils::Theme;
use super::events::{ ElementId, ObserverKind, TimerId };
use super::observer::ObserverOptions;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The document surface the controller reads and mutates.
///
/// Lookups of absent elements return `None`/empty and mutations of absent
/// elements are ignored, so every behaviour degrades to a no-op.
pub trait Page {
    fn set_theme_marker(&mut self, theme: Theme);
    fn applied_theme(&self) -> Theme;

    fn has_element(&self, id: &str) -> bool;
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;
    fn descendants_with_class(&self, container: &str, class: &str) -> Vec<ElementId>;
    fn section_offsets(&self) -> Vec<SectionOffset>;

    fn scroll_into_view(&mut self, id: &str) -> bool;
    fn set_style(&mut self, id: &str, property: &str, value: &str);
    fn set_body_style(&mut self, property: &str, value: &str);
    fn set_attribute(&mut self, id: &str, name: &str, value: &str);
    fn text_content(&self, id: &str) -> Option<String>;
    fn set_text_content(&mut self, id: &str, text: &str);
    fn set_frame_source(&mut self, id: &str, src: &str);

    fn observe(&mut self, kind: ObserverKind, options: &ObserverOptions, id: &str) -> Result<(), SiteError>;
    fn unobserve(&mut self, kind: ObserverKind, id: &str);
}

/// Timers and frame callbacks; fired back as `PageEvent::Timer` and `PageEvent::AnimationFrame`.
pub trait Scheduler {
    fn set_timeout(&mut self, delay_ms: u32) -> Result<TimerId, SiteError>;
    fn clear_timeout(&mut self, id: TimerId);
    fn request_animation_frame(&mut self) -> Result<(), SiteError>;
}
