use serde::{ Deserialize, Serialize };
use super::page::{ Page, SectionOffset };

pub const HIGHLIGHT_BACKGROUND: &str = "var(--secondary)";
pub const CLEAR_BACKGROUND: &str = "transparent";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub button: String,
    #[serde(default)]
    pub section: Option<String>,
    pub label: String,
}

impl NavLink {
    pub fn new(button: &str, section: Option<&str>, label: &str) -> Self {
        Self {
            button: button.to_string(),
            section: section.map(str::to_string),
            label: label.to_string(),
        }
    }
}

pub fn scroll_to_section<P: Page>(page: &mut P, section_id: &str) -> bool {
    if !page.has_element(section_id) {
        log::debug!("No section {:?} to scroll to", section_id);
        return false;
    }
    page.scroll_into_view(section_id)
}

/// Last section, in document order, whose top is at most `margin` below `scroll_y`.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64, margin: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - margin)
        .last()
        .map(|section| section.id.as_str())
}

#[derive(Debug, Clone)]
pub struct NavIndicator {
    links: Vec<NavLink>,
    margin: f64,
}

impl NavIndicator {
    pub fn new(links: Vec<NavLink>, margin: f64) -> Self {
        Self { links, margin }
    }

    /// Re-highlights the button of the current section; returns that section.
    pub fn on_scroll<P: Page>(&self, scroll_y: f64, page: &mut P) -> Option<String> {
        let sections = page.section_offsets();
        let current = current_section(&sections, scroll_y, self.margin).map(str::to_string);

        for link in &self.links {
            page.set_style(&link.button, "background", CLEAR_BACKGROUND);
            let Some(target) = link.section.as_deref() else {
                continue;
            };
            if current.as_deref() == Some(target) {
                page.set_style(&link.button, "background", HIGHLIGHT_BACKGROUND);
            }
        }
        current
    }
}
