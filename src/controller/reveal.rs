use std::collections::HashSet;
use super::events::{ ElementId, IntersectionEntry, ObserverKind };
use super::observer::ObserverOptions;
use super::page::Page;

const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const REVEALED_STYLE: [(&str, &str); 2] = [
    ("opacity", "1"),
    ("transform", "translateY(0)"),
];

/// Fades elements in the first time they scroll into view.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    classes: Vec<String>,
    options: ObserverOptions,
    watched: Vec<ElementId>,
    revealed: HashSet<ElementId>,
}

impl RevealAnimator {
    pub fn new(classes: Vec<String>, options: ObserverOptions) -> Self {
        Self { classes, options, watched: Vec::new(), revealed: HashSet::new() }
    }

    pub fn start<P: Page>(&mut self, page: &mut P) {
        for class in &self.classes {
            for id in page.elements_with_class(class) {
                if self.watched.contains(&id) {
                    continue;
                }
                for (property, value) in HIDDEN_STYLE {
                    page.set_style(&id, property, value);
                }
                if let Err(e) = page.observe(ObserverKind::Reveal, &self.options, &id) {
                    log::debug!("Could not observe {}: {}", id, e);
                }
                self.watched.push(id);
            }
        }
        log::debug!("Watching {} elements for reveal", self.watched.len());
    }

    pub fn on_entries<P: Page>(&mut self, entries: &[IntersectionEntry], page: &mut P) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if !self.revealed.insert(entry.target.clone()) {
                continue;
            }
            for (property, value) in REVEALED_STYLE {
                page.set_style(&entry.target, property, value);
            }
            page.unobserve(ObserverKind::Reveal, &entry.target);
        }
    }

    pub fn watched(&self) -> &[ElementId] {
        &self.watched
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
