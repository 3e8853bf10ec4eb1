use std::collections::HashSet;
use super::events::{ ElementId, IntersectionEntry, ObserverKind };
use super::observer::ObserverOptions;
use super::page::{ Page, Scheduler };

/// What a results figure turns into, judged from its literal text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterFormat {
    Animated {
        end: f64,
        duration_ms: f64,
        suffix: &'static str,
    },
    Literal(&'static str),
}

impl CounterFormat {
    pub fn classify(text: &str) -> Option<Self> {
        if text.contains('%') {
            Some(CounterFormat::Animated { end: 100.0, duration_ms: 2000.0, suffix: "%" })
        } else if text.contains('s') {
            Some(CounterFormat::Animated { end: 2.0, duration_ms: 1500.0, suffix: "s" })
        } else if text.contains("24") {
            Some(CounterFormat::Literal("24/7"))
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    pub element: ElementId,
    start: f64,
    end: f64,
    duration_ms: f64,
    suffix: &'static str,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(element: ElementId, start: f64, end: f64, duration_ms: f64, suffix: &'static str) -> Self {
        Self { element, start, end, duration_ms, suffix, started_at: None }
    }

    /// Displayed value at `timestamp`; the first call pins the start time.
    pub fn value_at(&mut self, timestamp: f64) -> (i64, bool) {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };
        let value = (progress * (self.end - self.start) + self.start).floor() as i64;
        (value, progress >= 1.0)
    }

    pub fn render(&self, value: i64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

/// Counts up the results figures once, when their container becomes half visible.
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    container_class: String,
    value_class: String,
    options: ObserverOptions,
    animated: HashSet<ElementId>,
    running: Vec<CounterAnimation>,
    frame_pending: bool,
}

impl CounterAnimator {
    pub fn new(container_class: String, value_class: String, options: ObserverOptions) -> Self {
        Self {
            container_class,
            value_class,
            options,
            animated: HashSet::new(),
            running: Vec::new(),
            frame_pending: false,
        }
    }

    pub fn start<P: Page>(&mut self, page: &mut P) {
        let Some(container) = page.elements_with_class(&self.container_class).into_iter().next() else {
            log::debug!("No .{} container, counters disabled", self.container_class);
            return;
        };
        if let Err(e) = page.observe(ObserverKind::Counter, &self.options, &container) {
            log::debug!("Could not observe {}: {}", container, e);
        }
    }

    pub fn on_entries<P: Page + Scheduler>(&mut self, entries: &[IntersectionEntry], page: &mut P) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            if !self.animated.insert(entry.target.clone()) {
                continue;
            }
            page.unobserve(ObserverKind::Counter, &entry.target);

            for stat in page.descendants_with_class(&entry.target, &self.value_class) {
                let text = page.text_content(&stat).unwrap_or_default();
                match CounterFormat::classify(&text) {
                    Some(CounterFormat::Animated { end, duration_ms, suffix }) => {
                        self.running.push(CounterAnimation::new(stat, 0.0, end, duration_ms, suffix));
                    }
                    Some(CounterFormat::Literal(literal)) => page.set_text_content(&stat, literal),
                    None => {}
                }
            }
            log::debug!("Animating counters in {}", entry.target);
        }
        self.request_frame(page);
    }

    pub fn on_frame<P: Page + Scheduler>(&mut self, timestamp: f64, page: &mut P) {
        self.frame_pending = false;
        self.running.retain_mut(|animation| {
            let (value, finished) = animation.value_at(timestamp);
            page.set_text_content(&animation.element, &animation.render(value));
            !finished
        });
        self.request_frame(page);
    }

    fn request_frame<S: Scheduler>(&mut self, scheduler: &mut S) {
        if self.running.is_empty() || self.frame_pending {
            return;
        }
        match scheduler.request_animation_frame() {
            Ok(()) => {
                self.frame_pending = true;
            }
            Err(e) => log::debug!("Animation frame unavailable: {}", e),
        }
    }

    pub fn is_animated(&self, container: &str) -> bool {
        self.animated.contains(container)
    }

    pub fn is_running(&self) -> bool {
        !self.running.is_empty()
    }
}
