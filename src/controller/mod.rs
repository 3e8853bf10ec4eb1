//! Page behaviour controller.
//!
//! [`SiteController`] owns the theme preference store and the page surface and
//! reacts to [`PageEvent`]s delivered by the host. Each behaviour lives in its
//! own module and never talks to the others.

pub mod counter;
pub mod events;
pub mod handle;
pub mod keyboard;
pub mod modal;
pub mod navigation;
pub mod observer;
pub mod page;
pub mod reveal;
pub mod theme;

pub use counter::{ CounterAnimation, CounterAnimator, CounterFormat };
pub use events::{ Control, ElementId, EventOutcome, IntersectionEntry, KeyPress, ObserverKind, PageEvent, TimerId };
pub use handle::{ EventSink, SiteHandle, WeakSiteHandle };
pub use modal::{ ModalConfig, ModalState, PreviewModal };
pub use navigation::{ current_section, scroll_to_section, NavIndicator, NavLink };
pub use observer::ObserverOptions;
pub use page::{ Page, Scheduler, SectionOffset };
pub use reveal::RevealAnimator;
pub use theme::ThemeController;

use crate::configs::SiteConfig;
use crate::utils::{ PreferenceStore, Theme };

pub struct SiteController<S, P> {
    config: SiteConfig,
    store: S,
    page: P,
    theme: ThemeController,
    theme_toggle_present: bool,
    nav: NavIndicator,
    reveal: RevealAnimator,
    counters: CounterAnimator,
    modal: PreviewModal,
    started: bool,
}

impl<S: PreferenceStore, P: Page + Scheduler> SiteController<S, P> {
    pub fn new(config: SiteConfig, store: S, page: P) -> Self {
        let theme = ThemeController::load(&config.storage_key, &store);
        let nav = NavIndicator::new(config.nav_links.clone(), config.nav_margin);
        let reveal = RevealAnimator::new(config.reveal_classes.clone(), config.reveal_observer);
        let counters = CounterAnimator::new(
            config.stats_container_class.clone(),
            config.stat_value_class.clone(),
            config.counter_observer
        );
        let modal = PreviewModal::new(config.modal.clone());

        Self {
            config,
            store,
            page,
            theme,
            theme_toggle_present: false,
            nav,
            reveal,
            counters,
            modal,
            started: false,
        }
    }

    pub fn handle(&mut self, event: PageEvent) -> EventOutcome {
        log::trace!("Page event: {:?}", event);
        match event {
            PageEvent::Ready => {
                self.start();
                EventOutcome::default()
            }
            PageEvent::Click(control) => self.click(control),
            PageEvent::Key { target, key } => self.key(target, key),
            PageEvent::Scroll { scroll_y } => {
                self.nav.on_scroll(scroll_y, &mut self.page);
                EventOutcome::default()
            }
            PageEvent::Intersection { observer: ObserverKind::Reveal, entries } => {
                self.reveal.on_entries(&entries, &mut self.page);
                EventOutcome::default()
            }
            PageEvent::Intersection { observer: ObserverKind::Counter, entries } => {
                self.counters.on_entries(&entries, &mut self.page);
                EventOutcome::default()
            }
            PageEvent::Timer(timer) => {
                if !self.modal.on_timer(timer, &mut self.page) {
                    log::trace!("Timer {} no longer pending", timer);
                }
                EventOutcome::default()
            }
            PageEvent::AnimationFrame { timestamp } => {
                self.counters.on_frame(timestamp, &mut self.page);
                EventOutcome::default()
            }
            PageEvent::FrameLoaded => {
                self.modal.on_frame_loaded();
                EventOutcome::default()
            }
        }
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.theme.restore(&mut self.page);
        self.theme_toggle_present = self.page.has_element(&self.config.theme_toggle_id);
        self.reveal.start(&mut self.page);
        self.counters.start(&mut self.page);
        self.modal.start(&self.page);

        for message in &self.config.startup_messages {
            log::info!("{}", message);
        }
    }

    fn click(&mut self, control: Control) -> EventOutcome {
        match control {
            Control::ThemeToggle if self.theme_toggle_present => {
                self.theme.toggle(&mut self.store, &mut self.page);
                EventOutcome::stop_propagation()
            }
            Control::NavButton(section) => {
                scroll_to_section(&mut self.page, &section);
                EventOutcome::default()
            }
            Control::PreviewDocument if self.modal.is_enabled() => {
                self.modal.open(&mut self.page);
                EventOutcome::prevent_default()
            }
            Control::ModalClose | Control::ModalBackdrop => {
                self.modal.close(&mut self.page);
                EventOutcome::default()
            }
            _ => EventOutcome::default(),
        }
    }

    fn key(&mut self, target: Option<Control>, key: KeyPress) -> EventOutcome {
        if let Some(control) = keyboard::activated_control(target.as_ref(), key) {
            self.click(control);
            return EventOutcome::prevent_default();
        }
        if keyboard::dismisses_modal(target.as_ref(), key) && self.modal.is_open() {
            self.modal.close(&mut self.page);
        }
        EventOutcome::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn modal(&self) -> &PreviewModal {
        &self.modal
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }

    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}

impl<S, P> EventSink for SiteController<S, P>
    where S: PreferenceStore + 'static, P: Page + Scheduler + 'static
{
    fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        self.handle(event)
    }

    fn current_theme(&self) -> Theme {
        self.theme()
    }
}
