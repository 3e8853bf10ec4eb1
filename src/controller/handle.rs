use std::cell::RefCell;
use std::rc::{ Rc, Weak };
use crate::utils::Theme;
use super::events::{ EventOutcome, PageEvent };

/// Receiver of page events, erased over its store and page types.
pub trait EventSink {
    fn dispatch(&mut self, event: PageEvent) -> EventOutcome;
    fn current_theme(&self) -> Theme;
}

#[derive(Clone)]
pub struct SiteHandle {
    inner: Rc<RefCell<dyn EventSink>>,
}

impl SiteHandle {
    pub fn new(inner: Rc<RefCell<dyn EventSink>>) -> Self {
        Self { inner }
    }

    pub fn downgrade(&self) -> WeakSiteHandle {
        WeakSiteHandle { inner: Rc::downgrade(&self.inner) }
    }

    /// Delivers `event`; a re-entrant dispatch is dropped rather than panicking.
    pub fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match self.inner.try_borrow_mut() {
            Ok(mut sink) => sink.dispatch(event),
            Err(_) => {
                log::debug!("Controller busy, dropping {:?}", event);
                EventOutcome::default()
            }
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.inner
            .try_borrow()
            .map(|sink| sink.current_theme())
            .unwrap_or_default()
    }
}

impl PartialEq for SiteHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for SiteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteHandle").finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct WeakSiteHandle {
    inner: Weak<RefCell<dyn EventSink>>,
}

impl WeakSiteHandle {
    pub fn new(inner: Weak<RefCell<dyn EventSink>>) -> Self {
        Self { inner }
    }

    pub fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match self.inner.upgrade() {
            Some(inner) => SiteHandle { inner }.dispatch(event),
            None => EventOutcome::default(),
        }
    }
}
