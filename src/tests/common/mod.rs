pub mod mocks;

use crate::configs::SiteConfig;
use crate::controller::{ PageEvent, SiteController };
use crate::utils::MemoryStore;
use mocks::{ FakeElement, FakePage };

pub type TestController = SiteController<MemoryStore, FakePage>;

pub const VIEWPORT_HEIGHT: f64 = 800.0;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// The landing page laid out the way the views render it.
pub fn landing_page() -> FakePage {
    FakePage::new()
        .with_element("theme-toggle", FakeElement::new())
        .with_element("nav-inicio", FakeElement::new().class("nav-button"))
        .with_element("nav-problema", FakeElement::new().class("nav-button"))
        .with_element("nav-solucion", FakeElement::new().class("nav-button"))
        .with_element("nav-proceso", FakeElement::new().class("nav-button"))
        .with_element("nav-resultados", FakeElement::new().class("nav-button"))
        .with_element("nav-contacto", FakeElement::new().class("nav-button"))
        .with_section("inicio", 0.0)
        .with_section("problema", 500.0)
        .with_element("problema-header", FakeElement::new().class("section-header").rect(520.0, 80.0))
        .with_element("card-tiempo", FakeElement::new().class("card").rect(1000.0, 240.0))
        .with_element("card-control", FakeElement::new().class("card").rect(1000.0, 240.0))
        .with_section("solucion", 1200.0)
        .with_element("card-lector", FakeElement::new().class("card").rect(1300.0, 240.0))
        .with_section("proceso", 1800.0)
        .with_element("step-1", FakeElement::new().class("process-item").rect(1900.0, 120.0))
        .with_element("step-2", FakeElement::new().class("process-item").rect(2040.0, 120.0))
        .with_section("resultados", 2400.0)
        .with_element("results", FakeElement::new().class("results-stats").rect(2500.0, 300.0))
        .with_element("stat-asistencia", FakeElement::new().class("stat-big-value").parent("results").text("100%"))
        .with_element("stat-registro", FakeElement::new().class("stat-big-value").parent("results").text("2s"))
        .with_element("stat-monitoreo", FakeElement::new().class("stat-big-value").parent("results").text("24"))
        .with_section("contacto", 3000.0)
        .with_element("preview-onedrive", FakeElement::new())
        .with_element("onedrive-modal", FakeElement::new())
        .with_element("onedrive-modal-backdrop", FakeElement::new())
        .with_element("onedrive-modal-close", FakeElement::new())
        .with_element("onedrive-iframe", FakeElement::new())
}

pub fn started(store: MemoryStore, page: FakePage) -> TestController {
    setup();
    let mut controller = SiteController::new(SiteConfig::default(), store, page);
    controller.handle(PageEvent::Ready);
    controller
}

/// Scrolls to `scroll_y` and delivers what both observers would report.
pub fn scroll_to(controller: &mut TestController, scroll_y: f64) {
    use crate::controller::ObserverKind;

    controller.handle(PageEvent::Scroll { scroll_y });
    for observer in [ObserverKind::Reveal, ObserverKind::Counter] {
        let entries = controller.page().intersections(observer, scroll_y, VIEWPORT_HEIGHT);
        if !entries.is_empty() {
            controller.handle(PageEvent::Intersection { observer, entries });
        }
    }
}

/// Delivers every due timer after moving the clock forward.
pub fn advance(controller: &mut TestController, ms: f64) {
    for timer in controller.page_mut().advance(ms) {
        controller.handle(PageEvent::Timer(timer));
    }
}

/// Runs requested animation frames every `step_ms` until none is pending; returns the frame count.
pub fn run_frames(controller: &mut TestController, step_ms: f64) -> usize {
    let mut frames = 0;
    while controller.page_mut().take_frame() {
        let timestamp = controller.page().now;
        controller.handle(PageEvent::AnimationFrame { timestamp });
        controller.page_mut().now += step_ms;
        frames += 1;
    }
    frames
}
