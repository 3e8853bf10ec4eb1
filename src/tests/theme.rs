use crate::controller::{ Control, EventOutcome, PageEvent, SiteController };
use crate::configs::SiteConfig;
use crate::utils::{ MemoryStore, Theme };
use super::common::{ landing_page, setup, started };
use super::common::mocks::{ FailingStore, FakePage };

#[test]
fn test_startup_applies_default_light_without_persisting() {
    let controller = started(MemoryStore::new(), landing_page());
    assert_eq!(controller.page().body_class, "light");
    assert_eq!(controller.store().value("theme"), None);
}

#[test]
fn test_startup_restores_stored_dark() {
    let controller = started(MemoryStore::with_value("theme", "dark"), landing_page());
    assert_eq!(controller.page().body_class, "dark");
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn test_toggle_parity() {
    for toggles in 0..7 {
        let mut controller = started(MemoryStore::new(), landing_page());
        for _ in 0..toggles {
            controller.handle(PageEvent::Click(Control::ThemeToggle));
        }
        let expected = if toggles % 2 == 0 { "light" } else { "dark" };
        assert_eq!(controller.page().body_class, expected);
        if toggles > 0 {
            assert_eq!(controller.store().value("theme"), Some(expected));
        }
    }
}

#[test]
fn test_toggle_click_stops_propagation() {
    let mut controller = started(MemoryStore::new(), landing_page());
    let outcome = controller.handle(PageEvent::Click(Control::ThemeToggle));
    assert!(outcome.propagation_stopped);
    assert!(!outcome.default_prevented);
}

#[test]
fn test_toggle_without_control_is_inert() {
    let mut controller = started(MemoryStore::new(), FakePage::new());
    let outcome = controller.handle(PageEvent::Click(Control::ThemeToggle));
    assert_eq!(outcome, EventOutcome::default());
    assert_eq!(controller.page().body_class, "light");
    assert_eq!(controller.store().value("theme"), None);
}

#[test]
fn test_custom_storage_key() {
    let config = SiteConfig::from_json(r#"{ "storage_key": "rfid-theme" }"#).unwrap();
    let mut controller = SiteController::new(config, MemoryStore::new(), landing_page());
    controller.handle(PageEvent::Ready);
    controller.handle(PageEvent::Click(Control::ThemeToggle));
    assert_eq!(controller.store().value("rfid-theme"), Some("dark"));
    assert_eq!(controller.store().value("theme"), None);
}

#[test]
fn test_unavailable_storage_still_toggles_page() {
    setup();
    let mut controller = SiteController::new(SiteConfig::default(), FailingStore, landing_page());
    controller.handle(PageEvent::Ready);
    assert_eq!(controller.page().body_class, "light");
    assert_eq!(controller.theme(), Theme::Light);

    let outcome = controller.handle(PageEvent::Click(Control::ThemeToggle));
    assert!(outcome.propagation_stopped);
    assert_eq!(controller.page().body_class, "dark");

    controller.handle(PageEvent::Click(Control::ThemeToggle));
    assert_eq!(controller.page().body_class, "light");
}
