use dioxus::prelude::*;
use crate::controller::{ Control, EventOutcome, KeyPress, PageEvent, SiteHandle };

/// The running controller, absent off the web target.
pub fn use_site() -> Option<SiteHandle> {
    try_use_context::<Option<SiteHandle>>().flatten()
}

fn apply_outcome<T: ?Sized>(event: &Event<T>, outcome: EventOutcome) {
    if outcome.default_prevented {
        event.prevent_default();
    }
    if outcome.propagation_stopped {
        event.stop_propagation();
    }
}

/// Button routed through the controller; Enter and Space activate it like a click.
#[component]
pub fn ControlButton(
    control: Control,
    id: String,
    #[props(default)] class: String,
    #[props(default)] label: String,
    onactivate: Option<EventHandler<()>>,
    children: Element
) -> Element {
    let site = use_site();
    let click_site = site.clone();
    let click_control = control.clone();
    let aria_label = (!label.is_empty()).then(|| label.clone());

    rsx! {
        button {
            id: "{id}",
            class: "{class}",
            r#type: "button",
            aria_label,
            onclick: move |evt: MouseEvent| {
                let Some(site) = &click_site else {
                    return;
                };
                let outcome = site.dispatch(PageEvent::Click(click_control.clone()));
                apply_outcome(&evt, outcome);
                if let Some(handler) = onactivate {
                    handler.call(());
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                let Some(site) = &site else {
                    return;
                };
                let key = KeyPress::from_key_name(&evt.key().to_string());
                let outcome = site.dispatch(PageEvent::Key { target: Some(control.clone()), key });
                apply_outcome(&evt, outcome);
                if key.activates() {
                    if let Some(handler) = onactivate {
                        handler.call(());
                    }
                }
            },
            {children}
        }
    }
}
