use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::controller::{ Control, NavLink };
use crate::routes::Route;
use crate::utils::ThemeState;
use super::controls::{ use_site, ControlButton };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

fn nav_control(link: &NavLink) -> Control {
    match &link.section {
        Some(section) => Control::NavButton(section.clone()),
        None => Control::Button(link.button.clone()),
    }
}

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let mut theme = use_context::<Signal<ThemeState>>();
    let site = use_site();
    let icon = theme.read().toggle_icon();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            class: "navbar",
            div {
                id: "navbar",
                class: "navbar-inner",
                span { class: "brand", "Sistema RFID" }
                div {
                    class: "nav-links",
                    for link in config.nav_links.iter() {
                        ControlButton {
                            key: "{link.button}",
                            control: nav_control(link),
                            id: link.button.clone(),
                            class: "nav-button",
                            "{link.label}"
                        }
                    }
                }
                ControlButton {
                    control: Control::ThemeToggle,
                    id: config.theme_toggle_id.clone(),
                    class: "theme-toggle",
                    label: "Cambiar tema",
                    onactivate: move |_| {
                        if let Some(site) = &site {
                            theme.set(ThemeState::from(site.current_theme()));
                        }
                    },
                    "{icon}"
                }
            }
        }
        Outlet::<Route> {}
    }
}
