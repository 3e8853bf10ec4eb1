use dioxus::prelude::*;
use rfid_site::dom;
use rfid_site::utils::ThemeState;
use rfid_site::{ Route, SiteConfig };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(SiteConfig::load);
    let site = use_hook({
        let config = config.clone();
        move || dom::connect(config)
    });
    let theme = use_signal({
        let site = site.clone();
        move || site.map(|site| ThemeState::from(site.current_theme())).unwrap_or_default()
    });
    use_context_provider(|| theme);
    use_context_provider(|| config.clone());
    use_context_provider(|| site.clone());

    let ready = site.clone();
    use_effect(move || {
        if let Some(site) = &ready {
            dom::install(site);
        }
    });

    rsx! {
        document::Title { "{config.title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
