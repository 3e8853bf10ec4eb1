use serde::{ Deserialize, Serialize };
use crate::controller::{ ModalConfig, NavLink, ObserverOptions };
use crate::error::SiteError;

const EMBEDDED_CONFIG: &str = include_str!("../../assets/site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub storage_key: String,
    pub theme_toggle_id: String,
    pub reveal_classes: Vec<String>,
    pub reveal_observer: ObserverOptions,
    /// How far above a section's top the indicator switches to it.
    pub nav_margin: f64,
    pub nav_links: Vec<NavLink>,
    pub stats_container_class: String,
    pub stat_value_class: String,
    pub counter_observer: ObserverOptions,
    pub modal: ModalConfig,
    pub startup_messages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Sistema RFID - Colegio Divino Salvador".to_string(),
            storage_key: "theme".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            reveal_classes: vec![
                "card".to_string(),
                "section-header".to_string(),
                "process-item".to_string()
            ],
            reveal_observer: ObserverOptions::new(0.1, -50.0),
            nav_margin: 200.0,
            nav_links: vec![
                NavLink::new("nav-inicio", Some("inicio"), "Inicio"),
                NavLink::new("nav-problema", Some("problema"), "Problema"),
                NavLink::new("nav-solucion", Some("solucion"), "Solución"),
                NavLink::new("nav-proceso", Some("proceso"), "Proceso"),
                NavLink::new("nav-resultados", Some("resultados"), "Resultados"),
                NavLink::new("nav-contacto", Some("contacto"), "Contacto")
            ],
            stats_container_class: "results-stats".to_string(),
            stat_value_class: "stat-big-value".to_string(),
            counter_observer: ObserverOptions::new(0.5, 0.0),
            modal: ModalConfig::default(),
            startup_messages: vec![
                "Sistema RFID - Colegio Divino Salvador".to_string(),
                "Sitio web cargado correctamente".to_string()
            ],
        }
    }
}

impl SiteConfig {
    /// Parses overrides; keys left out keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded site configuration, or defaults if it does not parse.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::warn!("Invalid embedded site config, using defaults: {}", e);
            Self::default()
        })
    }
}
