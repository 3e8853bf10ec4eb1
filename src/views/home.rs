use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::controller::Control;
use super::controls::ControlButton;
use super::document_modal::DocumentModal;

const PROBLEMS: [(&str, &str); 3] = [
    ("Pase de lista manual", "Cada docente pierde minutos de clase registrando la asistencia en papel."),
    ("Datos dispersos", "Los registros quedan en cuadernos y hojas de cálculo difíciles de consolidar."),
    ("Avisos tardíos", "Las familias se enteran de las ausencias días después."),
];

const FEATURES: [(&str, &str); 3] = [
    ("Lectores RFID", "Cada estudiante registra su ingreso acercando su credencial al lector."),
    ("Panel en línea", "Coordinación consulta la asistencia por grado y por día en tiempo real."),
    ("Notificaciones", "Los acudientes reciben un aviso cuando el estudiante ingresa o sale."),
];

const STEPS: [(&str, &str); 4] = [
    ("1", "Entrega de credenciales con chip RFID a cada estudiante."),
    ("2", "Instalación de lectores en las entradas del colegio."),
    ("3", "Sincronización de los registros con la plataforma."),
    ("4", "Consulta de reportes por docentes y coordinación."),
];

const STATS: [(&str, &str); 3] = [
    ("100%", "de la asistencia registrada automáticamente"),
    ("2s", "por estudiante en la entrada"),
    ("24/7", "de monitoreo de ingresos"),
];

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        main {
            class: "page",
            section {
                id: "inicio",
                class: "hero",
                h1 { "{config.title}" }
                p { class: "hero-text", "Control de asistencia con tecnología RFID para toda la comunidad educativa." }
                ControlButton {
                    control: Control::NavButton("solucion".to_string()),
                    id: "hero-cta",
                    class: "button primary",
                    "Conocer la solución"
                }
            }

            section {
                id: "problema",
                div {
                    class: "section-header",
                    h2 { "El problema" }
                    p { "Así se lleva hoy la asistencia en el colegio." }
                }
                div {
                    class: "card-grid",
                    for (title, text) in PROBLEMS {
                        div { key: "{title}", class: "card", h3 { "{title}" } p { "{text}" } }
                    }
                }
            }

            section {
                id: "solucion",
                div {
                    class: "section-header",
                    h2 { "Nuestra solución" }
                    p { "Un sistema de identificación por radiofrecuencia pensado para el colegio." }
                }
                div {
                    class: "card-grid",
                    for (title, text) in FEATURES {
                        div { key: "{title}", class: "card", h3 { "{title}" } p { "{text}" } }
                    }
                }
            }

            section {
                id: "proceso",
                div {
                    class: "section-header",
                    h2 { "Proceso de implementación" }
                }
                ol {
                    class: "process",
                    for (number, text) in STEPS {
                        li {
                            key: "{number}",
                            class: "process-item",
                            span { class: "process-number", "{number}" }
                            p { "{text}" }
                        }
                    }
                }
            }

            section {
                id: "resultados",
                div {
                    class: "section-header",
                    h2 { "Resultados esperados" }
                }
                div {
                    class: "results-stats",
                    for (value, label) in STATS {
                        div {
                            key: "{label}",
                            class: "stat",
                            span { class: "stat-big-value", "{value}" }
                            span { class: "stat-label", "{label}" }
                        }
                    }
                }
            }

            section {
                id: "contacto",
                div {
                    class: "section-header",
                    h2 { "Documentación" }
                    p { "Consulta los documentos del proyecto sin salir de la página." }
                }
                ControlButton {
                    control: Control::PreviewDocument,
                    id: config.modal.preview_id.clone(),
                    class: "button primary",
                    "Ver documentos"
                }
            }

            DocumentModal {}
        }
    }
}
