use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::controller::{ Control, PageEvent };
use super::controls::{ use_site, ControlButton };

/// Preview dialog for the project's shared documents; hidden until the controller opens it.
#[component]
pub fn DocumentModal() -> Element {
    let modal = use_context::<SiteConfig>().modal;
    let site = use_site();
    let load_site = site.clone();

    rsx! {
        div {
            id: "{modal.modal_id}",
            class: "modal",
            role: "dialog",
            aria_modal: "true",
            aria_hidden: "true",
            style: "display: none;",
            div {
                id: "{modal.backdrop_id}",
                class: "modal-backdrop",
                onclick: move |_| {
                    if let Some(site) = &site {
                        site.dispatch(PageEvent::Click(Control::ModalBackdrop));
                    }
                },
            }
            div {
                class: "modal-content",
                div {
                    class: "modal-header",
                    h3 { "Documentación del proyecto" }
                    ControlButton {
                        control: Control::ModalClose,
                        id: modal.close_id.clone(),
                        class: "modal-close",
                        label: "Cerrar",
                        "×"
                    }
                }
                iframe {
                    id: "{modal.frame_id}",
                    class: "modal-frame",
                    title: "Vista previa de documentos",
                    onload: move |_| {
                        if let Some(site) = &load_site {
                            site.dispatch(PageEvent::FrameLoaded);
                        }
                    },
                }
                p {
                    class: "modal-note",
                    "¿No se muestra? "
                    a { href: "{modal.share_link}", target: "_blank", rel: "noopener", "Abrir en OneDrive" }
                }
            }
        }
    }
}
