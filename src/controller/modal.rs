use serde::{ Deserialize, Serialize };
use super::events::TimerId;
use super::page::{ Page, Scheduler };

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub preview_id: String,
    pub modal_id: String,
    pub backdrop_id: String,
    pub close_id: String,
    pub frame_id: String,
    pub share_link: String,
    pub viewer_endpoint: String,
    pub fallback_delay_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            preview_id: "preview-onedrive".to_string(),
            modal_id: "onedrive-modal".to_string(),
            backdrop_id: "onedrive-modal-backdrop".to_string(),
            close_id: "onedrive-modal-close".to_string(),
            frame_id: "onedrive-iframe".to_string(),
            share_link: "https://1drv.ms/f/c/95552b31406338aa/Eq6O2md4WcFKvLmqHTbHX34BwHb00wxOdkiF19NW9AY5zQ?e=6gyuae".to_string(),
            viewer_endpoint: "https://view.officeapps.live.com/op/embed.aspx?src=".to_string(),
            fallback_delay_ms: 2000,
        }
    }
}

impl ModalConfig {
    /// Share link wrapped in the office viewer, percent-encoded as its `src` parameter.
    pub fn viewer_url(&self) -> String {
        format!("{}{}", self.viewer_endpoint, urlencoding::encode(&self.share_link))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        fallback: Option<TimerId>,
        frame_loaded: bool,
    },
}

/// Document preview dialog embedding the shared folder.
#[derive(Debug, Clone)]
pub struct PreviewModal {
    config: ModalConfig,
    state: ModalState,
    enabled: bool,
    // Clearing the frame on close queues one `load` for the blank document.
    blank_load_pending: bool,
}

impl PreviewModal {
    pub fn new(config: ModalConfig) -> Self {
        Self { config, state: ModalState::Closed, enabled: false, blank_load_pending: false }
    }

    /// Enables the modal only when its trigger, container and frame are all present.
    pub fn start<P: Page>(&mut self, page: &P) {
        self.enabled =
            page.has_element(&self.config.preview_id) &&
            page.has_element(&self.config.modal_id) &&
            page.has_element(&self.config.frame_id);
        if !self.enabled {
            log::debug!("Document preview markup missing, modal disabled");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn open<P: Page + Scheduler>(&mut self, page: &mut P) {
        if !self.enabled {
            return;
        }
        if let ModalState::Open { fallback: Some(timer), .. } = self.state {
            page.clear_timeout(timer);
        }

        page.set_frame_source(&self.config.frame_id, &self.config.viewer_url());
        let fallback = match page.set_timeout(self.config.fallback_delay_ms) {
            Ok(timer) => Some(timer),
            Err(e) => {
                log::debug!("Fallback timer unavailable: {}", e);
                None
            }
        };

        page.set_style(&self.config.modal_id, "display", "flex");
        page.set_attribute(&self.config.modal_id, "aria-hidden", "false");
        page.set_body_style("overflow", "hidden");

        self.state = ModalState::Open { fallback, frame_loaded: false };
        log::debug!("Document preview opened");
    }

    pub fn close<P: Page + Scheduler>(&mut self, page: &mut P) {
        if !self.enabled {
            return;
        }
        page.set_style(&self.config.modal_id, "display", "none");
        page.set_attribute(&self.config.modal_id, "aria-hidden", "true");
        page.set_frame_source(&self.config.frame_id, "");
        page.set_body_style("overflow", "");

        if let ModalState::Open { fallback, .. } = self.state {
            if let Some(timer) = fallback {
                page.clear_timeout(timer);
            }
            self.blank_load_pending = true;
        }
        self.state = ModalState::Closed;
        log::debug!("Document preview closed");
    }

    /// Records a viewer load. The load of the blank document left by the last close is skipped,
    /// even when it arrives after a quick reopen.
    pub fn on_frame_loaded(&mut self) {
        if std::mem::take(&mut self.blank_load_pending) {
            log::trace!("Skipping load of the cleared frame");
            return;
        }
        if let ModalState::Open { frame_loaded, .. } = &mut self.state {
            *frame_loaded = true;
        }
    }

    /// Swaps in the raw share link when the viewer has not loaded by the time the fallback fires.
    pub fn on_timer<P: Page>(&mut self, timer: TimerId, page: &mut P) -> bool {
        let ModalState::Open { fallback, frame_loaded } = &mut self.state else {
            return false;
        };
        if *fallback != Some(timer) {
            return false;
        }
        *fallback = None;
        if !*frame_loaded {
            log::debug!("Viewer did not load, falling back to the share link");
            page.set_frame_source(&self.config.frame_id, &self.config.share_link);
        }
        true
    }
}
