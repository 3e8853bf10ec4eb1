//! Synthetic page events and the outcome a handler reports back to the host.

/// Key of an element known to the page surface: its `id`, or a key assigned on lookup.
pub type ElementId = String;

pub type TimerId = i32;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    ThemeToggle,
    /// A navigation button targeting the section with this id.
    NavButton(String),
    PreviewDocument,
    ModalClose,
    ModalBackdrop,
    /// Any other button-like control; activating it has no controller effect.
    Button(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Space,
    Escape,
    Other,
}

impl KeyPress {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => KeyPress::Enter,
            " " | "Spacebar" => KeyPress::Space,
            "Escape" | "Esc" => KeyPress::Escape,
            _ => KeyPress::Other,
        }
    }

    pub fn activates(self) -> bool {
        matches!(self, KeyPress::Enter | KeyPress::Space)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    Reveal,
    Counter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<ElementId>, is_intersecting: bool) -> Self {
        Self { target: target.into(), is_intersecting }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Ready,
    Click(Control),
    /// `target` is the focused control, `None` for document-level key events.
    Key {
        target: Option<Control>,
        key: KeyPress,
    },
    Scroll {
        scroll_y: f64,
    },
    Intersection {
        observer: ObserverKind,
        entries: Vec<IntersectionEntry>,
    },
    Timer(TimerId),
    AnimationFrame {
        timestamp: f64,
    },
    FrameLoaded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventOutcome {
    pub fn prevent_default() -> Self {
        Self { default_prevented: true, propagation_stopped: false }
    }

    pub fn stop_propagation() -> Self {
        Self { default_prevented: false, propagation_stopped: true }
    }
}
