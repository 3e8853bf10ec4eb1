use super::events::{ Control, KeyPress };

/// Control a key press activates: Enter or Space on a focused control acts as a click on it.
pub fn activated_control(target: Option<&Control>, key: KeyPress) -> Option<Control> {
    match target {
        Some(control) if key.activates() => Some(control.clone()),
        _ => None,
    }
}

pub fn dismisses_modal(target: Option<&Control>, key: KeyPress) -> bool {
    target.is_none() && key == KeyPress::Escape
}
