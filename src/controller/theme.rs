use crate::utils::{ PreferenceStore, Theme };
use super::page::Page;

/// Keeps the persisted theme preference and the page marker in agreement.
#[derive(Debug, Clone)]
pub struct ThemeController {
    key: String,
    current: Theme,
}

impl ThemeController {
    /// Reads the stored preference; absent, unreadable or unknown values fall back to light.
    pub fn load<S: PreferenceStore>(key: &str, store: &S) -> Self {
        let current = match store.get(key) {
            Ok(Some(value)) =>
                Theme::parse(&value).unwrap_or_else(|| {
                    log::debug!("Ignoring unknown stored theme {:?}", value);
                    Theme::default()
                }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::debug!("Theme preference unavailable: {}", e);
                Theme::default()
            }
        };
        Self { key: key.to_string(), current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Marks the page without touching storage.
    pub fn restore<P: Page>(&self, page: &mut P) {
        page.set_theme_marker(self.current);
    }

    pub fn apply<S: PreferenceStore, P: Page>(&mut self, theme: Theme, store: &mut S, page: &mut P) {
        page.set_theme_marker(theme);
        self.current = theme;
        if let Err(e) = store.set(&self.key, theme.as_str()) {
            log::debug!("Failed to persist theme {}: {}", theme, e);
        }
    }

    pub fn toggle<S: PreferenceStore, P: Page>(&mut self, store: &mut S, page: &mut P) -> Theme {
        let next = page.applied_theme().opposite();
        self.apply(next, store, page);
        log::debug!("Theme switched to {}", next);
        next
    }
}
