use web_sys::{ Storage, Window };
use crate::error::SiteError;
use crate::utils::PreferenceStore;

/// `window.localStorage`; private browsing or blocked storage leaves it unavailable.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, SiteError> {
        self.storage.as_ref().ok_or_else(|| SiteError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        Ok(self.storage()?.set_item(key, value)?)
    }
}
