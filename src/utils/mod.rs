mod storage;
mod theme_state;

pub use storage::{ MemoryStore, PreferenceStore };
pub use theme_state::{ Theme, ThemeState };
