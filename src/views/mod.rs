mod controls;
mod document_modal;
mod home;
mod navbar;

pub use controls::{ use_site, ControlButton };
pub use document_modal::DocumentModal;
pub use home::Home;
pub use navbar::Navbar;
