pub mod configs;
pub mod controller;
pub mod dom;
mod error;
mod routes;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteConfig;
pub use crate::error::SiteError;
