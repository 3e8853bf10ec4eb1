pub mod site_config;

pub use site_config::SiteConfig;
