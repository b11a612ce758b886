pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use core::scroll::ScrollAnimationController;
pub use domain::model::{CardSize, ObserverConfig, Service, ValidationResult};
pub use utils::error::{Result, SiteError};
