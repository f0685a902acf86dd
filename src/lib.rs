pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ApiSettings, TomlConfig};
pub use core::{client::NeisClient, session::MealLookup};
pub use domain::model::{EducationOffice, School};
pub use utils::error::{NeisError, Result};
