pub mod client;
pub mod date;
pub mod interactive;
pub mod meal;
pub mod render;
pub mod session;

pub use crate::domain::model::{EducationOffice, School};
pub use crate::domain::ports::{ConfigProvider, NeisApi};
pub use crate::utils::error::Result;
