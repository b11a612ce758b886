pub mod catalog;
pub mod helpers;
pub mod scroll;
pub mod validator;

pub use crate::domain::model::{
    CardSize, ObserverConfig, Service, ValidationResult, VisibilityEntry,
};
pub use crate::domain::ports::{DomAdapter, VisibilityHandle};
pub use crate::utils::error::Result;
