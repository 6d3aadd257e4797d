pub mod date_parser;
pub mod engine;
pub mod grid;
pub mod profile;
pub mod recommendation;
pub mod reducer;

pub use crate::domain::model::{BirthDate, BirthInput, CellClass, NumerologyProfile, Sex};
pub use crate::domain::ports::{ConfigProvider, Notifier};
pub use crate::utils::error::Result;
