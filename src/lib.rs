pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::notifier::{HttpNotifier, LogNotifier};
pub use app::session::{CustomDetails, FormInput, Session};
pub use config::settings::{Overrides, Settings};
pub use core::engine::{NumerologyEngine, NumerologyReport};
pub use core::recommendation::Recommendation;
pub use domain::catalog::{CatalogVariant, CrystalCatalog};
pub use domain::model::{BirthDate, BirthInput, CellClass, Sex};
pub use utils::error::{NumerologyError, Result};
