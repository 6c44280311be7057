pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HelloUtil, Printer};
pub use core::{app::HelloApp, decode::decode};
pub use domain::model::EmptyRecord;
pub use utils::error::{HelloError, Result};
