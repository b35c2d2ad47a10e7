#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{
    cli::{ConsoleNotifier, LocalPageStore},
    CliConfig,
};

pub use crate::core::{clock::TokioClock, engine::EnhanceEngine, enhancer::PageEnhancer};
pub use domain::model::{Element, Page, SubmitOutcome};
pub use utils::error::{EnhanceError, Result};
