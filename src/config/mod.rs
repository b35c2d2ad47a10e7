pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_identifier, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "page-enhancer")]
#[command(about = "Staggered card reveal and submit validation for lesson catalog pages")]
pub struct CliConfig {
    #[arg(long, help = "Path to a JSON page snapshot; a sample catalog page is used if omitted")]
    pub page: Option<String>,

    #[arg(long, default_value = "lesson-card")]
    pub card_class: String,

    #[arg(long, default_value = "price")]
    pub price_field: String,

    #[arg(long, default_value = "100")]
    pub reveal_interval_ms: u64,

    #[arg(long, default_value = "500")]
    pub fade_duration_ms: u64,

    #[arg(long, help = "Submit the form with this price after the reveal")]
    pub submit_price: Option<String>,

    #[arg(long, help = "Write the final page state to this path")]
    pub dump_final: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn card_class(&self) -> &str {
        &self.card_class
    }

    fn price_field_id(&self) -> &str {
        &self.price_field
    }

    fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_identifier("card_class", &self.card_class)?;
        validate_identifier("price_field", &self.price_field)?;
        validate_range("reveal_interval_ms", self.reveal_interval_ms, 0, 60_000)?;
        validate_range("fade_duration_ms", self.fade_duration_ms, 0, 60_000)?;
        Ok(())
    }
}
