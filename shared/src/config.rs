use serde::{Deserialize, Serialize};

/// Configuration for the lecture calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// Local storage key holding the lecture collection
    pub storage_key: String,
    /// Suffix appended to formatted amounts
    pub currency_symbol: String,
    pub enable_debug_logging: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            storage_key: "lectures".to_string(),
            currency_symbol: "₩".to_string(),
            enable_debug_logging: false,
        }
    }
}

impl CalendarConfig {
    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        crate::format::format_amount(amount, &self.currency_symbol)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.enable_debug_logging {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
