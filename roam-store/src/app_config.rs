use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_success_rate() -> f64 {
    0.95
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Amounts above this require the payment confirmation flow before the
    /// caller commits related state.
    #[serde(default = "default_confirmation_threshold")]
    pub payment_confirmation_threshold: i64,
}

fn default_confirmation_threshold() -> i64 {
    1000
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            payment_confirmation_threshold: default_confirmation_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ROAM__STORAGE__DATA_DIR=/tmp/roam` overrides storage.data_dir
            .add_source(config::Environment::with_prefix("ROAM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
