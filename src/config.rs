use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::record_states::MessageType;

/// Main configuration structure for record state handling
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecordStatesConfig {
    /// Transition behaviour
    pub transitions: TransitionConfig,
    /// Validation message display
    pub messages: MessageConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionConfig {
    /// Treat the literal argument "null" as no target state
    pub treat_null_literal_as_absent: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            treat_null_literal_as_absent: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageConfig {
    /// Severity used when forwarding store validation errors
    pub validation_severity: MessageType,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            validation_severity: MessageType::Info,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: true,
        }
    }
}

impl RecordStatesConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (record-states.toml, .record-states-rc)
    /// 3. Environment variables (prefixed with RECORD_STATES_)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`RecordStatesConfig::load`], resolving files relative to `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        let toml_path = dir.join("record-states.toml");
        if toml_path.exists() {
            builder = builder.add_source(File::from(toml_path));
        }

        let rc_path = dir.join(".record-states-rc");
        if rc_path.exists() {
            builder = builder.add_source(File::from(rc_path).format(config::FileFormat::Toml));
        }

        // Override with environment variables, e.g.
        // RECORD_STATES_TRANSITIONS__TREAT_NULL_LITERAL_AS_ABSENT=false
        builder = builder.add_source(
            Environment::with_prefix("RECORD_STATES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let record_states_config: RecordStatesConfig = config.try_deserialize()?;

        Ok(record_states_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
