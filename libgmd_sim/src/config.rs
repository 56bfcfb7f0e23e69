use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::attenuation::AttenuatorState;
use super::constants::DEFAULT_PLATEAU_RUN;
use super::control::ControlSettings;
use super::error::ConfigError;
use super::policy::SplitPolicy;

/// Structure representing the simulator configuration. Contains the data file
/// path, the replay schedule, and the control-loop knobs that a host runtime
/// would own as process variables.
/// Configs are serializable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_path: PathBuf,
    pub tick_period_ms: u64,
    pub n_ticks: u64,
    pub data_gain: f64,
    pub high_val: f64,
    pub low_val: f64,
    pub pre_attn: u8,
    pub post_attn: u8,
    pub enable_att_control: bool,
    pub enable_peak_sharpen: bool,
    pub sharpen_k2: f64,
    pub split_policy: SplitPolicy,
    pub plateau_run: usize,
}

impl Default for Config {
    /// Generate a new Config object with the instrument defaults. The data
    /// path will be empty/invalid
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("None"),
            tick_period_ms: 200,
            n_ticks: 0,
            data_gain: 1.0,
            high_val: 30000.0,
            low_val: 10000.0,
            pre_attn: 0,
            post_attn: 0,
            enable_att_control: false,
            enable_peak_sharpen: false,
            sharpen_k2: 5.0,
            split_policy: SplitPolicy::Even,
            plateau_run: DEFAULT_PLATEAU_RUN,
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// The initial attenuator state, validated against the stage bounds
    pub fn initial_state(&self) -> Result<AttenuatorState, ConfigError> {
        Ok(AttenuatorState::new(self.pre_attn, self.post_attn)?)
    }

    /// The per-tick control settings
    pub fn settings(&self) -> ControlSettings {
        ControlSettings {
            data_gain: self.data_gain,
            high_val: self.high_val,
            low_val: self.low_val,
            enable_att_control: self.enable_att_control,
            enable_peak_sharpen: self.enable_peak_sharpen,
            sharpen_k2: self.sharpen_k2,
            split_policy: self.split_policy,
            plateau_run: self.plateau_run,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// A bounded replay stops after n_ticks; 0 means run until interrupted
    pub fn is_bounded(&self) -> bool {
        self.n_ticks > 0
    }
}
