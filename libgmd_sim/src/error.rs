use std::path::PathBuf;
use thiserror::Error;

use super::constants::STAGE_MAX;

#[derive(Debug, Clone, Error)]
pub enum AttenuationError {
    #[error("Invalid attenuator stage setting {0}; settings range from 0 to {max}", max=STAGE_MAX)]
    BadStageSetting(u8),
}

#[derive(Debug, Clone, Error)]
pub enum SharpenError {
    #[error("Waveform of length {0} is too short to sharpen; double differencing requires at least 3 samples")]
    WaveformTooShort(usize),
}

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("Could not open waveform data because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Waveform data failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Waveform data failed to parse a sample: {0}")]
    BadSample(#[from] std::num::ParseFloatError),
    #[error("Waveform data file did not contain any waveforms")]
    NoWaveforms,
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Found invalid split policy keyword: {0}")]
    InvalidKeyword(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
    #[error("Config contains a bad attenuator setting: {0}")]
    BadAttenuator(#[from] AttenuationError),
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Control cycle failed due to attenuation error: {0}")]
    AttenuationError(#[from] AttenuationError),
    #[error("Control cycle failed due to sharpening error: {0}")]
    SharpenError(#[from] SharpenError),
}
