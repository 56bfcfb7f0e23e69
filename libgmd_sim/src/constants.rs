//! Constants used throughout the simulator.

/// Maximum setting of a single step attenuator stage (0 = 0 dB, 15 = -45 dB)
pub const STAGE_MAX: u8 = 15;
/// Maximum combined attenuation index (both stages saturated)
pub const COMBINED_MAX: u8 = 30;
/// Attenuation applied per unit of stage setting
pub const DB_PER_STEP: f64 = -3.0;
/// Full scale of the digitized stream. The recorded data is an unsigned
/// 16-bit ADC stream, so emitted samples saturate at this amplitude.
pub const ADC_FULL_SCALE: f64 = 65535.0;
/// Default number of consecutive equal adjacent pairs treated as a plateau
pub const DEFAULT_PLATEAU_RUN: usize = 3;

/// The mbbi-style labels of the attenuator settings, indexed by setting
pub const ATT_LABELS: [&str; 16] = [
    "0db", "-3db", "-6db", "-9db", "-12db", "-15db", "-18db", "-21db", "-24db", "-27db", "-30db",
    "-33db", "-36db", "-39db", "-42db", "-45db",
];
