use serde::{Deserialize, Serialize};

use super::constants::{ATT_LABELS, DB_PER_STEP, STAGE_MAX};
use super::error::AttenuationError;

/// The committed settings of the two physical attenuator stages.
///
/// The pre stage sits upstream of the amplifier, the post stage just ahead of
/// the digitizer. Each setting is an integer multiple of -3 dB, ranging from
/// 0 (no attenuation) to 15 (-45 dB). The control cycle takes the previous
/// tick's state in and hands a new state back out; there is no ambient
/// shared attenuator state anywhere in the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttenuatorState {
    pub pre: u8,
    pub post: u8,
}

impl AttenuatorState {
    /// Create a new state, validating both stage settings
    pub fn new(pre: u8, post: u8) -> Result<Self, AttenuationError> {
        if pre > STAGE_MAX {
            return Err(AttenuationError::BadStageSetting(pre));
        }
        if post > STAGE_MAX {
            return Err(AttenuationError::BadStageSetting(post));
        }
        Ok(Self { pre, post })
    }

    /// The combined attenuation index, i.e. the sum of both stages
    pub fn combined(&self) -> u8 {
        self.pre + self.post
    }
}

impl std::fmt::Display for AttenuatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pre: {} post: {}",
            ATT_LABELS[self.pre as usize], ATT_LABELS[self.post as usize]
        )
    }
}

/// Calculate the output signal from the raw based on the attenuator settings.
///
/// Each sample is scaled by `10^(total_dB/20)` where
/// `total_dB = -3 * (stage1 + stage2)`. The scale factor is computed once and
/// applied uniformly; the input is never modified. Stage settings outside
/// [0, 15] are a configuration error, not something to clamp silently.
pub fn apply_attenuation(
    waveform: &[f64],
    stage1: u8,
    stage2: u8,
) -> Result<Vec<f64>, AttenuationError> {
    if stage1 > STAGE_MAX {
        return Err(AttenuationError::BadStageSetting(stage1));
    }
    if stage2 > STAGE_MAX {
        return Err(AttenuationError::BadStageSetting(stage2));
    }

    let total_db = DB_PER_STEP * f64::from(stage1 + stage2);
    let scale = 10.0_f64.powf(total_db / 20.0);

    Ok(waveform.iter().map(|val| val * scale).collect())
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuation_scale() {
        let wave = vec![1.0, 10.0, 100.0];
        for stage1 in 0..=STAGE_MAX {
            for stage2 in 0..=STAGE_MAX {
                let out = apply_attenuation(&wave, stage1, stage2).unwrap();
                assert_eq!(out.len(), wave.len());
                let expected = 10.0_f64.powf(-3.0 * f64::from(stage1 + stage2) / 20.0);
                for (raw, attn) in wave.iter().zip(out.iter()) {
                    assert!((attn - raw * expected).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_attenuation_identity() {
        let wave = vec![0.0, -5.0, 42.5, 65535.0];
        let out = apply_attenuation(&wave, 0, 0).unwrap();
        assert_eq!(out, wave);
    }

    #[test]
    fn test_attenuation_bad_stage() {
        let wave = vec![1.0, 2.0];
        assert!(apply_attenuation(&wave, 16, 0).is_err());
        assert!(apply_attenuation(&wave, 0, 200).is_err());
        assert!(AttenuatorState::new(16, 0).is_err());
    }

    #[test]
    fn test_state_display() {
        let state = AttenuatorState::new(1, 0).unwrap();
        assert_eq!(state.to_string(), "pre: -3db post: 0db");
        assert_eq!(state.combined(), 1);
    }
}
