use super::attenuation::{apply_attenuation, AttenuatorState};
use super::constants::ADC_FULL_SCALE;
use super::detect::{detect_plateau, detect_threshold, PeakStatus};
use super::error::CycleError;
use super::policy::{split_even, split_favor_post, step_combined, SplitPolicy};
use super::sharpen::sharpen;

/// The externally owned knobs of one tick.
///
/// These mirror the process variables a host runtime would persist for the
/// instrument. The core reads them at the start of the tick and never writes
/// them; the only state it hands back is the attenuator settings.
#[derive(Debug, Clone)]
pub struct ControlSettings {
    /// Scale factor applied to the raw recorded stream before anything else
    pub data_gain: f64,
    /// Upper bound of the target peak window
    pub high_val: f64,
    /// Lower bound of the target peak window
    pub low_val: f64,
    /// Run the automatic attenuation control loop
    pub enable_att_control: bool,
    /// Run the second-derivative peak sharpener
    pub enable_peak_sharpen: bool,
    /// Second-derivative scaling coefficient for the sharpener
    pub sharpen_k2: f64,
    /// How the combined attenuation is distributed across the stages
    pub split_policy: SplitPolicy,
    /// Equal adjacent pairs required to flag a plateau
    pub plateau_run: usize,
}

/// Everything one tick of the control cycle emits
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// The processed waveform to publish
    pub waveform: Vec<f64>,
    /// The attenuator settings to commit for the next tick
    pub state: AttenuatorState,
    /// The peak classification, when automatic control ran
    pub status: Option<PeakStatus>,
}

/// Run one tick of the closed-loop gain control.
///
/// The pipeline is: gain pre-scale, attenuation model, optional peak
/// sharpening, then (when automatic control is enabled) threshold detection,
/// a single combined-index step, and the chosen split policy. The processed
/// waveform is saturated to the ADC full scale before emission. With
/// automatic control disabled the attenuator settings pass through
/// unchanged and the waveform is still modeled and optionally sharpened.
///
/// Pure with respect to its inputs; the caller commits the returned state
/// before invoking the next tick.
pub fn tick(
    raw: &[f64],
    state: AttenuatorState,
    settings: &ControlSettings,
) -> Result<TickOutput, CycleError> {
    let scaled: Vec<f64> = raw.iter().map(|val| val * settings.data_gain).collect();

    // In reality the signal is attenuated before it hits the ADC, so model
    // the attenuators before any signal processing runs.
    let mut signal = apply_attenuation(&scaled, state.pre, state.post)?;

    if settings.enable_peak_sharpen {
        signal = sharpen(&signal, settings.sharpen_k2)?;
    }

    if !settings.enable_att_control {
        return Ok(TickOutput {
            waveform: signal,
            state,
            status: None,
        });
    }

    let status = detect_threshold(settings.high_val, settings.low_val, &signal);
    let new_att = step_combined(status, state.combined());

    let next = match settings.split_policy {
        SplitPolicy::Even => {
            let (pre, post) = split_even(new_att);
            AttenuatorState { pre, post }
        }
        SplitPolicy::FavorPost => {
            let plateau = detect_plateau(settings.plateau_run, &signal);
            let (pre, post) = split_favor_post(state.pre, state.post, status, plateau);
            AttenuatorState { pre, post }
        }
    };

    if next != state {
        log::debug!(
            "Attenuators stepped from [{}] to [{}] (peak {:?})",
            state,
            next,
            status
        );
    }

    for val in signal.iter_mut() {
        *val = val.clamp(-ADC_FULL_SCALE, ADC_FULL_SCALE);
    }

    Ok(TickOutput {
        waveform: signal,
        state: next,
        status: Some(status),
    })
}
