/// Classification of the processed peak against the target window.
///
/// Recomputed every tick from the processed waveform; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeakStatus {
    TooHigh,
    TooLow,
    InRange,
}

/// Check the waveform's peak against the target window.
///
/// Only the maximum sample is examined; this is a peak detector, not a full
/// envelope check. Both comparisons are strict, so a maximum sitting exactly
/// on either bound counts as in range.
pub fn detect_threshold(high_val: f64, low_val: f64, waveform: &[f64]) -> PeakStatus {
    let peak = waveform.iter().fold(f64::NEG_INFINITY, |max, val| max.max(*val));
    if peak > high_val {
        PeakStatus::TooHigh
    } else if peak < low_val {
        PeakStatus::TooLow
    } else {
        PeakStatus::InRange
    }
}

/// Look for a run of equal-valued samples, a sign of a clipped (saturated) peak.
///
/// Returns true as soon as `run_length` consecutive equal adjacent pairs are
/// found, i.e. `run_length + 1` equal consecutive samples. Waveforms shorter
/// than the run can never qualify.
pub fn detect_plateau(run_length: usize, waveform: &[f64]) -> bool {
    let mut n_detected = 0;
    for pair in waveform.windows(2) {
        if pair[0] == pair[1] {
            n_detected += 1;
            if n_detected >= run_length {
                return true;
            }
        } else {
            n_detected = 0;
        }
    }
    false
}

//Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_window() {
        assert_eq!(detect_threshold(100.0, 10.0, &[50.0]), PeakStatus::InRange);
        assert_eq!(detect_threshold(40.0, 10.0, &[50.0]), PeakStatus::TooHigh);
        assert_eq!(detect_threshold(100.0, 60.0, &[50.0]), PeakStatus::TooLow);
    }

    #[test]
    fn test_threshold_peak_only() {
        // Samples below the low bound don't matter, only the maximum does
        let wave = vec![0.0, 1.0, 50.0, 2.0, 0.0];
        assert_eq!(detect_threshold(100.0, 10.0, &wave), PeakStatus::InRange);
    }

    #[test]
    fn test_threshold_bounds_are_strict() {
        assert_eq!(detect_threshold(50.0, 10.0, &[50.0]), PeakStatus::InRange);
        assert_eq!(detect_threshold(100.0, 50.0, &[50.0]), PeakStatus::InRange);
    }

    #[test]
    fn test_plateau_run() {
        assert!(detect_plateau(3, &[1.0, 2.0, 2.0, 2.0, 2.0, 5.0]));
        assert!(!detect_plateau(3, &[1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn test_plateau_run_must_be_consecutive() {
        // Three equal pairs total, but interrupted
        assert!(!detect_plateau(3, &[2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0]));
    }

    #[test]
    fn test_plateau_short_waveform() {
        assert!(!detect_plateau(3, &[2.0, 2.0]));
        assert!(!detect_plateau(3, &[]));
    }
}
