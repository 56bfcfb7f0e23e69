use super::error::SharpenError;

/// Sharpen a peak by subtracting its scaled second derivative.
///
/// The discrete second derivative (difference-of-differences) is two samples
/// shorter than the input, so it is padded back to the original length by
/// repeating its final value for the trailing two positions. That tail is
/// ~zero anyway since the recorded signals are flat in that region. The
/// output is `input[i] - k2 * d2[i]` for every index.
///
/// Requires at least 3 samples so that double differencing produces a value.
pub fn sharpen(waveform: &[f64], k2: f64) -> Result<Vec<f64>, SharpenError> {
    if waveform.len() < 3 {
        return Err(SharpenError::WaveformTooShort(waveform.len()));
    }

    let d1: Vec<f64> = waveform.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let mut d2: Vec<f64> = d1.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let last = d2[d2.len() - 1];
    d2.push(last);
    d2.push(last);

    Ok(waveform
        .iter()
        .zip(d2.iter())
        .map(|(val, curv)| val - k2 * curv)
        .collect())
}
