use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DataFileError;

/// WaveformStore holds previously recorded detector acquisitions and replays
/// them in an endless cycle.
///
/// The backing file is a CSV with one acquisition per row, each row a list of
/// comma-separated numeric samples (the format produced by the experiment
/// data extraction script). The whole file is read up front; a run's worth
/// of waveforms is small.
#[derive(Debug, Clone, Default)]
pub struct WaveformStore {
    waveforms: Vec<Vec<f64>>,
    cursor: usize,
}

impl WaveformStore {
    /// Load all waveforms from a CSV data file
    pub fn load(path: &Path) -> Result<Self, DataFileError> {
        if !path.exists() {
            return Err(DataFileError::BadFilePath(path.to_path_buf()));
        }

        let mut contents = String::new();
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;

        let mut waveforms: Vec<Vec<f64>> = Vec::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            let mut samples: Vec<f64> = Vec::new();
            for entry in line.split_terminator(",") {
                samples.push(entry.trim().parse::<f64>()?);
            }
            waveforms.push(samples);
        }

        if waveforms.is_empty() {
            return Err(DataFileError::NoWaveforms);
        }

        Ok(Self {
            waveforms,
            cursor: 0,
        })
    }

    /// Number of recorded acquisitions in the store
    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }

    /// Get the next acquisition, wrapping back to the first after the last
    pub fn next_waveform(&mut self) -> &[f64] {
        let idx = self.cursor;
        self.cursor = (self.cursor + 1) % self.waveforms.len();
        &self.waveforms[idx]
    }
}
