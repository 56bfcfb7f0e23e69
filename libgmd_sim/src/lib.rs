//! # gmd_sim
//!
//! gmd_sim is a simulator for the closed-loop automatic gain control of a
//! gas-based beam monitor (GMD), written in Rust. It replays previously
//! recorded detector waveforms, models the combined loss of the two step
//! attenuator stages sitting in front of the digitizer, optionally sharpens
//! the simulated peak, and feeds the peak classification back into new
//! attenuator settings, one discrete step per tick, the way the real
//! instrument's control loop does.
//!
//! ## Layout
//!
//! The repository is a workspace with two members:
//!
//! - `libgmd_sim`: the library, containing the attenuation model, peak
//!   sharpener, peak/plateau detectors, the step and split policies, the
//!   per-tick orchestrator, and the waveform store/config plumbing.
//! - `gmd_sim_cli`: the replay application, which loads a YAML
//!   configuration and drives the control cycle at a fixed period.
//!
//! ## Building & Install
//!
//! To build and install the replay CLI use `cargo install --path ./gmd_sim_cli`
//! from the top level gmd_sim repository. The binary will be installed to
//! your cargo install location (typically something like `~/.cargo/bin/`).
//!
//! ## Configuration
//!
//! The YAML format of a configuration file is as follows:
//!
//! ```yml
//! data_path: None
//! tick_period_ms: 200
//! n_ticks: 0
//! data_gain: 1.0
//! high_val: 30000.0
//! low_val: 10000.0
//! pre_attn: 0
//! post_attn: 0
//! enable_att_control: false
//! enable_peak_sharpen: false
//! sharpen_k2: 5.0
//! split_policy: even
//! plateau_run: 3
//! ```
//!
//! - `data_path`: full path to a CSV file of recorded waveforms, one
//!   acquisition per row, comma-separated samples.
//! - `tick_period_ms`: the control cycle period. The instrument scans at
//!   200 ms.
//! - `n_ticks`: how many ticks to replay. 0 runs until interrupted.
//! - `data_gain`: scale factor applied to the raw stream before the
//!   attenuation model.
//! - `high_val`/`low_val`: the target window for the processed peak.
//! - `pre_attn`/`post_attn`: initial attenuator stage settings, each an
//!   integer multiple of -3 dB in [0, 15] (0 = 0db, 15 = -45db).
//! - `enable_att_control`: run the automatic attenuation loop.
//! - `enable_peak_sharpen`/`sharpen_k2`: second-derivative peak sharpening.
//! - `split_policy`: `even` or `favor_post`.
//! - `plateau_run`: equal adjacent pairs treated as a clipped (plateaued)
//!   peak by the favor_post policy.
//!
//! ## Output
//!
//! The CLI logs the replay to the terminal and to a `gmd_sim.log` file next
//! to the process. Every attenuator change is logged with its dB labels, so
//! the closed-loop behavior of a run can be reconstructed from the log
//! alone. Log files are also useful because they can be easily shared when
//! errors occur.
pub mod attenuation;
pub mod config;
pub mod constants;
pub mod control;
pub mod data_file;
pub mod detect;
pub mod error;
pub mod policy;
pub mod sharpen;
