use clap::{Arg, Command};
use indicatif::{MultiProgress, ProgressBar};
use indicatif_log_bridge::LogWrapper;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use libgmd_sim::config::Config;
use libgmd_sim::control::tick;
use libgmd_sim::data_file::WaveformStore;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn main() {
    // Create a cli
    let matches = Command::new("gmd_sim_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("ticks")
                .short('t')
                .long("ticks")
                .help("Override the number of ticks to replay (0 runs until interrupted)"),
        )
        .get_matches();

    // Initialize feedback
    let logger = simplelog::CombinedLogger::new(vec![
        simplelog::TermLogger::new(
            simplelog::LevelFilter::Info,
            simplelog::Config::default(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            File::create("gmd_sim.log").expect("Could not create the log file!"),
        ),
    ]);

    let pb_manager = MultiProgress::new();

    LogWrapper::new(pb_manager.clone(), logger)
        .try_init()
        .expect("Could not create logging/progress!");

    // Parse the cli
    let config_path = PathBuf::from(matches.get_one::<String>("path").expect("We require args"));

    if let Some(("new", _)) = matches.subcommand() {
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );

        make_template_config(&config_path);
        log::info!("Done.");
        return;
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let mut config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    if let Some(ticks) = matches.get_one::<String>("ticks") {
        match ticks.parse::<u64>() {
            Ok(n) => config.n_ticks = n,
            Err(e) => {
                log::error!("Invalid tick count {ticks}: {e}");
                return;
            }
        }
    }
    log::info!("Config successfully loaded.");
    log::info!("Data Path: {}", config.data_path.to_string_lossy());
    log::info!("Tick Period: {} ms", config.tick_period_ms);
    log::info!(
        "Peak Window: [{}, {}] Data Gain: {}",
        config.low_val,
        config.high_val,
        config.data_gain
    );
    log::info!(
        "Attenuation Control: {} Split Policy: {:?}",
        config.enable_att_control,
        config.split_policy
    );
    log::info!(
        "Peak Sharpening: {} k2: {}",
        config.enable_peak_sharpen,
        config.sharpen_k2
    );

    // Load the recorded waveforms
    let mut store = match WaveformStore::load(&config.data_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Loaded {} recorded waveforms.", store.len());

    let mut state = match config.initial_state() {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Initial attenuators [{state}]");

    let settings = config.settings();
    let period = config.tick_period();

    // Setup the progress bar for a bounded replay
    let pb = if config.is_bounded() {
        Some(pb_manager.add(ProgressBar::new(config.n_ticks)))
    } else {
        None
    };

    let mut tick_count: u64 = 0;
    loop {
        let raw = store.next_waveform();
        match tick(raw, state, &settings) {
            Ok(output) => {
                if output.state != state {
                    log::info!("Attenuators changed [{}] -> [{}]", state, output.state);
                }
                state = output.state;
            }
            Err(e) => {
                log::error!("Control cycle failed: {e}");
                break;
            }
        }

        tick_count += 1;
        if let Some(ref bar) = pb {
            bar.inc(1);
        }
        if config.is_bounded() && tick_count >= config.n_ticks {
            break;
        }

        std::thread::sleep(period);
    }

    if let Some(bar) = pb {
        bar.finish();
    }
    log::info!(
        "Replayed {} ticks. Final attenuators [{state}]",
        tick_count
    );

    log::info!("Done.");
}
