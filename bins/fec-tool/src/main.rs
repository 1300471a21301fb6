use clap::Parser;

use fec_codec::channel::{channel_from_config, make_rng};
use fec_codec::simulation;
use fec_config::{CodecToolConfig, toml_config};
use fec_core::debug;

mod modes;
use modes::Mode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Two-layer CRC-8 + Hamming(7,4) channel codec tool",
    long_about = "Encodes 16-bit payloads into 42-bit codewords and decodes them back, \
                  runs the CRC-8 and Hamming(7,4) layers on their own, \
                  and simulates codewords passing through a noisy channel"
)]
struct Args {
    #[arg(
        help = "Mode: [ encode | decode | crc-encode | crc-verify | hamming-encode | hamming-decode | auto | interactive | simulate ]"
    )]
    mode: String,

    /// Bit string; may be split over several arguments, spaces are ignored
    #[arg(
        help = "Bit string of '0' and '1', optionally grouped with spaces"
    )]
    bitstring: Vec<String>,

    #[arg(
        short = 'c',
        long = "config",
        help = "TOML config file with channel model and simulation settings"
    )]
    config: Option<String>,

    #[arg(
        short = 'n',
        long = "trials",
        help = "Number of simulation trials, overrides the config file"
    )]
    trials: Option<u64>,

    #[arg(
        short = 'v',
        long = "verbose-log",
        help = "Write a trace-level log to this file"
    )]
    verbose_log: Option<String>,
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> CodecToolConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

fn run_simulation(cfg: &CodecToolConfig, trials: u64) {
    let mut channel = channel_from_config(&cfg.channel);
    // Payload stream must not replay the noise stream
    let mut payload_rng = make_rng(cfg.channel.seed.map(|s| s.wrapping_add(1)));
    let stats = simulation::simulate(channel.as_mut(), trials, &mut payload_rng);
    println!("channel:           {}", channel.name());
    println!("{}", stats);
}

fn main() {
    eprintln!("[+] Two-layer channel codec tool");
    eprintln!("    CRC-8 (x^8+x^2+x+1) over Hamming(7,4), 16 -> 42 bits");

    let args = Args::parse();

    let Some(mode) = Mode::parse(&args.mode) else {
        eprintln!("Error: Unsupported mode '{}'", args.mode);
        eprintln!("Supported: encode, decode, crc-encode, crc-verify, hamming-encode, hamming-decode, auto, interactive, simulate");
        std::process::exit(1);
    };

    let cfg = match &args.config {
        Some(path) => load_config_from_toml(path),
        None => CodecToolConfig::default(),
    };
    let _log_guard = debug::setup_logging_default(args.verbose_log.clone().or(cfg.debug_log.clone()));
    if let Some(path) = &args.config {
        tracing::debug!("loaded config from {}: {:?}", path, cfg);
    }

    match mode {
        Mode::Interactive => {
            if let Err(e) = modes::interactive(std::io::stdin().lock(), &mut std::io::stdout()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Mode::Simulate => {
            let trials = args.trials.unwrap_or(cfg.simulation.trials);
            run_simulation(&cfg, trials);
        }
        Mode::Line(line_mode) => {
            if args.bitstring.is_empty() {
                eprintln!("Error: mode '{}' requires a bit string", args.mode);
                std::process::exit(1);
            }
            let input = args.bitstring.join(" ");
            match modes::run_line(line_mode, &input) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
