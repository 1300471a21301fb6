use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::codec_config::{CfgChannel, CfgSimulation, ChannelModel, ChannelModelKind, CodecToolConfig, default_trials};

/// Build `CodecToolConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<CodecToolConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref ch) = root.channel {
        if !ch.extra.is_empty() {
            return Err(format!("Unrecognized fields in channel: {:?}", sorted_keys(&ch.extra)).into());
        }
    }
    if let Some(ref sim) = root.simulation {
        if !sim.extra.is_empty() {
            return Err(format!("Unrecognized fields in simulation: {:?}", sorted_keys(&sim.extra)).into());
        }
    }

    let mut cfg = CodecToolConfig {
        debug_log: root.debug_log,
        channel: CfgChannel::default(),
        simulation: CfgSimulation::default(),
    };

    if let Some(ch) = root.channel {
        cfg.channel = build_channel(ch)?;
    }
    if let Some(sim) = root.simulation {
        cfg.simulation.trials = sim.trials;
    }

    Ok(cfg)
}

/// Build `CodecToolConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<CodecToolConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `CodecToolConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CodecToolConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

/// Turns the flat channel table into a validated model. Each model requires
/// its own parameter and rejects parameters belonging to other models.
fn build_channel(src: ChannelDto) -> Result<CfgChannel, Box<dyn std::error::Error>> {
    let given: Vec<&str> = [
        ("bit_error_rate", src.bit_error_rate.is_some()),
        ("flips", src.flips.is_some()),
        ("block_error_rate", src.block_error_rate.is_some()),
    ]
    .iter()
    .filter(|(_, present)| *present)
    .map(|(name, _)| *name)
    .collect();

    let (model, allowed) = match src.model {
        ChannelModelKind::Noiseless => (ChannelModel::Noiseless, None),
        ChannelModelKind::Bsc => {
            let bit_error_rate = src.bit_error_rate.ok_or("channel model Bsc requires bit_error_rate")?;
            (ChannelModel::Bsc { bit_error_rate }, Some("bit_error_rate"))
        }
        ChannelModelKind::RandomFlips => {
            let flips = src.flips.ok_or("channel model RandomFlips requires flips")?;
            (ChannelModel::RandomFlips { flips }, Some("flips"))
        }
        ChannelModelKind::OnePerBlock => {
            let block_error_rate = src.block_error_rate.ok_or("channel model OnePerBlock requires block_error_rate")?;
            (ChannelModel::OnePerBlock { block_error_rate }, Some("block_error_rate"))
        }
    };

    let unexpected: Vec<&str> = given.into_iter().filter(|name| Some(*name) != allowed).collect();
    if !unexpected.is_empty() {
        return Err(format!("Fields {:?} do not apply to channel model {:?}", unexpected, src.model).into());
    }

    model.validate()?;

    Ok(CfgChannel { model, seed: src.seed })
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    channel: Option<ChannelDto>,

    #[serde(default)]
    simulation: Option<SimulationDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct ChannelDto {
    model: ChannelModelKind,
    seed: Option<u64>,

    bit_error_rate: Option<f64>,
    flips: Option<usize>,
    block_error_rate: Option<f64>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct SimulationDto {
    #[serde(default = "default_trials")]
    trials: u64,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
