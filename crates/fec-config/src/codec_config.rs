use serde::Deserialize;

/// Number of bits a codeword carries over the channel
pub const CODEWORD_BITS: usize = 42;

/// The kind of noise model, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ChannelModelKind {
    Noiseless,
    Bsc,
    RandomFlips,
    OnePerBlock,
}

/// Validated noise model with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelModel {
    /// Codewords arrive unchanged
    Noiseless,
    /// Binary symmetric channel: every bit flips independently
    Bsc { bit_error_rate: f64 },
    /// Exactly `flips` distinct bit positions flip per codeword
    RandomFlips { flips: usize },
    /// Each 7-bit block independently gets at most one flipped bit
    OnePerBlock { block_error_rate: f64 },
}

#[derive(Debug, Clone)]
pub struct CfgChannel {
    pub model: ChannelModel,
    /// Fixed RNG seed for reproducible runs. Drawn from the OS if None.
    pub seed: Option<u64>,
}

impl Default for CfgChannel {
    fn default() -> Self {
        Self {
            model: ChannelModel::Noiseless,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CfgSimulation {
    /// Number of random payloads pushed through the channel
    pub trials: u64,
}

impl Default for CfgSimulation {
    fn default() -> Self {
        Self { trials: default_trials() }
    }
}

pub fn default_trials() -> u64 {
    1000
}

/// Complete configuration for the codec tool
#[derive(Debug, Clone, Default)]
pub struct CodecToolConfig {
    /// Optional verbose log file
    pub debug_log: Option<String>,
    pub channel: CfgChannel,
    pub simulation: CfgSimulation,
}

impl ChannelModel {
    /// Checks parameter ranges. Rates must lie in [0, 1], flips may not exceed the codeword length.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            ChannelModel::Noiseless => Ok(()),
            ChannelModel::Bsc { bit_error_rate } => check_rate("bit_error_rate", bit_error_rate),
            ChannelModel::OnePerBlock { block_error_rate } => check_rate("block_error_rate", block_error_rate),
            ChannelModel::RandomFlips { flips } => {
                if flips <= CODEWORD_BITS {
                    Ok(())
                } else {
                    Err(format!("flips must be at most {}, got {}", CODEWORD_BITS, flips))
                }
            }
        }
    }
}

fn check_rate(field: &str, rate: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(format!("{} must be within [0, 1], got {}", field, rate))
    }
}
