use std::fmt;

use rand::Rng;

use fec_core::{HammingBlock, Payload};

use crate::channel::NoisyChannel;
use crate::twolayer::{self, NUM_BLOCKS};

/// What happened to one payload on its way through the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Decoded to the payload that was sent
    Delivered,
    /// Decoder refused the codeword with UncorrectableError
    Detected,
    /// Decoder accepted the codeword but returned a different payload
    Undetected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub trials: u64,
    pub delivered: u64,
    pub detected: u64,
    pub undetected: u64,
    /// Total channel bit flips over all trials
    pub bits_flipped: u64,
    /// Total blocks the Hamming layer corrected over all trials
    pub blocks_corrected: u64,
}

impl SimulationStats {
    fn record(&mut self, outcome: TrialOutcome, bits_flipped: usize, blocks_corrected: usize) {
        self.trials += 1;
        self.bits_flipped += bits_flipped as u64;
        self.blocks_corrected += blocks_corrected as u64;
        match outcome {
            TrialOutcome::Delivered => self.delivered += 1,
            TrialOutcome::Detected => self.detected += 1,
            TrialOutcome::Undetected => self.undetected += 1,
        }
    }

    fn ratio(&self, n: u64) -> f64 {
        if self.trials == 0 { 0.0 } else { n as f64 / self.trials as f64 }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "trials:            {}", self.trials)?;
        writeln!(f, "delivered:         {} ({:.4})", self.delivered, self.ratio(self.delivered))?;
        writeln!(f, "detected errors:   {} ({:.4})", self.detected, self.ratio(self.detected))?;
        writeln!(f, "undetected errors: {} ({:.4})", self.undetected, self.ratio(self.undetected))?;
        writeln!(f, "bits flipped:      {}", self.bits_flipped)?;
        write!(f, "blocks corrected:  {}", self.blocks_corrected)
    }
}

/// Sends one payload through encoder, channel and decoder
pub fn run_trial(channel: &mut dyn NoisyChannel, payload: &Payload, stats: &mut SimulationStats) -> TrialOutcome {
    let sent = twolayer::encode16(payload);
    let received = channel.transmit(&sent);

    let diff: [HammingBlock; NUM_BLOCKS] = sent.xor(&received).chunks();
    let max_block_flips = diff.iter().map(|b| b.count_ones()).max().unwrap_or(0);

    let report = twolayer::decode42_report(&received);
    let outcome = match report.payload() {
        Ok(decoded) if decoded == *payload => TrialOutcome::Delivered,
        Ok(decoded) => {
            tracing::debug!("undetected error: sent {} got {} via {}", payload, decoded, received.dump_grouped(7));
            TrialOutcome::Undetected
        }
        Err(_) => TrialOutcome::Detected,
    };

    // At most one flip per block is always within correction power
    fec_core::assert_warn!(
        max_block_flips > 1 || outcome == TrialOutcome::Delivered,
        "payload {} lost with at most one flip per block",
        payload
    );

    stats.record(outcome, sent.xor(&received).count_ones(), report.corrections());
    outcome
}

/// Pushes `trials` uniformly random payloads through the channel
pub fn simulate<R: Rng>(channel: &mut dyn NoisyChannel, trials: u64, rng: &mut R) -> SimulationStats {
    tracing::info!("simulation: {} trials over {}", trials, channel.name());
    let mut stats = SimulationStats::default();
    for _ in 0..trials {
        let payload = Payload::from_u64(rng.random::<u16>() as u64);
        run_trial(channel, &payload, &mut stats);
    }
    tracing::info!(
        "simulation: delivered {}, detected {}, undetected {}",
        stats.delivered,
        stats.detected,
        stats.undetected
    );
    stats
}
