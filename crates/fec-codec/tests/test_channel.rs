mod common;

use fec_codec::channel::{self, NoisyChannel, channel_from_config, make_rng};
use fec_codec::simulation::{self, SimulationStats, TrialOutcome};
use fec_config::{CfgChannel, ChannelModel, from_toml_str};

use common::{init_logging, payload};

#[test]
fn test_simulation_from_toml() {
    init_logging();
    let cfg = from_toml_str(
        r#"
        config_version = "0.1"

        [channel]
        model = "OnePerBlock"
        block_error_rate = 0.8
        seed = 99

        [simulation]
        trials = 400
        "#,
    )
    .unwrap();

    let mut ch = channel_from_config(&cfg.channel);
    let mut rng = make_rng(Some(100));
    let stats = simulation::simulate(ch.as_mut(), cfg.simulation.trials, &mut rng);
    assert_eq!(stats.trials, 400);
    assert_eq!(stats.delivered, 400);
    assert_eq!(stats.bits_flipped, stats.blocks_corrected);
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    init_logging();
    let cfg = CfgChannel {
        model: ChannelModel::Bsc { bit_error_rate: 0.05 },
        seed: Some(2024),
    };
    let run = || -> SimulationStats {
        let mut ch = channel_from_config(&cfg);
        simulation::simulate(ch.as_mut(), 300, &mut make_rng(Some(1)))
    };
    assert_eq!(run(), run());
}

#[test]
fn test_two_flips_never_delivered_wrong() {
    init_logging();
    // Two flips in one block mis-correct into errors confined to one nibble,
    // a burst CRC-8 always catches
    let mut ch = channel::RandomFlipChannel::new(2, make_rng(Some(8)));
    let stats = simulation::simulate(&mut ch, 2000, &mut make_rng(Some(9)));
    assert_eq!(stats.undetected, 0);
    assert!(stats.detected > 0);
    assert!(stats.delivered > 0);
}

#[test]
fn test_noiseless_trial() {
    init_logging();
    let mut stats = SimulationStats::default();
    let mut ch = channel::Noiseless;
    assert_eq!(ch.name(), "noiseless");
    assert_eq!(simulation::run_trial(&mut ch, &payload(0xA5C3), &mut stats), TrialOutcome::Delivered);
    assert_eq!(stats.trials, 1);
}
