//! The full-scale 4-round differential-cryptanalysis scenario (K=100,
//! N=2^20). Expensive; run explicitly with `cargo test -- --ignored` or
//! as part of a dedicated CI job, not on every commit.

use present_cipher::experiment::{run, ExperimentParams};
use present_cipher::rng::SeededRandomSource;

#[test]
#[ignore]
fn four_round_experiment_matches_theoretical_characteristic_order_of_magnitude() {
    let params = ExperimentParams {
        num_keys: 100,
        num_plaintexts: 1 << 20,
        rounds: 4,
        alpha: 0x4004,
        beta: 0x4004,
    };
    let mut source = SeededRandomSource::seed_from_u64(0xD15C_0BA1_1D15_C0BA);
    let report = run(&params, &mut source, |_, _, _| {});

    assert_eq!(report.total_trials, params.num_keys as u64 * params.num_plaintexts);

    let x = report
        .neg_log2_probability()
        .expect("4-round characteristic should fire at this scale");
    assert!(
        (16.0..=24.0).contains(&x),
        "neg_log2_probability {x} is outside the expected 2^-18..2^-22 band"
    );
}
