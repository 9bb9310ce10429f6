//! Longstaff-Schwartz sweep against the 8-path illustrative example and on
//! simulated GBM paths.

use approx::assert_abs_diff_eq;
use pr_instruments::Payoff;
use pr_math::seeded_rng;
use pr_methods::{
    simulate_gbm, simulated_european, LsmPricer, LsmResult, LsmSettings, PathMatrix, PowerBasis,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The published 8-path example: unit start value, three exercise dates.
/// Four time rows over a horizon of 4 give a unit discount step.
fn reference_paths() -> PathMatrix {
    PathMatrix::from_paths(&[
        vec![1.00, 1.09, 1.08, 1.34],
        vec![1.00, 1.16, 1.26, 1.54],
        vec![1.00, 1.22, 1.07, 1.03],
        vec![1.00, 0.93, 0.97, 0.92],
        vec![1.00, 1.11, 1.56, 1.52],
        vec![1.00, 0.76, 0.77, 0.90],
        vec![1.00, 0.92, 0.84, 1.01],
        vec![1.00, 0.88, 1.22, 1.34],
    ])
    .unwrap()
}

fn price_reference() -> LsmResult {
    init_tracing();
    LsmPricer::new(Payoff::Put, 1.10, 0.06, 4.0, PowerBasis::default())
        .price(&reference_paths())
        .unwrap()
}

fn assert_at_most_one_exercise(result: &LsmResult) {
    let cf = &result.cash_flows;
    for p in 0..cf.paths() {
        assert!(cf.exercise_count(p) <= 1, "path {p} exercised more than once");
    }
}

// ─── Reference example ────────────────────────────────────────────────────────

#[test]
fn reference_exercise_decisions() {
    let result = price_reference();
    let cf = &result.cash_flows;
    assert_eq!(cf.len(), 3);
    assert_eq!(cf.first_row(), 1);

    let expected_t1 = [0.0, 0.0, 0.0, 0.17, 0.0, 0.34, 0.18, 0.22];
    for (got, want) in cf.at_row(1).unwrap().iter().zip(expected_t1) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }
    assert!(cf.at_row(2).unwrap().iter().all(|&v| v == 0.0));

    let t3 = cf.at_row(3).unwrap();
    assert_abs_diff_eq!(t3[2], 0.07, epsilon = 1e-12);
    assert!(t3.iter().enumerate().all(|(p, &v)| p == 2 || v == 0.0));

    assert_at_most_one_exercise(&result);
}

#[test]
fn reference_value() {
    let result = price_reference();
    assert_abs_diff_eq!(result.value(), 0.114434, epsilon = 1e-5);
    assert_abs_diff_eq!(result.standard_error(), 0.041935, epsilon = 1e-5);
}

#[test]
fn reference_continuation_fit_at_second_date() {
    let result = price_reference();
    let step = &result.steps[0];
    assert_eq!(step.row, 2);
    assert_eq!(step.in_the_money, 5);
    assert_eq!(step.exercised, 3);
    let decided: Vec<usize> = step.exercises.iter().map(|&(p, _)| p).collect();
    assert_eq!(decided, vec![3, 5, 6]);
    for (&(_, cf), want) in step.exercises.iter().zip([0.13, 0.33, 0.26]) {
        assert_abs_diff_eq!(cf, want, epsilon = 1e-12);
    }

    // the undiscounted target gives the textbook fit scaled by e^{0.06}
    let fit = step.fit.as_ref().unwrap();
    let expected = [0.03901, 0.04874, 0.12479, 0.16137, 0.16609];
    for (got, want) in fit.fitted_values.iter().zip(expected) {
        assert_abs_diff_eq!(got * 1.10, want, epsilon = 2e-4);
    }

    let first = &result.steps[1];
    assert_eq!(first.row, 1);
    assert_eq!(first.in_the_money, 5);
    assert_eq!(first.exercised, 4);
    let decided: Vec<usize> = first.exercises.iter().map(|&(p, _)| p).collect();
    assert_eq!(decided, vec![3, 5, 6, 7]);
}

// ─── Simulated paths ──────────────────────────────────────────────────────────

#[test]
fn american_put_dominates_european_on_shared_paths() {
    init_tracing();
    let (spot, strike, r, sigma, horizon) = (36.0, 40.0, 0.06, 0.2, 1.0);
    let paths = simulate_gbm(spot, r, sigma, 10_000, 50, horizon, &mut seeded_rng(42)).unwrap();

    let european = simulated_european(&paths, Payoff::Put, strike, r, horizon).unwrap();
    let american =
        LsmPricer::from_settings(Payoff::Put, strike, r, horizon, &LsmSettings::default())
            .price(&paths)
            .unwrap();

    assert!(
        american.value() >= european.value - 0.02,
        "american {} < european {}",
        american.value(),
        european.value
    );
    assert!(american.value() < 4.7, "american put too rich: {}", american.value());
    assert_abs_diff_eq!(european.value, 3.844, epsilon = 0.15);
    assert_at_most_one_exercise(&american);
}

#[test]
fn one_exercise_per_path_across_seeds() {
    for seed in 1..=5 {
        let paths = simulate_gbm(40.0, 0.06, 0.4, 500, 20, 2.0, &mut seeded_rng(seed)).unwrap();
        let result = LsmPricer::new(Payoff::Put, 40.0, 0.06, 2.0, PowerBasis::default())
            .price(&paths)
            .unwrap();
        assert_eq!(result.cash_flows.len(), 20);
        assert_at_most_one_exercise(&result);
        assert!(result.value() > 0.0);
    }
}
