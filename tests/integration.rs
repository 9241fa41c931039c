//! End-to-end integration tests.

use exact_ks::{
    approximate_test, exact_test, CombinedSample, Error, KsTest, NoProgress, Source, TieHandling,
    CRITICAL_VALUE_5_PERCENT,
};
use num_rational::Ratio;

/// One X value below three Y values: C(4,3) = 4 meshings.
#[test]
fn single_x_example() {
    let sample = CombinedSample::from_samples(&[1.0], &[2.0, 3.0, 4.0]).unwrap();
    let result = KsTest::new(&sample)
        .perform_test_with(&mut NoProgress)
        .unwrap();

    // X at pooled position p gives statistic max(p, 3 - p): 3, 2, 2, 3.
    assert_eq!(result.total_meshings, 4);
    assert_eq!(result.observed_statistic, 3);
    let probs = result.distribution.probabilities().unwrap();
    assert_eq!(probs.len(), 2);
    assert_eq!(probs[&2], Ratio::new(1, 2));
    assert_eq!(probs[&3], Ratio::new(1, 2));
    assert_eq!(result.p_value, Ratio::new(1, 2));
}

/// Y entirely below X: C(7,3) = 35 meshings.
///
/// The observed partition reaches the largest possible statistic, 12. The
/// mirrored partition (X entirely below Y) reaches it too, so the exact
/// tail is 2/35.
#[test]
fn full_separation_example() {
    let result = exact_test(&[11.0, 12.0, 13.0, 14.0], &[5.0, 6.0, 7.0]).unwrap();

    assert_eq!(result.total_meshings, 35);
    assert_eq!(result.observed_statistic, 12);
    assert_eq!(result.factors.factor, 12);
    assert_eq!(
        result.distribution.probabilities().unwrap().keys().max(),
        Some(&12)
    );
    assert_eq!(result.distribution.counts().get(&12), Some(&2));
    assert_eq!(result.p_value, Ratio::new(2, 35));
    assert!(result.rejects_at(0.1));
    assert!(!result.rejects_at(0.05));
}

/// Tied values across samples, counted both ways.
#[test]
fn tied_values_example() {
    let sample = CombinedSample::from_samples(&[5.0, 10.0], &[2.0, 2.0, 10.0]).unwrap();

    for ties in [TieHandling::Positional, TieHandling::Grouped] {
        let test = KsTest::new(&sample).ties(ties);
        let result = test.perform_test_with(&mut NoProgress).unwrap();
        assert_eq!(result.observed_statistic, 4, "{ties:?}");
        assert_eq!(result.total_meshings, 10);
        assert_eq!(
            result.distribution.total_probability().unwrap(),
            Ratio::from_integer(1)
        );
        assert!(result.p_value <= Ratio::from_integer(1));
    }
}

#[test]
fn approximate_example() {
    let approx = approximate_test(&[11.0, 12.0, 13.0, 14.0], &[5.0, 6.0, 7.0]).unwrap();
    assert_eq!(approx.observed_statistic, 12);
    assert!((approx.approximate_statistic - 12.0 / 84.0_f64.sqrt()).abs() < 1e-12);
    assert_eq!(approx.critical_value, 1.358);
    assert_eq!(approx.critical_value, CRITICAL_VALUE_5_PERCENT);
}

#[test]
fn critical_value_does_not_vary() {
    let a = approximate_test(&[1.0], &[2.0]).unwrap();
    let b = approximate_test(&[1.0, 9.0, 4.0, 3.0, 2.0], &[0.5, 7.0]).unwrap();
    assert_eq!(a.critical_value, 1.358);
    assert_eq!(b.critical_value, 1.358);
}

#[test]
fn attribution_unchanged_after_test() {
    let sample = CombinedSample::from_samples(&[3.0, 1.0, 8.0], &[2.0, 9.0, 4.0, 5.0]).unwrap();
    let before = sample.attributions_copy();

    let test = KsTest::new(&sample);
    test.perform_test_with(&mut NoProgress).unwrap();
    assert_eq!(sample.attributions(), before.as_slice());

    // Also after a refused run.
    let refused = KsTest::new(&sample).max_meshings(1);
    assert!(matches!(
        refused.perform_test(),
        Err(Error::TooManyMeshings { meshings: 35, limit: 1 })
    ));
    assert_eq!(sample.attributions(), before.as_slice());
}

#[test]
fn observed_statistic_follows_attribution() {
    let mut sample = CombinedSample::from_samples(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
    assert_eq!(KsTest::new(&sample).observe().statistic, 2);

    sample
        .set_attributions(vec![Source::SampleX, Source::SampleY, Source::SampleX, Source::SampleY])
        .unwrap();
    assert_eq!(KsTest::new(&sample).observe().statistic, 1);
}

#[test]
fn invalid_inputs_fail_fast() {
    assert_eq!(
        exact_test(&[], &[1.0]).map(|r| r.p_value),
        Err(Error::EmptySample { sample: Source::SampleX })
    );
    assert_eq!(
        approximate_test(&[1.0], &[]).map(|r| r.critical_value),
        Err(Error::EmptySample { sample: Source::SampleY })
    );
    assert!(matches!(
        exact_test(&[f64::INFINITY], &[1.0]),
        Err(Error::NonFiniteValue { index: 0 })
    ));
}

#[test]
fn result_serialization() {
    let result = exact_test(&[1.0], &[2.0, 3.0, 4.0]).unwrap();
    let json = exact_ks::output::to_json(&result).expect("Should serialize");
    assert!(json.contains("observed_statistic"));
    assert!(json.contains("\"p_value\":[1,2]"));
}
