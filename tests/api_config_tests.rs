use std::collections::HashMap;

use filter_parity::prelude::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_builder_defaults() {
    let config = RunConfig::builder().build().unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.seed, None);
    assert!(!config.skip_plots);
    assert!(!config.cross_check);
    assert_eq!(config.bins, DEFAULT_BINS);
}

#[test]
fn test_builder_sets_every_field() {
    let config = RunConfig::builder()
        .seed(7)
        .skip_plots(true)
        .cross_check(true)
        .bins(256)
        .build()
        .unwrap();
    assert_eq!(config.seed, Some(7));
    assert!(config.skip_plots);
    assert!(config.cross_check);
    assert_eq!(config.bins, 256);
}

#[test]
fn test_builder_rejects_duplicates() {
    let err = RunConfig::builder().seed(1).seed(2).build().unwrap_err();
    assert_eq!(err, ParityError::DuplicateParameter { parameter: "seed" });

    let err = RunConfig::builder().bins(8).bins(16).build().unwrap_err();
    assert_eq!(err, ParityError::DuplicateParameter { parameter: "bins" });
}

#[test]
fn test_builder_rejects_zero_bins() {
    let err = RunConfig::builder().bins(0).build().unwrap_err();
    assert_eq!(err, ParityError::InvalidBins(0));
}

#[test]
fn test_from_vars_empty() {
    let config = RunConfig::from_vars(lookup(&[]));
    assert_eq!(config, RunConfig::default());
}

#[test]
fn test_from_vars_ci_skips_plots() {
    assert!(RunConfig::from_vars(lookup(&[(CI_VAR, "true")])).skip_plots);
    assert!(RunConfig::from_vars(lookup(&[(CI_VAR, "1")])).skip_plots);
    assert!(!RunConfig::from_vars(lookup(&[(CI_VAR, "")])).skip_plots);
}

#[test]
fn test_from_vars_seed() {
    let config = RunConfig::from_vars(lookup(&[(SEED_VAR, " 12345 ")]));
    assert_eq!(config.seed, Some(12345));

    let config = RunConfig::from_vars(lookup(&[(SEED_VAR, "not-a-number")]));
    assert_eq!(config.seed, None);
}
