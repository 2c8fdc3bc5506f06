//! End-to-end `d2:zScore` behaviour against inline and embedded tables.

use growth_core::{
    BracketStrategy, SupplementaryData, ValueMap, ZScore, ZScoreFunction,
    ZScoreResolver, default_registry,
};
use growth_model::{ErrorKind, Sex, ZScoreError};
use growth_standards::ReferenceTable;

const HEADER: &str = "Month,SD3neg,SD2neg,SD1neg,SD0,SD1,SD2,SD3\n";

/// Integer weights so that exact matches are reachable through the
/// string arguments.
fn sample_table() -> ReferenceTable {
    let boys = format!("{HEADER}6,5,6,7,8,9,10,12\n");
    let girls = format!("{HEADER}6,4,5,6,7,9,11,13\n");
    ReferenceTable::from_csv(&boys, &girls).expect("sample tables")
}

fn evaluate(table: &ReferenceTable, arguments: &[&str]) -> Result<String, ZScoreError> {
    ZScoreFunction::new(table).evaluate_arguments(arguments)
}

#[test]
fn median_weight_is_zero() {
    let table = sample_table();
    assert_eq!(evaluate(&table, &["6", "8", "", "M"]).unwrap(), "0");
    assert_eq!(evaluate(&table, &["6", "7", "", "F"]).unwrap(), "0");
}

#[test]
fn tabulated_weights_return_signed_sd() {
    let table = sample_table();
    let expected = [("5", "-3"), ("6", "-2"), ("7", "-1"), ("9", "1"), ("10", "2"), ("12", "3")];
    for (weight, band) in expected {
        assert_eq!(evaluate(&table, &["6", weight, "", "male"]).unwrap(), band, "{weight}");
    }
}

#[test]
fn sex_code_selects_table() {
    let table = sample_table();
    // 7 kg is the boys' -1 curve and the girls' median
    assert_eq!(evaluate(&table, &["6", "7", "", "M"]).unwrap(), "-1");
    assert_eq!(evaluate(&table, &["6", "7", "", "F"]).unwrap(), "0");
    assert_eq!(evaluate(&table, &["6", "7", "", "female"]).unwrap(), "0");
    assert_eq!(evaluate(&table, &["6", "7", "", "2"]).unwrap(), "0");
    assert_eq!(evaluate(&table, &["6", "7", "", ""]).unwrap(), "0");
    assert_eq!(evaluate(&table, &["6", "7", "", "false"]).unwrap(), "-1");
    assert_eq!(evaluate(&table, &["6", "7", "", "0"]).unwrap(), "-1");
}

#[test]
fn between_curves_uses_legacy_interpolation() {
    let table = sample_table();
    // girls: lower 9 kg (+1), upper anchor 13 kg (row maximum)
    let expected = 1.0 + (9.0f32 - 10.0) / (9.0f32 - 13.0);
    assert_eq!(
        evaluate(&table, &["6", "10", "", "F"]).unwrap(),
        expected.to_string()
    );
    // boys: lower 10 kg (+2), upper anchor 12 kg
    assert_eq!(evaluate(&table, &["6", "11", "", "M"]).unwrap(), "2.5");
}

#[test]
fn nearest_strategy_is_opt_in() {
    let table = sample_table();
    let function = ZScoreFunction::new(&table).with_strategy(BracketStrategy::Nearest);
    // girls: halfway between +1 (9 kg) and +2 (11 kg)
    assert_eq!(function.evaluate_arguments(&["6", "10", "", "F"]).unwrap(), "1.5");
    assert_eq!(function.resolver().strategy(), BracketStrategy::Nearest);
}

#[test]
fn weight_below_row_fails_with_lookup_error() {
    let table = sample_table();
    let err = evaluate(&table, &["6", "3", "", "M"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}

#[test]
fn uncovered_age_fails_with_lookup_error() {
    let table = sample_table();
    let err = evaluate(&table, &["100", "8", "", "M"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);

    let resolver = ZScoreResolver::new(&table);
    let err = resolver.resolve(200, 8.0, Sex::Male).unwrap_err();
    assert!(matches!(err, ZScoreError::MissingRow { key } if key.age == 200));
}

#[test]
fn out_of_byte_range_age_is_invalid_argument() {
    let table = sample_table();
    let err = evaluate(&table, &["200", "8", "", "M"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn embedded_tables_through_default_registry() {
    let function = default_registry().get("d2:zScore").expect("registered");
    let arguments: Vec<String> = ["6", "8", "", "M"].iter().map(|s| s.to_string()).collect();
    let result = function
        .evaluate(&arguments, &ValueMap::new(), &SupplementaryData::new())
        .expect("evaluate");
    // boys at 6 months: lower anchor is the 7.9 kg median, upper the 10.9 kg maximum
    let expected = 0.0 + (7.9f32 - 8.0) / (7.9f32 - 10.9);
    assert_eq!(result, expected.to_string());
    assert!(result.parse::<f32>().unwrap() > 0.0);
}

#[test]
fn typed_resolver_reports_exactness() {
    let table = sample_table();
    let resolver = ZScoreResolver::new(&table);
    assert_eq!(resolver.resolve(6, 12.0, Sex::Male).unwrap(), ZScore::Exact(3));
    assert!(!resolver.resolve(6, 11.0, Sex::Male).unwrap().is_exact());
}

#[test]
fn shared_table_resolves_from_many_threads() {
    let expected = ZScoreFunction::default()
        .evaluate_arguments(&["12", "10", "", "M"])
        .unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    ZScoreFunction::default()
                        .evaluate_arguments(&["12", "10", "", "M"])
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
