use growth_core::{ZScoreArguments, ZScoreFunction, ZScoreResolver};
use growth_model::{MALE_CODES, Sex, ZScoreError};
use growth_standards::default_table;
use proptest::prelude::*;

fn any_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

proptest! {
    #[test]
    fn fewer_than_three_arguments_always_fail(arguments in prop::collection::vec(".*", 0..3)) {
        let err = ZScoreArguments::parse(arguments.as_slice()).unwrap_err();
        prop_assert_eq!(err, ZScoreError::TooFewArguments { found: arguments.len() });
    }

    #[test]
    fn non_numeric_age_or_weight_fails(text in "[a-zA-Z .]{1,8}", age_slot in any::<bool>()) {
        let arguments = if age_slot {
            vec![text.clone(), "7".to_string(), String::new(), "M".to_string()]
        } else {
            vec!["6".to_string(), text.clone(), String::new(), "M".to_string()]
        };
        let err = ZScoreArguments::parse(arguments.as_slice()).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }

    #[test]
    fn unknown_codes_resolve_as_female(code in ".*") {
        prop_assume!(!MALE_CODES.contains(&code.as_str()));
        let parsed = ZScoreArguments::parse(&["6", "7", "", code.as_str()]).unwrap();
        prop_assert_eq!(parsed.sex, Sex::Female);
    }

    #[test]
    fn male_codes_resolve_as_male(index in 0..MALE_CODES.len()) {
        let parsed = ZScoreArguments::parse(&["6", "7", "", MALE_CODES[index]]).unwrap();
        prop_assert_eq!(parsed.sex, Sex::Male);
    }

    #[test]
    fn tabulated_weights_resolve_exactly(age in 0u8..=60, sex in any_sex(), index in 0usize..7) {
        let row = default_table().lookup(sex, age).unwrap();
        let point = row.points()[index];
        let sign = (index as i32 - 3).signum();
        let score = ZScoreResolver::default().resolve(age, point.weight, sex).unwrap();
        prop_assert_eq!(score.to_string(), (i32::from(point.sd()) * sign).to_string());
    }

    #[test]
    fn evaluation_is_deterministic(age in 0u8..=60, weight in 0u8..=40, male in any::<bool>()) {
        let function = ZScoreFunction::default();
        let sex = if male { "M" } else { "F" };
        let arguments = [age.to_string(), weight.to_string(), String::new(), sex.to_string()];
        let first = function.evaluate_arguments(&arguments);
        let second = function.evaluate_arguments(&arguments);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sign_follows_median(age in 0u8..=60, sex in any_sex(), weight in 3u8..=30) {
        let row = default_table().lookup(sex, age).unwrap();
        let weight = f32::from(weight);
        prop_assume!(weight > row.lowest() && weight <= row.highest());
        let value = ZScoreResolver::default().resolve(age, weight, sex).unwrap().value();
        if weight > row.median() {
            prop_assert!(value > 0.0);
        } else if weight < row.median() {
            prop_assert!(value < 0.0);
        } else {
            prop_assert_eq!(value, 0.0);
        }
    }
}
