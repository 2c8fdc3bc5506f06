use growth_model::{MEDIAN_INDEX, Sex};
use growth_standards::default_table;
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_row_is_sorted_with_median_in_the_middle(age in 0u8..=60, male in any::<bool>()) {
        let sex = if male { Sex::Male } else { Sex::Female };
        let row = default_table().lookup(sex, age).unwrap();
        let weights = row.weights();
        prop_assert!(weights.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(row.median(), weights[MEDIAN_INDEX]);
    }

    #[test]
    fn ages_past_five_years_are_missing(age in 61u8..=u8::MAX) {
        prop_assert!(default_table().lookup(Sex::Male, age).unwrap_err().is_lookup());
        prop_assert!(default_table().lookup(Sex::Female, age).unwrap_err().is_lookup());
    }
}
