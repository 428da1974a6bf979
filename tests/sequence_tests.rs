#![cfg(feature = "sequence")]
//! Example-based tests for sequence operations.
//!
//! These tests exercise the public surface the way a caller would, through
//! the prelude, on `Vec`, arrays and slices.

use herd::prelude::*;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Animal {
    name: &'static str,
    legs: u8,
}

const fn animal(name: &'static str, legs: u8) -> Animal {
    Animal { name, legs }
}

fn zoo() -> Vec<Animal> {
    vec![
        animal("cat", 4),
        animal("emu", 2),
        animal("dog", 4),
        animal("ant", 6),
        animal("owl", 2),
    ]
}

// =============================================================================
// filter / map / reduce
// =============================================================================

#[rstest]
fn test_filter_keeps_positive() {
    assert_eq!(vec![1, -1, -3, 4].filter(|n| *n > 0), vec![1, 4]);
}

#[rstest]
fn test_reduce_sums() {
    assert_eq!(vec![1, -1, -2, 4].reduce(0, |sum, n| sum + n), 2);
}

#[rstest]
fn test_map_increments() {
    assert_eq!(vec![1, -1].map(|n| Some(n + 1)), vec![2, 0]);
}

#[rstest]
fn test_map_to_different_type_drops_absent() {
    let names = zoo().map(|animal| (animal.legs == 4).then(|| animal.name.to_uppercase()));
    assert_eq!(names, vec!["CAT".to_string(), "DOG".to_string()]);
}

#[rstest]
fn test_reduce_into_other_accumulator() {
    let total_legs = zoo().reduce(0_u32, |total, animal| total + u32::from(animal.legs));
    assert_eq!(total_legs, 18);
}

// =============================================================================
// Receiver is never mutated
// =============================================================================

#[rstest]
fn test_operations_leave_receiver_unchanged() {
    let original = zoo();
    let animals = zoo();

    let _ = animals.filter(|animal| animal.legs > 2);
    let _ = animals.map(|animal| Some(animal.legs));
    let _ = animals.sorted_by(ByKey(|animal: &Animal| animal.legs));
    let _ = animals.reversed();
    let _ = animals.distinct();
    let _ = animals.partition(2);
    let _ = animals.partition_by(|animal| animal.legs);
    let _ = animals.group_by(|animal| animal.legs);
    let _ = animals.maximum_by(ByKey(|animal: &Animal| animal.legs));

    assert_eq!(animals, original);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_sorted_by_key_is_stable() {
    let sorted: Vec<&str> = zoo()
        .sorted_by(ByKey(|animal: &Animal| animal.legs))
        .map(|animal| Some(animal.name));
    assert_eq!(sorted, vec!["emu", "owl", "cat", "dog", "ant"]);
}

#[rstest]
fn test_sorted_by_reversed_key_is_stable() {
    let sorted: Vec<&str> = zoo()
        .sorted_by(ByKey(|animal: &Animal| animal.legs).reverse())
        .map(|animal| Some(animal.name));
    assert_eq!(sorted, vec!["ant", "cat", "dog", "emu", "owl"]);
}

#[rstest]
fn test_sorted_strings() {
    assert_eq!(["pear", "apple", "fig"].sorted(), vec!["apple", "fig", "pear"]);
}

#[rstest]
fn test_reversed_slice() {
    let values = [1, 2, 3, 4, 5];
    assert_eq!(values[1..4].reversed(), vec![4, 3, 2]);
}

#[rstest]
fn test_distinct_of_structs() {
    let mut animals = zoo();
    animals.push(animal("cat", 4));
    assert_eq!(animals.distinct(), zoo());
}

#[rstest]
fn test_distinct_by_leg_count() {
    let names = zoo()
        .distinct_by(|animal| animal.legs)
        .map(|animal| Some(animal.name));
    assert_eq!(names, vec!["cat", "emu", "ant"]);
}

// =============================================================================
// Partitioning and grouping
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3, 4], 2, vec![vec![1, 2], vec![3, 4]])]
#[case(vec![1, 2, 3, 4, 5], 2, vec![vec![1, 2], vec![3, 4], vec![5]])]
fn test_partition(
    #[case] values: Vec<i32>,
    #[case] size: usize,
    #[case] expected: Vec<Vec<i32>>,
) {
    assert_eq!(values.partition(size), Ok(expected));
}

#[rstest]
fn test_partition_zero_is_invalid_argument() {
    let error = vec![1, 2, 3].partition(0).unwrap_err();
    assert_eq!(error, OperationError::InvalidPartitionSize { size: 0 });
    assert_eq!(
        error.to_string(),
        "partition: size must be greater than 0, got 0"
    );
}

#[rstest]
fn test_partition_by_length() {
    let words = vec!["bob", "cat", "mat", "sing", "song"];
    assert_eq!(
        words.partition_by(|word| word.len()),
        vec![vec!["bob", "cat", "mat"], vec!["sing", "song"]]
    );
}

#[rstest]
fn test_group_by_length() {
    let words = vec!["bob", "mat", "sing", "song"];
    let groups = words.group_by(|word| word.len());

    let mut keys: Vec<usize> = groups.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![3, 4]);
    assert_eq!(groups[&3], vec!["bob", "mat"]);
    assert_eq!(groups[&4], vec!["sing", "song"]);
}

#[rstest]
fn test_group_by_struct_field() {
    let groups = zoo().group_by(|animal| animal.legs);
    assert_eq!(groups[&2], vec![animal("emu", 2), animal("owl", 2)]);
    assert_eq!(groups[&4], vec![animal("cat", 4), animal("dog", 4)]);
    assert_eq!(groups[&6], vec![animal("ant", 6)]);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case(vec![1, -1, 2, 4], true, false)]
#[case(vec![-1, -2], true, true)]
#[case(vec![1, 2], false, false)]
#[case(vec![], false, true)]
fn test_any_every(#[case] values: Vec<i32>, #[case] any: bool, #[case] every: bool) {
    assert_eq!(values.any(|n| *n < 0), any);
    assert_eq!(values.every(|n| *n < 0), every);
}

#[rstest]
fn test_find_first_in_order() {
    let found = zoo().find(|animal| animal.legs == 2).map(|animal| animal.name);
    assert_eq!(found, Some("emu"));
}

#[rstest]
fn test_find_does_not_evaluate_past_match() {
    let evaluated = Cell::new(0);
    let values = [3, 8, 1, 9];
    let found = values.find(|n| {
        evaluated.set(evaluated.get() + 1);
        *n > 5
    });
    assert_eq!(found, Some(&8));
    assert_eq!(evaluated.get(), 2);
}

#[rstest]
fn test_extrema_on_strings() {
    let words = vec!["pear", "apple", "fig"];
    assert_eq!(words.maximum(), Some(&"pear"));
    assert_eq!(words.minimum(), Some(&"apple"));
}

#[rstest]
fn test_extrema_on_empty_are_absent() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(empty.maximum(), None);
    assert_eq!(empty.minimum(), None);
}

#[rstest]
fn test_typed_extrema() {
    let values = vec![7_i32, -12, 40];
    assert_eq!(values.imax(), Ok(40));
    assert_eq!(values.imin(), Ok(-12));
    assert_eq!(values.fmax(), Ok(40.0));
    assert_eq!(values.fmin(), Ok(-12.0));
}

#[rstest]
fn test_typed_extrema_on_empty_fail_loudly() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(
        empty.imax(),
        Err(OperationError::EmptyContainer { operation: "imax" })
    );
    assert_eq!(
        empty.imin(),
        Err(OperationError::EmptyContainer { operation: "imin" })
    );
    assert_eq!(
        empty.fmax(),
        Err(OperationError::EmptyContainer { operation: "fmax" })
    );
    assert_eq!(
        empty.fmin(),
        Err(OperationError::EmptyContainer { operation: "fmin" })
    );
}

// =============================================================================
// Fallible callbacks
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct ParseFailure(String);

#[rstest]
fn test_try_map_propagates_callback_error() {
    let inputs = vec!["4", "four", "5"];
    let result = inputs.try_map(|text| {
        text.parse::<i32>()
            .map(Some)
            .map_err(|_| ParseFailure((*text).to_string()))
    });
    assert_eq!(result, Err(ParseFailure("four".to_string())));
}

#[rstest]
fn test_try_filter_and_try_reduce_succeed_without_errors() {
    let inputs = vec![1, 2, 3, 4];
    let even: Result<Vec<i32>, ParseFailure> = inputs.try_filter(|n| Ok(n % 2 == 0));
    assert_eq!(even, Ok(vec![2, 4]));

    let product: Result<i32, ParseFailure> = inputs.try_reduce(1, |product, n| Ok(product * n));
    assert_eq!(product, Ok(24));
}

#[rstest]
#[should_panic(expected = "callback failed")]
fn test_panicking_callback_propagates() {
    let _ = vec![1, 2, 3].filter(|_| panic!("callback failed"));
}
