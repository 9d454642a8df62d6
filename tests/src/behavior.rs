//! Tests of every check through the public interface, succeeding and failing.

use assertions::{
    all_not_null, between, copy_if_all_not_null, copy_if_not_empty_all_not_empty,
    copy_if_not_empty_all_not_null, copy_set_if_all_not_null,
    copy_set_if_not_empty_all_not_empty, copy_set_if_not_empty_all_not_null, equal, equal_opt,
    fals, greater, less, not_empty, not_empty_all_not_empty, not_empty_all_not_null, not_equal,
    not_equal_opt, not_greater, not_less, not_null, not_same_value, present, same_value, tru,
    Result, ToArg,
};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::{collections::HashSet, fmt::Debug};

/// Unwraps a usage error, making sure it names the label `x`.
#[track_caller]
fn usage<T: Debug>(result: Result<T>) -> String {
    let error = result.unwrap_err();

    assert!(error.is_usage(), "expected a usage error, got {:?}", error);
    assert!(error.message().contains("\"x\""), "label missing in {:?}", error);
    error.message().to_owned()
}

/// Unwraps a violation, making sure it names the label `x`.
#[track_caller]
fn violation<T: Debug>(result: Result<T>) -> String {
    let error = result.unwrap_err();

    assert!(error.is_violation(), "expected a violation, got {:?}", error);
    assert!(error.message().contains("\"x\""), "label missing in {:?}", error);
    error.message().to_owned()
}

fn decimal(text: &str) -> BigDecimal {
    text.parse().unwrap()
}

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|text| text.to_string()).collect()
}

#[test]
fn not_null_succeeds() {
    let input = String::from("a");
    let address = input.as_ptr();

    let result = not_null(Some(input), "x").unwrap();

    assert_eq!(result.as_ptr(), address);
}

#[test]
fn not_null_fails() {
    usage(not_null(None::<String>, "x"));
}

#[test]
fn empty_labels_fail_first() {
    for error in [
        not_null(None::<u8>, "").unwrap_err(),
        greater(1, 2, "").unwrap_err(),
        not_empty("", "").unwrap_err(),
        all_not_null(vec![None::<u8>], "").unwrap_err(),
        equal(1, 2, "").unwrap_err(),
    ] {
        assert!(error.is_usage());
        assert!(error.message().contains("This is about the name of the"));
    }
}

#[test]
fn tru_succeeds() {
    assert_eq!(tru(true, "x", &[]), Ok(()));
    assert_eq!(tru(1 + 1 == 2, "%s", &["unused on success".to_arg()]), Ok(()));
}

#[test]
fn tru_fails() {
    let error = tru(false, "x %s %s", &["y".to_arg(), "z".to_arg()]).unwrap_err();

    assert!(error.is_violation());
    assert_eq!(error.message(), "x y z");
}

#[test]
fn fals_succeeds() {
    assert_eq!(fals(false, "x", &[]), Ok(()));
}

#[test]
fn fals_fails() {
    let error = fals(true, "x %s %s", &["y".to_arg(), "z".to_arg()]).unwrap_err();

    assert!(error.is_violation());
    assert_eq!(error.message(), "x y z");
}

#[test]
fn equal_succeeds() {
    let input = String::from("a");
    assert_eq!(equal(input.as_str(), "a", "x"), Ok("a"));
    assert_eq!(equal(1i64, 1i64, "x"), Ok(1));
    assert_eq!(equal(1.5, 1.5, "x"), Ok(1.5));
    assert_eq!(equal_opt(None::<&str>, None::<&str>, "x"), Ok(None));
}

#[test]
fn equal_fails() {
    let message = violation(equal("a", "b", "x"));
    assert!(message.contains("must be equal"));
    assert!(message.contains('b'));

    violation(equal(1, 2, "x"));
    violation(equal(1.000001, 1.000002, "x"));

    for result in [
        equal_opt(None::<&str>, Some("b"), "x"),
        equal_opt(Some("a"), None::<&str>, "x"),
    ] {
        let message = violation(result);
        assert!(message.contains("must be equal"));
    }
}

#[test]
fn not_equal_succeeds() {
    assert_eq!(not_equal("a", "b", "x"), Ok("a"));
    assert_eq!(not_equal(1.000001, 1.000002, "x"), Ok(1.000001));
    assert_eq!(not_equal_opt(Some("a"), None::<&str>, "x"), Ok(Some("a")));
    assert_eq!(not_equal_opt(None::<&str>, Some("b"), "x"), Ok(None));
}

#[test]
fn not_equal_fails() {
    violation(not_equal("a", "a", "x"));
    violation(not_equal(1, 1, "x"));
    violation(not_equal(1.000001, 1.000001, "x"));
    violation(not_equal_opt(None::<&str>, None::<&str>, "x"));
}

#[test]
fn string_not_empty_succeeds() {
    let input = String::from("a");

    let result = not_empty(&input, "x").unwrap();

    assert!(std::ptr::eq(result, &input));
}

#[test]
fn string_not_empty_fails() {
    usage(not_empty(None::<&str>, "x"));
    violation(not_empty("", "x"));
}

#[test]
fn present_succeeds() {
    assert_eq!(present(Some("a"), "x"), Ok("a"));
}

#[test]
fn present_fails() {
    violation(present(None::<&str>, "x"));
}

#[test]
fn same_value_succeeds() {
    let input = decimal("1.5");

    let result = same_value(&input, decimal("1.500"), "x").unwrap();

    assert!(std::ptr::eq(result, &input));
    assert_eq!(same_value(1i64, 1i64, "x"), Ok(1));
}

#[test]
fn same_value_fails() {
    violation(same_value(decimal("1.000001"), decimal("1.000002"), "x"));
    violation(same_value(1.000001, 1.000002, "x"));
}

#[test]
fn not_same_value_succeeds() {
    let input = decimal("1.5");

    assert!(std::ptr::eq(
        not_same_value(&input, decimal("1.6"), "x").unwrap(),
        &input
    ));
}

#[test]
fn not_same_value_fails() {
    violation(not_same_value(decimal("1.000001"), decimal("1.000001"), "x"));
}

#[test]
fn greater_succeeds() {
    assert_eq!(greater(2i64, 1i64, "x"), Ok(2));
    assert_eq!(greater(1.0000002, 1.0000001, "x"), Ok(1.0000002));

    let big = BigInt::from(2);
    assert!(std::ptr::eq(
        greater(&big, BigInt::from(1), "x").unwrap(),
        &big
    ));

    let input = decimal("1.0000002");
    assert!(std::ptr::eq(
        greater(&input, decimal("1.0000001000"), "x").unwrap(),
        &input
    ));
}

#[test]
fn greater_fails() {
    violation(greater(1, 1, "x"));
    violation(greater(1.000001, 1.000001, "x"));
    violation(greater(BigInt::from(1), BigInt::from(1), "x"));
    violation(greater(decimal("1.000001000"), decimal("1.000001"), "x"));
}

#[test]
fn not_greater_succeeds() {
    assert_eq!(not_greater(1, 1, "x"), Ok(1));
    assert_eq!(not_greater(1.0000001, 1.0000002, "x"), Ok(1.0000001));
    assert!(not_greater(BigInt::from(1), BigInt::from(1), "x").is_ok());
    assert!(not_greater(decimal("1.000001000"), decimal("1.000001"), "x").is_ok());
}

#[test]
fn not_greater_fails() {
    violation(not_greater(2, 1, "x"));
    violation(not_greater(1.0000002, 1.0000001, "x"));
    violation(not_greater(BigInt::from(2), BigInt::from(1), "x"));
    violation(not_greater(decimal("1.0000002"), decimal("1.0000001000"), "x"));
}

#[test]
fn less_succeeds() {
    assert_eq!(less(1, 2, "x"), Ok(1));
    assert_eq!(less(1.0000001, 1.0000002, "x"), Ok(1.0000001));
    assert!(less(BigInt::from(1), BigInt::from(2), "x").is_ok());
    assert!(less(decimal("1.0000001000"), decimal("1.0000002"), "x").is_ok());
}

#[test]
fn less_fails() {
    violation(less(1, 1, "x"));
    violation(less(1.000001, 1.000001, "x"));
    violation(less(BigInt::from(1), BigInt::from(1), "x"));
    violation(less(decimal("1.000001"), decimal("1.000001000"), "x"));
}

#[test]
fn not_less_succeeds() {
    assert_eq!(not_less(1, 1, "x"), Ok(1));
    assert_eq!(not_less(1.0000002, 1.0000001, "x"), Ok(1.0000002));
    assert!(not_less(BigInt::from(1), BigInt::from(1), "x").is_ok());
    assert!(not_less(decimal("1.000001"), decimal("1.000001000"), "x").is_ok());
}

#[test]
fn not_less_fails() {
    violation(not_less(1, 2, "x"));
    violation(not_less(1.0000001, 1.0000002, "x"));
    violation(not_less(BigInt::from(1), BigInt::from(2), "x"));
    violation(not_less(decimal("1.0000001000"), decimal("1.0000002"), "x"));
}

#[test]
fn between_succeeds() {
    for value in 1..=3 {
        assert_eq!(between(value, 1, 3, "x"), Ok(value));
    }

    assert!(between(1.5, 1.5, 1.5, "x").is_ok());
    assert!(between(BigInt::from(2), BigInt::from(1), BigInt::from(3), "x").is_ok());
    assert!(between(decimal("1.50"), decimal("1.5"), decimal("1.500"), "x").is_ok());
}

#[test]
fn between_fails() {
    violation(between(0, 1, 3, "x"));
    violation(between(4, 1, 3, "x"));
    violation(between(1.4999, 1.5, 2.0, "x"));
    violation(between(decimal("1.51"), decimal("1.0"), decimal("1.5"), "x"));
}

#[test]
fn ordering_checks_reject_absent_operands() {
    usage(greater(None::<i32>, 1, "x"));
    usage(not_greater(1, None::<i32>, "x"));
    usage(same_value(None::<BigDecimal>, decimal("1"), "x"));
    usage(between(2, None::<i32>, 3, "x"));
    usage(between(2, 1, None::<i32>, "x"));
}

#[test]
fn collection_not_empty_succeeds() {
    let input = vec!["a"];

    assert!(std::ptr::eq(not_empty(&input, "x").unwrap(), &input));
}

#[test]
fn collection_not_empty_fails() {
    usage(not_empty(None::<Vec<u8>>, "x"));
    violation(not_empty(Vec::<u8>::new(), "x"));
    violation(not_empty(HashSet::<u8>::new(), "x"));
}

#[test]
fn all_not_null_succeeds() {
    let input = vec![Some("a"), Some("")];
    assert!(std::ptr::eq(all_not_null(&input, "x").unwrap(), &input));

    assert!(all_not_null(Vec::<Option<u8>>::new(), "x").is_ok());
}

#[test]
fn all_not_null_fails() {
    usage(all_not_null(None::<Vec<Option<u8>>>, "x"));
    usage(all_not_null(vec![Some("a"), None], "x"));
}

#[test]
fn not_empty_all_not_null_succeeds() {
    let input = vec![Some("a"), Some("")];

    assert!(std::ptr::eq(
        not_empty_all_not_null(&input, "x").unwrap(),
        &input
    ));
}

#[test]
fn not_empty_all_not_null_fails() {
    usage(not_empty_all_not_null(None::<Vec<Option<u8>>>, "x"));
    violation(not_empty_all_not_null(Vec::<Option<u8>>::new(), "x"));
    usage(not_empty_all_not_null(vec![Some("a"), None], "x"));
}

#[test]
fn not_empty_all_not_empty_succeeds() {
    let input = vec!["a", "b"];

    assert!(std::ptr::eq(
        not_empty_all_not_empty(&input, "x").unwrap(),
        &input
    ));
}

#[test]
fn not_empty_all_not_empty_fails() {
    usage(not_empty_all_not_empty(None::<Vec<String>>, "x"));
    violation(not_empty_all_not_empty(Vec::<String>::new(), "x"));
    usage(not_empty_all_not_empty(vec![Some("a"), None], "x"));
    violation(not_empty_all_not_empty(vec!["a", ""], "x"));
}

#[test]
fn copy_if_all_not_null_succeeds() {
    let list: Vec<Option<String>> = vec![];
    assert_eq!(copy_if_all_not_null(&list, "x"), Ok(vec![]));

    let list = vec![Some(String::from("a")), Some(String::new())];
    let copy = copy_if_all_not_null(&list, "x").unwrap();
    assert_eq!(copy, strings(&["a", ""]));
    assert_ne!(copy.as_ptr() as *const (), list.as_ptr() as *const ());

    let set: HashSet<Option<&str>> = [Some("a"), Some("")].into_iter().collect();
    let copy = copy_set_if_all_not_null(&set, "x").unwrap();
    assert_eq!(copy, ["a", ""].into_iter().collect::<HashSet<_>>());
}

#[test]
fn copy_if_all_not_null_fails() {
    usage(copy_if_all_not_null(&None::<Vec<Option<u8>>>, "x"));
    usage(copy_set_if_all_not_null(&None::<HashSet<Option<u8>>>, "x"));
    usage(copy_if_all_not_null(&[Some("a"), None], "x"));

    let set: HashSet<Option<&str>> = [Some("a"), None].into_iter().collect();
    usage(copy_set_if_all_not_null(&set, "x"));
}

#[test]
fn copy_if_not_empty_all_not_null_succeeds() {
    let list = [Some("a"), Some("")];
    assert_eq!(copy_if_not_empty_all_not_null(&list, "x"), Ok(vec!["a", ""]));

    let set: HashSet<Option<&str>> = [Some("a"), Some("")].into_iter().collect();
    assert_eq!(
        copy_set_if_not_empty_all_not_null(&set, "x"),
        Ok(["a", ""].into_iter().collect::<HashSet<_>>())
    );
}

#[test]
fn copy_if_not_empty_all_not_null_fails() {
    usage(copy_if_not_empty_all_not_null(&None::<Vec<Option<u8>>>, "x"));
    violation(copy_if_not_empty_all_not_null(&Vec::<Option<u8>>::new(), "x"));
    usage(copy_if_not_empty_all_not_null(&[Some("a"), None], "x"));

    violation(copy_set_if_not_empty_all_not_null(&HashSet::<Option<u8>>::new(), "x"));
    let set: HashSet<Option<&str>> = [Some("a"), None].into_iter().collect();
    usage(copy_set_if_not_empty_all_not_null(&set, "x"));
}

#[test]
fn copy_if_not_empty_all_not_empty_succeeds() {
    let list = vec!["a", "b"];
    assert_eq!(copy_if_not_empty_all_not_empty(&list, "x"), Ok(strings(&["a", "b"])));

    let set: HashSet<String> = strings(&["a", "b"]).into_iter().collect();
    assert_eq!(copy_set_if_not_empty_all_not_empty(&set, "x"), Ok(set.clone()));
}

#[test]
fn copy_if_not_empty_all_not_empty_fails() {
    usage(copy_if_not_empty_all_not_empty(&None::<Vec<String>>, "x"));
    violation(copy_if_not_empty_all_not_empty(&Vec::<String>::new(), "x"));
    usage(copy_if_not_empty_all_not_empty(&[Some("a"), None], "x"));
    violation(copy_if_not_empty_all_not_empty(&["a", ""], "x"));

    let set: HashSet<&str> = ["a", ""].into_iter().collect();
    violation(copy_set_if_not_empty_all_not_empty(&set, "x"));
    violation(copy_set_if_not_empty_all_not_empty(&HashSet::<String>::new(), "x"));
}
