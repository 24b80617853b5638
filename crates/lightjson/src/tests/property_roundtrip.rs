use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{Value, parse, stringify};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: the serializer's output parses back to an equal tree.
#[test]
fn stringify_parse_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let text = stringify(&value);
        parse(&text).is_ok_and(|parsed| parsed == value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: serialization is canonical, so a second pass is a fixed point.
#[test]
fn stringify_is_idempotent_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let once = stringify(&value);
        match parse(&once) {
            Ok(parsed) => stringify(&parsed) == once,
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: clones are equal and independent of the original.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn clone_then_mutate_leaves_original(value: Value) -> bool {
    let before = stringify(&value);
    let mut copy = value.clone();
    let equal = copy == value;
    copy.set_null();
    equal && stringify(&value) == before
}

#[quickcheck]
fn display_matches_stringify(value: Value) -> bool {
    value.to_string() == stringify(&value)
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn strings_roundtrip(s: String) -> bool {
    let text = stringify(&Value::from(s.as_str()));
    parse(&text).is_ok_and(|v| v.get_string() == s)
}
