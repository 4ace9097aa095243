//! Boundary cases: empty containers, every type-change pair, strict-vs-loose
//! number comparison, depth guard edges, strings with embedded
//! NUL/backslashes/UTF-8/control characters, and an overflowing array index
//! in a patch delta.

use jdp::options::DEFAULT_MAX_JSON_DEPTH;
use jdp::{diff, equal, patch, Options};
use serde_json::{json, Value};

#[test]
fn empty_object_and_empty_array_have_no_delta() {
    let opts = Options::strict();
    assert!(diff(&json!({}), &json!({}), &opts).is_none());
    assert!(diff(&json!([]), &json!([]), &opts).is_none());
}

#[test]
fn empty_object_against_nonempty_is_an_addition_delta() {
    let opts = Options::strict();
    let delta = diff(&json!({}), &json!({"a": 1}), &opts).unwrap();
    assert_eq!(delta, json!({"a": [1]}));
}

#[test]
fn empty_array_against_nonempty_emits_additions_from_zero() {
    let opts = Options::strict();
    let delta = diff(&json!([]), &json!([1, 2]), &opts).unwrap();
    assert_eq!(delta, json!({"0": [1], "1": [2], "_t": "a"}));
}

/// One representative value per JSON type tag.
fn sample_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", json!(null)),
        ("bool", json!(true)),
        ("number", json!(1)),
        ("string", json!("x")),
        ("array", json!([1])),
        ("object", json!({"k": 1})),
    ]
}

#[test]
fn every_type_change_pair_produces_a_change_delta_unless_equal() {
    let opts = Options::strict();
    let samples = sample_values();

    for (left_name, left) in &samples {
        for (right_name, right) in &samples {
            if left_name == right_name {
                continue; // same-tag pairs are exercised elsewhere; here we want cross-type only
            }
            let delta = diff(left, right, &opts)
                .unwrap_or_else(|| panic!("{left_name} -> {right_name} should not be equal"));
            assert_eq!(delta, json!([left, right]), "{left_name} -> {right_name}");

            let patched = patch(left, &delta, &opts).unwrap();
            assert!(equal(&patched, right, false), "{left_name} -> {right_name} round-trip");
        }
    }
}

#[test]
fn integer_and_float_forms_are_strict_equal_but_not_bit_distinct() {
    // 4 vs 4.0 parse to the same f64 bit pattern; both strict and loose
    // treat them as equal.
    let opts_strict = Options::strict();
    let opts_loose = Options::loose();
    assert!(diff(&json!(4), &json!(4.0), &opts_strict).is_none());
    assert!(diff(&json!(4), &json!(4.0), &opts_loose).is_none());
    assert!(equal(&json!(4), &json!(4.0), true));
    assert!(equal(&json!(4), &json!(4.0), false));
}

#[test]
fn strict_equality_distinguishes_near_but_unequal_numbers() {
    assert!(!equal(&json!(4), &json!(4.0000001), true));
    assert!(diff(&json!(4), &json!(4.0000001), &Options::strict()).is_some());
}

#[test]
fn loose_equality_tolerates_tiny_differences() {
    assert!(equal(&json!(4), &json!(4.0000000001), false));
    assert!(diff(&json!(4), &json!(4.0000000001), &Options::loose()).is_none());
}

fn nest(depth: usize) -> Value {
    let mut value = json!(0);
    for _ in 0..depth {
        value = json!({"n": value});
    }
    value
}

#[test]
fn diff_at_shallow_depth_succeeds_under_a_tight_budget() {
    let opts = Options {
        max_depth: 64,
        ..Options::strict()
    };
    let left = nest(3);
    let mut right = left.clone();
    // mutate the innermost leaf
    *right
        .pointer_mut("/n/n/n")
        .unwrap() = json!(1);

    let delta = diff(&left, &right, &opts).expect("shallow nesting fits the depth budget");
    let patched = patch(&left, &delta, &opts).unwrap();
    assert!(equal(&patched, &right, false));
}

#[test]
fn diff_beyond_the_depth_budget_returns_no_change_sentinel() {
    let opts = Options {
        max_depth: 4,
        ..Options::strict()
    };
    let left = nest(50);
    let mut right = left.clone();
    let mut ptr = String::new();
    for _ in 0..50 {
        ptr.push_str("/n");
    }
    *right.pointer_mut(&ptr).unwrap() = json!(1);

    // The two values are genuinely different, but recursion depth exceeds
    // the tiny budget before the differ can reach the differing leaf, so
    // diff degrades to the "no change" sentinel rather than panicking or
    // overflowing the stack.
    assert!(diff(&left, &right, &opts).is_none());
}

/// `nest(d)` wraps a leaf `d` levels deep, so the document's own depth
/// (counting the leaf node) is `d + 1`. These use the default budget
/// (no `max_depth` override) to cover the exact named edge: a document at
/// the default `MAX_JSON_DEPTH` still diffs, one level deeper does not.
#[test]
fn diff_at_exactly_the_default_depth_budget_still_succeeds() {
    let opts = Options::strict();
    let left = nest(DEFAULT_MAX_JSON_DEPTH - 1);
    let mut right = left.clone();
    let mut ptr = String::new();
    for _ in 0..DEFAULT_MAX_JSON_DEPTH - 1 {
        ptr.push_str("/n");
    }
    *right.pointer_mut(&ptr).unwrap() = json!(1);

    let delta = diff(&left, &right, &opts).expect("a document at exactly the depth budget should still diff");
    let patched = patch(&left, &delta, &opts).unwrap();
    assert!(equal(&patched, &right, false));
}

#[test]
fn diff_one_level_past_the_default_depth_budget_returns_no_change_sentinel() {
    let opts = Options::strict();
    let left = nest(DEFAULT_MAX_JSON_DEPTH);
    let mut right = left.clone();
    let mut ptr = String::new();
    for _ in 0..DEFAULT_MAX_JSON_DEPTH {
        ptr.push_str("/n");
    }
    *right.pointer_mut(&ptr).unwrap() = json!(1);

    assert!(diff(&left, &right, &opts).is_none());
}

#[test]
fn patch_beyond_the_depth_budget_returns_the_cannot_patch_sentinel() {
    let opts = Options {
        max_depth: 4,
        ..Options::strict()
    };
    let left = nest(50);
    let delta = json!({"n": {"n": {"n": {"n": {"n": [0, 1]}}}}});
    assert!(patch(&left, &delta, &opts).is_none());
}

#[test]
fn strings_with_embedded_nul_backslash_utf8_and_control_chars_round_trip() {
    let opts = Options::strict();
    let left = json!({"s": "plain"});
    let right = json!({"s": "a\u{0}b\\c\u{1F980}d\ne\tf"});
    assert!(!equal(&left, &right, true));

    let delta = diff(&left, &right, &opts).unwrap();
    assert_eq!(delta, json!({"s": ["plain", "a\u{0}b\\c\u{1F980}d\ne\tf"]}));

    let patched = patch(&left, &delta, &opts).unwrap();
    assert_eq!(patched, right);
}

#[test]
fn nul_byte_inside_a_string_is_not_a_terminator() {
    let s = "abc\u{0}def";
    assert_eq!(s.len(), 7);
    let opts = Options::strict();
    let delta = diff(&json!(s), &json!("other"), &opts).unwrap();
    assert_eq!(delta, json!([s, "other"]));
}

#[test]
fn overflowing_array_index_in_a_delta_is_ignored_by_patch() {
    let opts = Options::strict();
    let original = json!([1, 2, 3]);
    // 2147483648 == i32::MAX + 1; this entry should be silently ignored
    // rather than rejecting the whole patch.
    let delta = json!({"2147483648": [99], "_t": "a"});
    let patched = patch(&original, &delta, &opts).unwrap();
    assert_eq!(patched, original);
}

#[test]
fn negative_and_malformed_array_indices_in_a_delta_are_ignored() {
    let opts = Options::strict();
    let original = json!([1, 2, 3]);
    let delta = json!({"-1": [99], "01": [98], "not-a-number": [97], "_t": "a"});
    let patched = patch(&original, &delta, &opts).unwrap();
    assert_eq!(patched, original);
}
