//! Integration tests for cidr-calc
//!
//! These tests drive the public API and the calculator end to end.

use cidr_calc::{calculator, CidrError, RangeSet};

fn run_calc(input: &str) -> String {
    let mut out = Vec::new();
    calculator::run(input.as_bytes(), &mut out).expect("calculator run failed");
    String::from_utf8(out).expect("output is not utf8")
}

#[test]
fn test_merge_halves() {
    let set = RangeSet::from_cidrs(&["10.0.0.0/25", "10.0.0.128/25"])
        .expect("Failed to parse CIDRs");
    assert_eq!(set.simplify().to_cidrs(), vec!["10.0.0.0/24"]);
}

#[test]
fn test_subtract_half() {
    let a = RangeSet::from_cidrs(&["10.0.0.0/24"]).unwrap();
    let b = RangeSet::from_cidrs(&["10.0.0.128/25"]).unwrap();
    assert_eq!(a.subtract(&b).to_cidrs(), vec!["10.0.0.0/25"]);
}

#[test]
fn test_whole_address_space() {
    let set = RangeSet::from_cidrs(&["0.0.0.0/0"]).unwrap();
    assert_eq!(set.to_cidrs(), vec!["0.0.0.0/0"]);
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        RangeSet::from_cidrs(&["::1/128"]),
        Err(CidrError::AddressFamily { .. })
    ));
    assert!(matches!(
        RangeSet::from_cidrs(&["not-a-cidr"]),
        Err(CidrError::Parse { .. })
    ));
}

#[test]
fn test_operands_are_not_mutated() {
    let a = RangeSet::from_cidrs(&["10.0.0.0/24", "10.0.1.0/24"]).unwrap();
    let b = RangeSet::from_cidrs(&["10.0.0.0/26"]).unwrap();
    let before_a = a.clone();
    let before_b = b.clone();

    let _ = a.union(&b).simplify();
    let _ = a.subtract(&b);

    assert_eq!(a, before_a);
    assert_eq!(b, before_b);
    assert!(!a.is_canonical());
}

#[test]
fn test_calculator_session() {
    let input = "\
10.0.0.0/24
10.0.1.0/24
commit
10.0.0.64/26
commit
subtract
192.168.0.0/25
commit
192.168.0.128/25
commit
add
simplify
";
    assert_eq!(
        run_calc(input),
        "\
2 ranges in stack.

10.0.0.0/26
10.0.0.128/25
10.0.1.0/24

192.168.0.0/24
"
    );
}

#[test]
fn test_calculator_stray_lines() {
    let input = "10.0.0.0/8\ncommit\n172.16.0.0/12\n10.0.0.0/8\n";
    assert_eq!(
        run_calc(input),
        "2 stray CIDRs.\n172.16.0.0/12\n10.0.0.0/8\n1 ranges in stack.\n\n10.0.0.0/8\n"
    );
}

#[test]
fn test_calculator_unsimplified_union_lists_both() {
    let input = "10.0.0.0/24\ncommit\n10.0.0.0/25\ncommit\nadd\n";
    assert_eq!(
        run_calc(input),
        "1 ranges in stack.\n\n10.0.0.0/24\n10.0.0.0/25\n"
    );
}

#[test]
fn test_calculator_family_error_stops() {
    let input = "10.0.0.0/24\ncommit\n::1/128\ncommit\nsimplify\n";
    assert_eq!(run_calc(input), "prefix \"::1/128\" is not IPv4\n");
}

#[test]
fn test_calculator_underflow_stops() {
    let input = "10.0.0.0/24\ncommit\nsubtract\n";
    assert_eq!(
        run_calc(input),
        "subtract: needs 2 operand(s), stack has 1\n"
    );
}
