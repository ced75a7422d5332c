mod common;

use rstest::rstest;
use surreal_core::{Sign, Surreal, SurrealError};

use common::init_test_setup;

const RANGE: std::ops::RangeInclusive<i64> = -8..=8;

fn n(k: i64) -> Surreal {
    Surreal::from_integer(k)
}

#[test]
fn integer_round_trip() {
    init_test_setup();
    for k in -40..=40 {
        assert_eq!(n(k).to_integer(), k);
    }
}

#[test]
fn successor_and_predecessor_are_inverses() {
    init_test_setup();
    for k in RANGE {
        let v = n(k);
        assert_eq!(v.successor().predecessor().value(), v.value());
        assert_eq!(v.predecessor().successor().value(), v.value());
    }
}

#[test]
fn exactly_one_sign_holds() {
    init_test_setup();
    for k in RANGE {
        let v = n(k);
        let held = [v.is_zero(), v.is_positive(), v.is_negative()]
            .iter()
            .filter(|b| **b)
            .count();
        assert_eq!(held, 1, "k = {k}");
        let expected = match k.signum() {
            -1 => Sign::Negative,
            0 => Sign::Zero,
            _ => Sign::Positive,
        };
        assert_eq!(v.sign(), expected);
    }
}

#[test]
fn order_matches_integers() {
    init_test_setup();
    for a in RANGE {
        for b in RANGE {
            assert_eq!(n(a).less_or_equal(&n(b)), a <= b, "{a} <= {b}");
            assert_eq!(n(a).less_than(&n(b)), a < b, "{a} < {b}");
            assert_eq!(n(a).equal_to(&n(b)), a == b, "{a} == {b}");
            assert_eq!(n(a).cmp(&n(b)), a.cmp(&b));
        }
    }
}

#[test]
fn order_is_transitive() {
    init_test_setup();
    let vals: Vec<Surreal> = (-4..=4).map(n).collect();
    for a in &vals {
        for b in &vals {
            for c in &vals {
                if a.less_or_equal(b) && b.less_or_equal(c) {
                    assert!(a.less_or_equal(c), "{a:?} <= {b:?} <= {c:?}");
                }
            }
        }
    }
}

#[test]
fn negation_is_an_involution() {
    init_test_setup();
    for k in RANGE {
        let v = n(k);
        assert_eq!(v.negate().negate().value(), v.value());
        assert_eq!(v.negate().to_integer(), -k);
    }
}

#[rstest]
#[case(0, 0)]
#[case(3, 4)]
#[case(-3, 4)]
#[case(3, -4)]
#[case(-6, -2)]
#[case(11, 0)]
#[case(0, -5)]
fn arithmetic_is_homomorphic(#[case] a: i64, #[case] b: i64) {
    init_test_setup();
    let (x, y) = (n(a), n(b));
    assert_eq!(x.add(&y).to_integer(), a + b);
    assert_eq!(x.subtract(&y).to_integer(), a - b);
    assert_eq!(x.multiply(&y).to_integer(), a * b);
    assert_eq!((&x + &y).to_integer(), a + b);
    assert_eq!((&x - &y).to_integer(), a - b);
    assert_eq!((&x * &y).to_integer(), a * b);
}

#[test]
fn division_agrees_with_integer_division() {
    init_test_setup();
    for a in RANGE {
        for b in RANGE.filter(|b| *b != 0) {
            let got = n(a).divide(&n(b));
            if a % b == 0 {
                assert_eq!(got.map(|q| q.to_integer()), Ok(a / b), "{a} / {b}");
            } else {
                assert_eq!(
                    got.unwrap_err(),
                    SurrealError::NotExactDivision,
                    "{a} / {b} should be inexact"
                );
            }
        }
    }
}

#[test]
fn operations_leave_operands_unchanged() {
    init_test_setup();
    let a = n(5);
    let b = n(-3);
    let _ = a.add(&b);
    let _ = a.subtract(&b);
    let _ = a.multiply(&b);
    let _ = a.divide(&b);
    let _ = a.less_or_equal(&b);
    assert_eq!(a.to_integer(), 5);
    assert_eq!(b.to_integer(), -3);
}
