#![allow(clippy::approx_constant)]
#![allow(clippy::float_cmp)]

use rstest::rstest;

use super::{format_error, reader};
use crate::{
    FormatError,
    mode::{Identical, Standard},
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn precision_must_match_when_required() {
    let read = |precision| reader::<Identical, _>(&b"3.14\n"[..]).try_read_float::<f64>(precision);

    assert!(close(read(Some(2)).unwrap(), 3.14));
    assert!(close(read(None).unwrap(), 3.14));
    assert_eq!(
        format_error(read(Some(3))),
        FormatError::FloatPrecision {
            expected: 3,
            found: 2
        }
    );
    assert_eq!(
        format_error(read(Some(0))),
        FormatError::FloatPrecision {
            expected: 0,
            found: 2
        }
    );
}

#[rstest]
#[case(b"0\n", 0.0)]
#[case(b"0.5\n", 0.5)]
#[case(b"-0.25 ", -0.25)]
#[case(b"12\n", 12.0)]
#[case(b"100.000001\n", 100.000_001)]
#[case(b"-7.5", -7.5)]
fn reads_decimal_floats(#[case] input: &[u8], #[case] expected: f64) {
    let value = reader::<Standard, _>(input).try_read_float::<f64>(None).unwrap();
    assert!(close(value, expected), "{value} != {expected}");
}

#[test]
fn negative_zero_is_accepted_for_floats() {
    let value = reader::<Identical, _>(&b"-0\n"[..]).try_read_float::<f64>(None).unwrap();
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
}

#[test]
fn integer_text_has_zero_precision() {
    let mut r = reader::<Identical, _>(&b"3 3\n"[..]);
    assert_eq!(r.try_read_float::<f32>(Some(0)), Ok(3.0));
    r.try_read_space().unwrap();
    assert_eq!(
        format_error(r.try_read_float::<f32>(Some(1))),
        FormatError::FloatPrecision {
            expected: 1,
            found: 0
        }
    );
}

#[rstest]
#[case(b"3.\n")]
#[case(b".5\n")]
#[case(b"05\n")]
#[case(b"00.5\n")]
#[case(b"1.5x\n")]
#[case(b"1e5\n")]
#[case(b"1.2.3\n")]
#[case(b"+1.0\n")]
#[case(b"-\n")]
#[case(b"nan\n")]
fn malformed_floats(#[case] input: &[u8]) {
    assert_eq!(
        format_error(reader::<Identical, _>(input).try_read_float::<f64>(None)),
        FormatError::InvalidFloat
    );
}

#[test]
fn precision_is_checked_before_the_delimiter() {
    let mut r = reader::<Standard, _>(&b"1.55x\n"[..]);
    assert_eq!(
        format_error(r.try_read_float::<f64>(Some(1))),
        FormatError::FloatPrecision {
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn long_fractions_keep_their_digit_count() {
    let mut r = reader::<Standard, _>(&b"0.000000000000000000001234\n"[..]);
    let value = r.try_read_float::<f64>(Some(24)).unwrap();
    assert!(value > 0.0 && value < 1e-20);
}
