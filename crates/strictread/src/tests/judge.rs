use rstest::rstest;

use super::reader;
use crate::{
    IdenticalReader, ReaderOptions, StandardReader, Validator, Verdict, Violation,
    mode::{Identical, Standard, Validate},
};

#[rstest]
#[case::malformed(b"007\n", Violation::Format)]
#[case::overflow(b"99999999999\n", Violation::Format)]
#[case::out_of_range(b"101\n", Violation::Value)]
fn validator_never_blames_the_contestant(#[case] input: &[u8], #[case] class: Violation) {
    let mut v = reader::<Validate, _>(input);
    let err = v.try_read_int::<i32>(1..=100).unwrap_err();
    assert_eq!(err.violation(), class);
    assert_eq!(v.verdict_for(&err), Verdict::InternalError);

    let mut r = reader::<Identical, _>(input);
    let err = r.try_read_int::<i32>(1..=100).unwrap_err();
    let expected = match class {
        Violation::Format => Verdict::PresentationError,
        Violation::Value => Verdict::WrongAnswer,
        Violation::Tooling => Verdict::InternalError,
    };
    assert_eq!(r.verdict_for(&err), expected);
}

#[test]
fn validator_is_exact() {
    let mut v = reader::<Validate, _>(&b"1  2\n"[..]);
    v.try_read_int::<i32>(..).unwrap();
    v.try_read_space().unwrap();
    let err = v.try_read_int::<i32>(..).unwrap_err();
    assert_eq!(err.violation(), Violation::Format);
    assert_eq!(v.verdict_for(&err), Verdict::InternalError);
}

#[test]
fn oversized_input_is_remapped_for_validators() {
    let options = ReaderOptions {
        initial_buffer_size: 4,
        max_buffer_size: 8,
        ..ReaderOptions::default()
    };
    let input = b"1 2 3 4 5 6 7 8\n";

    let err = Validator::try_with_options(&input[..], options).unwrap_err();
    assert_eq!(err.violation(), Violation::Format);
    assert_eq!(err.verdict(true), Verdict::InternalError);

    let err = IdenticalReader::try_with_options(&input[..], options).unwrap_err();
    assert_eq!(err.verdict(false), Verdict::PresentationError);
}

#[test]
fn tooling_failures_are_never_remapped() {
    let mut r = reader::<Standard, _>(&b"1\n"[..]);
    let err = r.try_read_int_array::<u8>(&mut [], ..).unwrap_err();
    assert_eq!(err.violation(), Violation::Tooling);
    assert_eq!(r.verdict_for(&err), Verdict::InternalError);
}

#[test]
fn unreadable_source_is_a_tooling_failure() {
    #[derive(Debug)]
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    let err = StandardReader::try_new(Broken).unwrap_err();
    assert_eq!(err.violation(), Violation::Tooling);
    assert_eq!(err.to_string(), "read failed: disk on fire at byte 0");
}

#[test]
fn validator_uses_the_batch_protocol() {
    let v = reader::<Validate, _>(&b""[..]);
    assert!(!v.protocol().is_interactive());
    assert_eq!(v.protocol().exit_status(Verdict::InternalError), 3);

    let options = ReaderOptions {
        internal_error_status: 4,
        ..super::small()
    };
    let v = Validator::try_with_options(&b""[..], options).unwrap();
    assert_eq!(v.protocol().exit_status(Verdict::InternalError), 4);
}
