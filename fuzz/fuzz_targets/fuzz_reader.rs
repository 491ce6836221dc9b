#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strictread::{IdenticalReader, Mode, Reader, ReaderOptions, StandardInteractor, StandardReader};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Eof,
    Space,
    Newline,
    Token,
    Line,
    Char,
    Int { lo: i32, hi: i32 },
    Wide,
    Unsigned,
    Float { precision: Option<u8> },
    Pair,
    Ints { n: u8 },
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    ops: Vec<Op>,
    small_buffer: bool,
    data: &'a [u8],
}

/// Run `ops` until the first failure, returning how many succeeded.
fn drive<M: Mode>(mut reader: Reader<M, &[u8]>, ops: &[Op]) -> usize {
    for (i, op) in ops.iter().enumerate() {
        let before = reader.position();
        let result = match *op {
            Op::Eof => reader.try_read_eof(),
            Op::Space => reader.try_read_space(),
            Op::Newline => reader.try_read_newline(),
            Op::Token => reader.try_read_token().map(drop),
            Op::Line => reader.try_read_line().map(drop),
            Op::Char => reader.try_read_char().map(drop),
            Op::Int { lo, hi } => reader.try_read_int(lo..=hi).map(|v| {
                assert!((lo..=hi).contains(&v));
            }),
            Op::Wide => reader.try_read_int::<i128>(..).map(drop),
            Op::Unsigned => reader.try_read_int::<u64>(..).map(drop),
            Op::Float { precision } => reader
                .try_read_float::<f64>(precision.map(usize::from))
                .map(drop),
            Op::Pair => reader.try_read_int_pair::<i64>(..).map(drop),
            Op::Ints { n } => reader.try_read_ints::<i16>(usize::from(n), ..).map(drop),
        };
        assert!(reader.position() >= before);
        if let Err(e) = result {
            // the verdict mapping is total
            let _ = reader.verdict_for(&e);
            assert!(e.offset() == reader.position());
            return i;
        }
    }
    ops.len()
}

fuzz_target!(|input: Input<'_>| {
    let options = if input.small_buffer {
        ReaderOptions {
            initial_buffer_size: 1,
            max_buffer_size: 1 << 12,
            ..ReaderOptions::default()
        }
    } else {
        ReaderOptions {
            initial_buffer_size: 1 << 12,
            ..ReaderOptions::default()
        }
    };

    if let Ok(reader) = IdenticalReader::try_with_options(input.data, options) {
        drive(reader, &input.ops);
    }
    let batch = StandardReader::try_with_options(input.data, options)
        .ok()
        .map(|reader| drive(reader, &input.ops));
    // Same bytes, one byte per source read.
    let live = StandardInteractor::try_with_options(input.data, options)
        .ok()
        .map(|reader| drive(reader, &input.ops));
    if input.data.len() < 1 << 11 {
        assert_eq!(batch, live);
    }
});
