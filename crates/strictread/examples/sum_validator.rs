//! Validates a test input of the form
//!
//! ```text
//! n
//! a_1 a_2 ... a_n
//! ```
//!
//! with `1 <= n <= 200_000`, `|a_i| <= 10^9` and at least one positive
//! `a_i`, read from standard input.
//! Any deviation terminates with an internal error.
//!
//! ```text
//! printf '3\n1 -2 3\n' | cargo run --example sum_validator
//! ```
#![allow(missing_docs)]

use std::io;

use strictread::Validator;

const MAX_N: usize = 200_000;
const MAX_A: i64 = 1_000_000_000;

fn main() {
    let mut input = Validator::new(io::stdin().lock());

    let n = input.read_single_int::<usize>(1..=MAX_N);
    let values = input.read_ints::<i64>(n, -MAX_A..=MAX_A);
    input.read_eof();

    input.assert_value(values.iter().any(|&a| a > 0), "no positive value");
    let sum: i64 = values.iter().sum();
    println!("ok: n = {n}, sum = {sum}");
}
