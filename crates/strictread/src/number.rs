//! Numeric target types.
//!
//! Integers are accumulated as an unsigned magnitude at least as wide as the
//! target, with a checked step per digit, and only converted once the
//! magnitude is known to fit. Floats are accumulated directly in the target
//! representation.

use core::fmt;

mod private {
    pub trait SealedMagnitude {}
    pub trait SealedInteger {}
    pub trait SealedFloat {}
}

/// Unsigned accumulator for integer parsing.
pub trait Magnitude: Copy + Ord + private::SealedMagnitude {
    #[doc(hidden)]
    fn from_digit(digit: u8) -> Self;

    /// `self * 10 + digit`, or `None` if that leaves the accumulator width.
    #[doc(hidden)]
    fn push_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_magnitude {
    ($($m:ty),*) => {$(
        impl private::SealedMagnitude for $m {}

        impl Magnitude for $m {
            #[inline]
            fn from_digit(digit: u8) -> Self {
                <$m>::from(digit)
            }

            #[inline]
            fn push_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(10)?.checked_add(<$m>::from(digit))
            }
        }
    )*};
}

impl_magnitude!(u64, u128);

/// An integer type that can be read with [`Reader::read_int`](crate::Reader::read_int).
pub trait Integer: Copy + PartialOrd + fmt::Display + private::SealedInteger {
    /// The accumulator used while reading digits.
    type Magnitude: Magnitude;

    #[doc(hidden)]
    const SIGNED: bool;
    #[doc(hidden)]
    const ZERO: Self;

    /// Largest magnitude representable with the given sign.
    #[doc(hidden)]
    fn magnitude_limit(negative: bool) -> Self::Magnitude;

    /// Convert a magnitude no larger than `magnitude_limit(negative)`.
    #[doc(hidden)]
    fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty => $m:ty, $signed:literal);* $(;)?) => {$(
        impl private::SealedInteger for $t {}

        impl Integer for $t {
            type Magnitude = $m;

            const SIGNED: bool = $signed;
            const ZERO: Self = 0;

            #[inline]
            #[allow(
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn magnitude_limit(negative: bool) -> $m {
                <$t>::MAX as $m + <$m>::from(negative && Self::SIGNED)
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn from_magnitude(magnitude: $m, negative: bool) -> Self {
                // The limit for a negative value is `MAX + 1`, which
                // truncates to `MIN` and stays there under negation.
                let value = magnitude as $t;
                if negative { value.wrapping_neg() } else { value }
            }
        }
    )*};
}

impl_integer!(
    i8 => u64, true;
    i16 => u64, true;
    i32 => u64, true;
    i64 => u64, true;
    isize => u64, true;
    u8 => u64, false;
    u16 => u64, false;
    u32 => u64, false;
    u64 => u64, false;
    usize => u64, false;
    i128 => u128, true;
    u128 => u128, false;
);

/// A floating-point type that can be read with
/// [`Reader::read_float`](crate::Reader::read_float).
pub trait Float: Copy + PartialOrd + fmt::Display + private::SealedFloat {
    #[doc(hidden)]
    const ZERO: Self;
    #[doc(hidden)]
    const TENTH: Self;

    #[doc(hidden)]
    fn from_digit(digit: u8) -> Self;
    /// `self * 10 + digit`
    #[doc(hidden)]
    fn push_digit(self, digit: u8) -> Self;
    /// `self + digit * weight`
    #[doc(hidden)]
    fn add_fraction_digit(self, digit: u8, weight: Self) -> Self;
    #[doc(hidden)]
    fn div_ten(self) -> Self;
    #[doc(hidden)]
    fn negate(self) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl private::SealedFloat for $t {}

        impl Float for $t {
            const ZERO: Self = 0.0;
            const TENTH: Self = 1.0 / 10.0;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                <$t>::from(digit)
            }

            #[inline]
            fn push_digit(self, digit: u8) -> Self {
                self * 10.0 + <$t>::from(digit)
            }

            #[inline]
            fn add_fraction_digit(self, digit: u8, weight: Self) -> Self {
                self + <$t>::from(digit) * weight
            }

            #[inline]
            fn div_ten(self) -> Self {
                self / 10.0
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }
        }
    )*};
}

impl_float!(f32, f64);
