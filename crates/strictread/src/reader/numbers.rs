//! Integer and float reads.
//!
//! Malformed text is a format violation; well-formed text outside the
//! caller's range is a value violation. An integer that does not fit the
//! target width at all is malformed for that width, so it is a format
//! violation too.

use core::ops::RangeBounds;
use std::io::Read;

use super::Reader;
use crate::{
    error::{FormatError, ReadError, ToolingError, ValueError},
    mode::Mode,
    number::{Float, Integer, Magnitude},
};

impl<M: Mode, R: Read> Reader<M, R> {
    /// Read a canonical decimal integer in `range`.
    ///
    /// Canonical means an optional `-` (signed targets only) followed by
    /// either a lone `0` or a nonzero digit and further digits, ending at a
    /// delimiter. `-0` and leading zeros are malformed.
    ///
    /// ```rust
    /// use strictread::IdenticalReader;
    ///
    /// let mut reader = IdenticalReader::try_new(&b"-17 250\n"[..]).unwrap();
    /// assert_eq!(reader.try_read_int::<i32>(-100..=100), Ok(-17));
    /// reader.try_read_space().unwrap();
    /// assert!(reader.try_read_int::<u8>(..).is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with a format error for malformed text or a value that does not
    /// fit `T`, and with a value error for a value outside `range`.
    pub fn try_read_int<T: Integer>(&mut self, range: impl RangeBounds<T>) -> Result<T, ReadError> {
        self.read_int_in(&range)
    }

    fn read_int_in<T, B>(&mut self, range: &B) -> Result<T, ReadError>
    where
        T: Integer,
        B: RangeBounds<T>,
    {
        self.skip_token_prefix()?;
        let negative = T::SIGNED && self.eat(b'-')?;

        if self.eat(b'0')? {
            if negative || !self.peek()?.is_delimiter() {
                return Err(self.error(FormatError::InvalidInteger));
            }
            return self.check_range(T::ZERO, range);
        }

        let Some(first) = self.peek()?.digit() else {
            return Err(self.error(FormatError::InvalidInteger));
        };
        self.buffer.bump();
        let mut magnitude = T::Magnitude::from_digit(first);

        loop {
            let peeked = self.peek()?;
            if peeked.is_delimiter() {
                break;
            }
            let Some(digit) = peeked.digit() else {
                return Err(self.error(FormatError::InvalidInteger));
            };
            self.buffer.bump();
            magnitude = magnitude
                .push_digit(digit)
                .ok_or_else(|| self.error(FormatError::IntegerOverflow))?;
        }

        if magnitude > T::magnitude_limit(negative) {
            return Err(self.error(FormatError::IntegerOverflow));
        }
        self.check_range(T::from_magnitude(magnitude, negative), range)
    }

    fn check_range<T, B>(&self, value: T, range: &B) -> Result<T, ReadError>
    where
        T: Integer,
        B: RangeBounds<T>,
    {
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(self.error(ValueError::IntegerOutOfBounds(value.to_string())))
        }
    }

    /// Read a decimal float, optionally requiring exactly `precision` digits
    /// after the decimal point.
    ///
    /// The integer part follows the same zero rules as integers, except that
    /// `-0` is accepted. A `.` must be followed by at least one digit. With
    /// `precision` of `None`, any number of fractional digits is accepted,
    /// including none at all; `Some(0)` forbids a fractional part.
    ///
    /// # Errors
    ///
    /// Fails with a format error for malformed text or a precision mismatch.
    pub fn try_read_float<F: Float>(&mut self, precision: Option<usize>) -> Result<F, ReadError> {
        self.skip_token_prefix()?;
        let negative = self.eat(b'-')?;

        let mut value = F::ZERO;
        if !self.eat(b'0')? {
            let Some(first) = self.peek()?.digit() else {
                return Err(self.error(FormatError::InvalidFloat));
            };
            self.buffer.bump();
            value = F::from_digit(first);
            while let Some(digit) = self.peek()?.digit() {
                self.buffer.bump();
                value = value.push_digit(digit);
            }
        }

        let mut found = 0;
        if self.eat(b'.')? {
            let mut weight = F::TENTH;
            while let Some(digit) = self.peek()?.digit() {
                self.buffer.bump();
                value = value.add_fraction_digit(digit, weight);
                weight = weight.div_ten();
                found += 1;
            }
            if found == 0 {
                return Err(self.error(FormatError::InvalidFloat));
            }
        }
        match precision {
            Some(expected) if expected != found => {
                return Err(self.error(FormatError::FloatPrecision { expected, found }));
            }
            _ => {}
        }

        if !self.peek()?.is_delimiter() {
            return Err(self.error(FormatError::InvalidFloat));
        }
        Ok(if negative { value.negate() } else { value })
    }

    /// Read an integer followed by a line boundary.
    ///
    /// # Errors
    ///
    /// See [`Reader::try_read_int`] and [`Reader::try_read_newline`].
    pub fn try_read_single_int<T: Integer>(
        &mut self,
        range: impl RangeBounds<T>,
    ) -> Result<T, ReadError> {
        let value = self.read_int_in(&range)?;
        self.try_read_newline()?;
        Ok(value)
    }

    /// Read two integers on one line.
    ///
    /// # Errors
    ///
    /// See [`Reader::try_read_int`], [`Reader::try_read_space`], and
    /// [`Reader::try_read_newline`].
    pub fn try_read_int_pair<T: Integer>(
        &mut self,
        range: impl RangeBounds<T>,
    ) -> Result<(T, T), ReadError> {
        let first = self.read_int_in(&range)?;
        self.try_read_space()?;
        let second = self.read_int_in(&range)?;
        self.try_read_newline()?;
        Ok((first, second))
    }

    /// Read `N` integers on one line.
    ///
    /// # Errors
    ///
    /// Fails with a tooling error if `N` is zero; otherwise see
    /// [`Reader::try_read_int_array`].
    pub fn try_read_int_tuple<const N: usize, T: Integer>(
        &mut self,
        range: impl RangeBounds<T>,
    ) -> Result<[T; N], ReadError> {
        let mut values = [T::ZERO; N];
        self.read_int_slice(&mut values, &range)?;
        Ok(values)
    }

    /// Fill `values` with integers from one line.
    ///
    /// # Errors
    ///
    /// Fails with a tooling error if `values` is empty. Otherwise see
    /// [`Reader::try_read_int`], [`Reader::try_read_space`], and
    /// [`Reader::try_read_newline`].
    pub fn try_read_int_array<T: Integer>(
        &mut self,
        values: &mut [T],
        range: impl RangeBounds<T>,
    ) -> Result<(), ReadError> {
        self.read_int_slice(values, &range)
    }

    /// Read `n` integers from one line into a new vector.
    ///
    /// # Errors
    ///
    /// See [`Reader::try_read_int_array`].
    pub fn try_read_ints<T: Integer>(
        &mut self,
        n: usize,
        range: impl RangeBounds<T>,
    ) -> Result<Vec<T>, ReadError> {
        let mut values = vec![T::ZERO; n];
        self.read_int_slice(&mut values, &range)?;
        Ok(values)
    }

    fn read_int_slice<T, B>(&mut self, values: &mut [T], range: &B) -> Result<(), ReadError>
    where
        T: Integer,
        B: RangeBounds<T>,
    {
        let Some((first, rest)) = values.split_first_mut() else {
            return Err(self.error(ToolingError::EmptyArray));
        };
        *first = self.read_int_in(range)?;
        for value in rest {
            self.try_read_space()?;
            *value = self.read_int_in(range)?;
        }
        self.try_read_newline()
    }

    /// Like [`Reader::try_read_int`], terminating on failure.
    pub fn read_int<T: Integer>(&mut self, range: impl RangeBounds<T>) -> T {
        let result = self.read_int_in(&range);
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_float`], terminating on failure.
    pub fn read_float<F: Float>(&mut self, precision: Option<usize>) -> F {
        let result = self.try_read_float(precision);
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_single_int`], terminating on failure.
    pub fn read_single_int<T: Integer>(&mut self, range: impl RangeBounds<T>) -> T {
        let result = self.try_read_single_int(range);
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_int_pair`], terminating on failure.
    pub fn read_int_pair<T: Integer>(&mut self, range: impl RangeBounds<T>) -> (T, T) {
        let result = self.try_read_int_pair(range);
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_int_tuple`], terminating on failure.
    pub fn read_int_tuple<const N: usize, T: Integer>(
        &mut self,
        range: impl RangeBounds<T>,
    ) -> [T; N] {
        let result = self.try_read_int_tuple(range);
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_int_array`], terminating on failure.
    pub fn read_int_array<T: Integer>(&mut self, values: &mut [T], range: impl RangeBounds<T>) {
        let result = self.try_read_int_array(values, range);
        self.or_quit(result);
    }

    /// Like [`Reader::try_read_ints`], terminating on failure.
    pub fn read_ints<T: Integer>(&mut self, n: usize, range: impl RangeBounds<T>) -> Vec<T> {
        let result = self.try_read_ints(n, range);
        self.or_quit(result)
    }
}
