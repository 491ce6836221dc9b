//! Byte classes of the strict grammar.
//!
//! Only codes `0..=127` are part of the alphabet. Anything above classifies as
//! a delimiter that is not space-class, so it can end a token but is never
//! skipped as a separator.

#![expect(clippy::inline_always)]

/// Any byte with code at most `' '`, or outside the alphabet.
#[inline(always)]
pub(crate) fn is_delimiter(b: u8) -> bool {
    b <= b' ' || b > 0x7f
}

/// Tab, newline, vertical tab, form feed, carriage return, or space.
#[inline(always)]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b' ')
}

/// Newline or carriage return. The end marker is a line separator too, but it
/// is never a byte.
#[inline(always)]
pub(crate) fn is_line_separator(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_class_is_a_subset_of_delimiters() {
        for b in 0..=u8::MAX {
            if is_space(b) {
                assert!(is_delimiter(b), "{b:#x}");
            }
            if is_line_separator(b) {
                assert!(is_space(b), "{b:#x}");
            }
        }
    }

    #[test]
    fn high_bytes_are_stray_delimiters() {
        assert!(is_delimiter(0x80));
        assert!(is_delimiter(0xff));
        assert!(!is_space(0xff));
        assert!(!is_line_separator(0xff));
        assert!(!is_delimiter(b'!'));
        assert!(!is_delimiter(b'~'));
    }
}
