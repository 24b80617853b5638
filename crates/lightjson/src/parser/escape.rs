//! Helpers for decoding `\uXXXX` escape sequences.
//!
//! A JSON string spells code points above U+FFFF as a UTF-16 surrogate pair,
//! i.e. two consecutive escapes. These helpers decode the four hex digits of a
//! single escape, recognise the two surrogate halves, combine a pair into a
//! scalar value and append the result to a string as UTF-8.

use core::ops::RangeInclusive;

/// Code units that must be followed by a low surrogate.
pub(crate) const HIGH_SURROGATES: RangeInclusive<u16> = 0xD800..=0xDBFF;
/// Code units that may only appear right after a high surrogate.
pub(crate) const LOW_SURROGATES: RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Decodes exactly four ASCII hexadecimal digits (`0-9`, `A-F`, `a-f`).
///
/// Returns `None` if fewer than four bytes are available or any of them is not
/// a hex digit.
pub(crate) fn decode_hex4(bytes: &[u8]) -> Option<u16> {
    let digits = bytes.get(..4)?;
    digits.iter().try_fold(0u16, |acc, &b| {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'A'..=b'F' => b - b'A' + 10,
            b'a'..=b'f' => b - b'a' + 10,
            _ => return None,
        };
        Some((acc << 4) | u16::from(nibble))
    })
}

/// Combines a high and a low surrogate into the code point they encode.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    debug_assert!(HIGH_SURROGATES.contains(&high));
    debug_assert!(LOW_SURROGATES.contains(&low));
    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}

/// Appends `code_point` to `out` as UTF-8 (one to four bytes).
///
/// Returns `false` without touching `out` when `code_point` is not a Unicode
/// scalar value (a surrogate or above U+10FFFF).
pub(crate) fn push_code_point(out: &mut String, code_point: u32) -> bool {
    match char::from_u32(code_point) {
        Some(ch) => {
            out.push(ch);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0041", Some(0x0041))]
    #[case("AbCd", Some(0xABCD))]
    #[case("ffff", Some(0xFFFF))]
    #[case("D834rest", Some(0xD834))]
    #[case("012", None)]
    #[case("G000", None)]
    #[case("00/0", None)]
    #[case(" 123", None)]
    fn hex4_decoding(#[case] input: &str, #[case] expected: Option<u16>) {
        assert_eq!(decode_hex4(input.as_bytes()), expected);
    }

    #[test]
    fn g_clef_pair() {
        assert_eq!(combine_surrogates(0xD834, 0xDD1E), 0x1D11E);
        assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x10000);
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10FFFF);
    }

    #[test]
    fn utf8_lengths_follow_code_point_ranges() {
        for (cp, len) in [(0x24, 1), (0xA2, 2), (0x20AC, 3), (0x1D11E, 4)] {
            let mut out = String::new();
            assert!(push_code_point(&mut out, cp));
            assert_eq!(out.len(), len, "U+{cp:04X}");
        }
        let mut out = String::new();
        assert!(push_code_point(&mut out, 0x1D11E));
        assert_eq!(out.as_bytes(), b"\xF0\x9D\x84\x9E");
    }

    #[test]
    fn surrogates_are_not_scalar_values() {
        let mut out = String::from("x");
        assert!(!push_code_point(&mut out, 0xD800));
        assert!(!push_code_point(&mut out, 0x11_0000));
        assert_eq!(out, "x");
    }
}
