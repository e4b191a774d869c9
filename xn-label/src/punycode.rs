//! Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)) decoding.
//!
//! Since Punycode fundamentally works on unicode code points,
//! `decode` returns a vector of `char`.
//! `decode_to_string` is a convenience wrapper that collects into Rust’s
//! UTF-8 based `String`.
//!
//! Integer arithmetic is bounded at `i32::MAX`, the limit of the reference
//! algorithm, so inputs that a 32-bit signed decoder would reject are
//! rejected here as well.
use std::char;
use std::convert::TryFrom;
use thiserror::Error;

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';
const MAX_INT: u32 = i32::MAX as u32;

/// Reasons a Punycode string cannot be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A character before the last delimiter is not ASCII.
    #[error("illegal input >= 0x80 (not a basic code point)")]
    NotBasicCodePoint,
    /// The input ends in the middle of an integer, holds a character outside
    /// the base-36 digit alphabet, or names something that is not a Unicode
    /// scalar value.
    #[error("invalid input")]
    InvalidInput,
    /// An intermediate value does not fit in a 32-bit signed integer.
    #[error("overflow: input needs wider integers to process")]
    Overflow,
}

#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

#[inline]
fn digit_value(byte: u8) -> Option<u32> {
    let digit = match byte {
        b'0'..=b'9' => byte - b'0' + 26,
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a',
        _ => return None,
    };
    Some(u32::from(digit))
}

#[inline]
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

/// Convert Punycode to an Unicode `String`.
///
/// This is a convenience wrapper around `decode`.
#[inline]
pub fn decode_to_string(input: &str) -> Result<String, Error> {
    decode(input).map(|chars| chars.into_iter().collect())
}

/// Convert Punycode to Unicode.
///
/// Everything before the last `-` is copied verbatim and must be ASCII.
/// Everything after it is a run of generalized variable-length integers,
/// each of which inserts one code point into the output.
pub fn decode(input: &str) -> Result<Vec<char>, Error> {
    let (basic, extended) = match input.rfind(DELIMITER) {
        None => ("", input),
        Some(position) => (&input[..position], &input[position + 1..]),
    };
    let mut output = Vec::with_capacity(input.len());
    for c in basic.chars() {
        if !c.is_ascii() {
            return Err(Error::NotBasicCodePoint);
        }
        output.push(c);
    }

    let mut code_point = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut i: u32 = 0;
    let mut iter = extended.bytes();
    loop {
        let previous_i = i;
        let mut weight = 1;
        let mut k = BASE;
        let mut byte = match iter.next() {
            None => break,
            Some(byte) => byte,
        };
        loop {
            let digit = digit_value(byte).ok_or(Error::InvalidInput)?;
            if digit > (MAX_INT - i) / weight {
                return Err(Error::Overflow);
            }
            i += digit * weight;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            if weight > MAX_INT / (BASE - t) {
                return Err(Error::Overflow);
            }
            weight *= BASE - t;
            k += BASE;
            byte = iter.next().ok_or(Error::InvalidInput)?;
        }

        let out = u32::try_from(output.len() + 1).map_err(|_| Error::Overflow)?;
        bias = adapt(i - previous_i, out, previous_i == 0);
        if i / out > MAX_INT - code_point {
            return Err(Error::Overflow);
        }
        code_point += i / out;
        i %= out;
        let c = char::from_u32(code_point).ok_or(Error::InvalidInput)?;
        output.insert(i as usize, c);
        i += 1;
    }
    Ok(output)
}
