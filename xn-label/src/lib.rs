//! Decoding of internationalized domain labels.
//!
//! This crate exposes [Punycode (RFC 3492)](https://tools.ietf.org/html/rfc3492)
//! decoding and the small amount of label handling needed to turn an
//! `xn--` host label back into the Unicode text it was encoded from.
//!
//! > The Punycode encoding is a particular instance of Bootstring,
//! > a general algorithm that allows a string of basic code points
//! > to uniquely represent any string of code points drawn from a larger set.
//!
//! Only decoding is provided.
pub mod punycode;

mod label;

pub use crate::label::{domain_to_unicode, is_ace_label, label_to_unicode, PUNYCODE_PREFIX};
pub use crate::punycode::Error;
