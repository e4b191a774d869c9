//! ACE (`xn--`) label handling on top of the Punycode decoder.
use crate::punycode;
use std::borrow::Cow;

/// The ACE prefix that marks a Punycode-encoded DNS label.
pub const PUNYCODE_PREFIX: &str = "xn--";

/// Whether `label` carries the ACE prefix, compared ASCII case-insensitively.
#[inline]
pub fn is_ace_label(label: &str) -> bool {
    label
        .get(..PUNYCODE_PREFIX.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(PUNYCODE_PREFIX))
}

/// Decode a single DNS label.
///
/// Labels without the ACE prefix are returned as they are.
pub fn label_to_unicode(label: &str) -> Result<Cow<'_, str>, punycode::Error> {
    if !is_ace_label(label) {
        return Ok(Cow::Borrowed(label));
    }
    punycode::decode_to_string(&label[PUNYCODE_PREFIX.len()..]).map(Cow::Owned)
}

/// Decode every label of a `.`-separated domain.
///
/// Labels that fail to decode keep their ASCII form; the first failure is
/// reported alongside the (partially decoded) domain.
pub fn domain_to_unicode(domain: &str) -> (String, Result<(), punycode::Error>) {
    let mut result = String::with_capacity(domain.len());
    let mut first_error = None;
    for (position, label) in domain.split('.').enumerate() {
        if position > 0 {
            result.push('.');
        }
        match label_to_unicode(label) {
            Ok(decoded) => result.push_str(&decoded),
            Err(error) => {
                first_error.get_or_insert(error);
                result.push_str(label);
            }
        }
    }
    (result, first_error.map_or(Ok(()), Err))
}
