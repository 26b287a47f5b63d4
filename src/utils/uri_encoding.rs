//! Percent-encoding transforms used for storage keys and stored targets.
//!
//! Both sets match the ECMAScript `encodeURIComponent` / `encodeURI` functions
//! byte for byte, so keys written by other clients of the same store resolve
//! here too.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use std::str::Utf8Error;

/// Characters left unescaped by a component encoding: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whole-URI encoding additionally keeps the reserved delimiters intact.
const URI: &AsciiSet = &COMPONENT
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Encodes a single path component. Turns a user-facing key into its storage key.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Escapes unsafe characters in a whole URL, leaving its structure untouched.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI).to_string()
}

/// Reverses [`encode_component`].
///
/// # Errors
///
/// Returns an error if the decoded bytes are not valid UTF-8.
pub fn decode_component(input: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(input).decode_utf8()
}
