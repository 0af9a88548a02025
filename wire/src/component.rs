//! URI component percent-encoding.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped in a URI component: the RFC 3986 unreserved set
/// plus `! ' ( ) *`, the same set browsers leave alone.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a key or value for use inside a query string.
#[must_use]
pub fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_COMPONENT).into()
}

/// Decodes a percent-encoded key or value.
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced, so
/// decoding never fails.
#[must_use]
pub fn decode_component(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}
