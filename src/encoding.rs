//! Projects-list line encoding.
//!
//! gitweb reads one project per line, fields separated by a single space,
//! each field form-urlencoded: alphanumerics and `-._*` pass through, a space
//! becomes `+` and every other byte is `%XX`.

use url::form_urlencoded;

/// Encode one field.
pub fn encode_field(field: &str) -> String {
    form_urlencoded::byte_serialize(field.as_bytes()).collect()
}

/// Encode fields into one line, without the line terminator.
pub fn encode_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| encode_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode one field. Invalid escapes are kept literally and invalid UTF-8
/// is replaced.
pub fn decode_field(field: &str) -> String {
    // An encoded field never contains `&` or `=`, so it parses as a lone key.
    form_urlencoded::parse(field.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

/// Split a listing line back into its decoded fields.
pub fn decode_line(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return Vec::new();
    }
    line.split(' ').map(decode_field).collect()
}
