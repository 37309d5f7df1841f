//! Import from the `data` query parameter of a share link.
//!
//! The parameter value is produced as `base64(percent_encode(json))`, so decoding runs
//! base64, then percent-decoding, then JSON parsing, then the same validation as file imports.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;

use crate::error::{ImportError, ImportResult};
use crate::types::Work;

use super::json::import_json_from_str;
use super::validate::ValidationMode;

/// Name of the query parameter carrying the encoded export.
pub const DATA_PARAM: &str = "data";

// Padding is optional in hand-copied links.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Extract the raw `data` parameter from a full URL or a bare query string.
///
/// Returns `None` when the parameter is absent or empty.
pub fn data_param_from_url(input: &str) -> Option<String> {
    let query = match ::url::Url::parse(input) {
        Ok(parsed) => parsed.query().unwrap_or_default().to_string(),
        Err(_) => input.trim_start_matches('?').to_string(),
    };

    ::url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == DATA_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Decode a `data` parameter value into its JSON text.
pub fn decode_data_param(value: &str) -> ImportResult<String> {
    // Form decoding turns '+' into ' '; base64 never contains spaces, so undo that first.
    let cleaned: String = value
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('+'),
            c if c.is_ascii_whitespace() => None,
            c => Some(c),
        })
        .collect();

    let bytes = LENIENT_BASE64
        .decode(cleaned.as_bytes())
        .map_err(|e| ImportError::decode(format!("invalid base64: {e}")))?;
    let percent_encoded = String::from_utf8(bytes)
        .map_err(|e| ImportError::decode(format!("decoded data is not UTF-8: {e}")))?;
    check_percent_escapes(&percent_encoded)?;
    let json = urlencoding::decode(&percent_encoded)
        .map_err(|e| ImportError::decode(format!("invalid percent-encoding: {e}")))?;
    Ok(json.into_owned())
}

// urlencoding passes malformed escapes through as literal text.
fn check_percent_escapes(text: &str) -> ImportResult<()> {
    let bytes = text.as_bytes();
    for (pos, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let escape = bytes.get(pos + 1..pos + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(ImportError::decode(format!(
                "invalid percent-encoding: malformed escape at byte {pos}"
            )));
        }
    }
    Ok(())
}

/// Import works from a `data` parameter value.
pub fn import_from_data_param(value: &str, mode: ValidationMode) -> ImportResult<Vec<Work>> {
    let json = decode_data_param(value)?;
    import_json_from_str(&json, mode)
}

/// Import works from a URL (or query string) carrying a `data` parameter.
pub fn import_from_url(input: &str, mode: ValidationMode) -> ImportResult<Vec<Work>> {
    let value = data_param_from_url(input)
        .ok_or_else(|| ImportError::decode(format!("no '{DATA_PARAM}' parameter in url")))?;
    import_from_data_param(&value, mode)
}

/// Encode JSON text the way share links carry it.
///
/// This is the inverse of [`decode_data_param`].
pub fn encode_data_param(json: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(urlencoding::encode(json).as_bytes())
}
