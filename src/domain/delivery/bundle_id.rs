//! Bundle identifier validation

use crate::domain::error::InvalidBundleIdError;

/// Check that `value` looks like a bundle identifier.
///
/// At least two dot-separated segments of ASCII alphanumerics, '-' or '_'.
pub fn validate_bundle_id(value: &str) -> Result<&str, InvalidBundleIdError> {
    let segments: Vec<&str> = value.split('.').collect();
    let plausible = segments.len() >= 2
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        });

    if plausible {
        Ok(value)
    } else {
        Err(InvalidBundleIdError {
            input: value.to_string(),
        })
    }
}
