//! HSN/SAC classification code checks.

use crate::error::ValidationError;

/// Validates an HSN/SAC classification code.
///
/// Accepts 2, 4, 6 or 8 digit codes: HSN chapter through tariff item, with
/// six-digit SAC codes for services falling in the same shape. Surrounding
/// whitespace is ignored; anything else is rejected.
pub fn validate_hsn_sac(code: &str) -> Result<(), ValidationError> {
    let trimmed = code.trim();
    let well_formed =
        matches!(trimmed.len(), 2 | 4 | 6 | 8) && trimmed.bytes().all(|b| b.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidHsnCode {
            code: code.to_string(),
        })
    }
}
