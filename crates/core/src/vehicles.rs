//! Vehicle plate and model-year validation.

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::CoreError;

/// Plate pattern: three letters, a dash, one digit, one letter, two digits.
static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3}-[0-9][A-Za-z][0-9]{2}$").expect("valid plate regex"));

/// Oldest model year the fleet accepts.
pub const MIN_VEHICLE_YEAR: i32 = 2020;

/// Validate a plate and return its canonical upper-cased form.
///
/// Input case is accepted (`"abc-1d23"`), storage is always upper-cased.
pub fn normalize_plate(plate: &str) -> Result<String, CoreError> {
    if !PLATE_RE.is_match(plate) {
        return Err(CoreError::Validation(format!(
            "Plate {plate:?} must match three letters, dash, digit, letter, two digits (e.g. ABC-1D23)"
        )));
    }
    Ok(plate.to_uppercase())
}

/// Validate a vehicle model year against the current calendar year.
pub fn validate_year(year: i32) -> Result<(), CoreError> {
    let current = chrono::Utc::now().year();
    validate_year_at(year, current)
}

/// Year rule with the reference year injected, for testability.
fn validate_year_at(year: i32, current: i32) -> Result<(), CoreError> {
    if year < MIN_VEHICLE_YEAR || year > current {
        return Err(CoreError::Validation(format!(
            "Year {year} must be between {MIN_VEHICLE_YEAR} and {current}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn plate_is_uppercased() {
        assert_eq!(normalize_plate("abc-1d23").unwrap(), "ABC-1D23");
        assert_eq!(normalize_plate("ABC-1D23").unwrap(), "ABC-1D23");
    }

    #[test]
    fn plate_pattern_enforced() {
        for bad in ["AB-1D23", "ABCD-1D23", "ABC-DD23", "ABC-1D2", "ABC-1D234", "ABC_1D23", ""] {
            assert_matches!(normalize_plate(bad), Err(CoreError::Validation(_)), "plate {bad:?}");
        }
    }

    #[test]
    fn year_bounds() {
        let current = chrono::Utc::now().year();
        assert_matches!(validate_year_at(2019, current), Err(CoreError::Validation(_)));
        assert!(validate_year_at(MIN_VEHICLE_YEAR, current).is_ok());
        assert!(validate_year_at(current, current).is_ok());
        assert_matches!(validate_year_at(current + 1, current), Err(CoreError::Validation(_)));
    }
}
