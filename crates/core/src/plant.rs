//! Plant validation rules.
//!
//! The `plants` table has one NOT NULL column (`name`) and a bounded price.
//! These helpers turn request values into store-ready values and report
//! violations as [`CoreError::Validation`] so they surface as 400s rather
//! than storage failures.

use crate::error::CoreError;
use crate::price::Price;

/// Entity name used in not-found errors and log lines.
pub const PLANT_ENTITY: &str = "Plant";

/// Stock flag applied when a create request omits `is_in_stock`.
pub const DEFAULT_IN_STOCK: bool = true;

/// Require a name on create. An empty string is accepted; only absence or
/// `null` is rejected.
pub fn require_name(name: Option<String>) -> Result<String, CoreError> {
    name.ok_or_else(|| CoreError::Validation("name is required".to_string()))
}

/// Reject an explicit `null` for a NOT NULL column in a partial update.
pub fn reject_null<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} cannot be null")))
}

/// Convert an optional client price into a stored price.
pub fn parse_price(price: Option<f64>) -> Result<Option<Price>, CoreError> {
    price.map(Price::parse).transpose()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_name_accepts_any_string() {
        assert_eq!(require_name(Some("Aloe".into())).unwrap(), "Aloe");
        assert_eq!(require_name(Some(String::new())).unwrap(), "");
    }

    #[test]
    fn require_name_rejects_missing() {
        let err = require_name(None).unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg) if msg == "name is required");
    }

    #[test]
    fn reject_null_names_the_field() {
        let err = reject_null::<String>("name", None).unwrap_err();
        assert!(err.to_string().contains("name cannot be null"));
        assert_eq!(reject_null("name", Some("Ivy")).unwrap(), "Ivy");
    }

    #[test]
    fn parse_price_passes_through_absence() {
        assert_eq!(parse_price(None).unwrap(), None);
        assert_eq!(parse_price(Some(9.5)).unwrap().map(Price::cents), Some(950));
    }

    #[test]
    fn parse_price_rejects_out_of_range() {
        assert_matches!(parse_price(Some(5_000_000.0)), Err(CoreError::Validation(_)));
    }
}
