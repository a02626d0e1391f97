//! Tri-state fields for partial updates.
//!
//! A PATCH body distinguishes three states per field: the key is absent, the
//! key is present with `null`, or the key is present with a value. Plain
//! `Option<Option<T>>` collapses the first two under serde, so fields opt in
//! with:
//!
//! ```ignore
//! #[serde(default, deserialize_with = "plantsy_core::patch::present")]
//! pub image: Option<Option<String>>,
//! ```
//!
//! - outer `None`: key absent, keep the stored value
//! - `Some(None)`: explicit `null`
//! - `Some(Some(v))`: new value

use serde::{Deserialize, Deserializer};

/// Deserialize a key that is present in the input, keeping `null` as `Some(None)`.
///
/// Only called by serde when the key exists; `#[serde(default)]` covers the
/// absent case.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "super::present")]
        note: Option<Option<String>>,
    }

    #[test]
    fn absent_key_is_none() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.note, None);
    }

    #[test]
    fn explicit_null_is_some_none() {
        let body: Body = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(body.note, Some(None));
    }

    #[test]
    fn value_is_some_some() {
        let body: Body = serde_json::from_str(r#"{"note": "water weekly"}"#).unwrap();
        assert_eq!(body.note, Some(Some("water weekly".to_string())));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(serde_json::from_str::<Body>(r#"{"note": 3}"#).is_err());
    }
}
