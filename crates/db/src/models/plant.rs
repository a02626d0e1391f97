//! Plant entity model and DTOs.

use std::fmt;

use plantsy_core::error::CoreError;
use plantsy_core::patch;
use plantsy_core::plant::{parse_price, reject_null, require_name, DEFAULT_IN_STOCK};
use plantsy_core::price::Price;
use plantsy_core::types::DbId;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `plants` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Plant {
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub price_cents: Option<i64>,
    pub is_in_stock: Option<bool>,
}

impl Plant {
    pub fn price(&self) -> Option<Price> {
        self.price_cents.map(Price::from_cents)
    }

    /// Price as it appears in JSON: `null` when unset or zero.
    pub fn price_for_json(&self) -> Option<f64> {
        self.price()
            .filter(|price| !price.is_zero())
            .map(Price::to_f64)
    }
}

/// Serializes to exactly `id, name, image, price, is_in_stock`.
impl Serialize for Plant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Plant", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("image", &self.image)?;
        state.serialize_field("price", &self.price_for_json())?;
        state.serialize_field("is_in_stock", &self.is_in_stock)?;
        state.end()
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Plant {}>", self.name)
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a plant. Every key may be omitted; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlant {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    /// Defaults to `true` if omitted or `null`.
    pub is_in_stock: Option<bool>,
}

impl CreatePlant {
    /// Check NOT NULL and price constraints before touching the store.
    pub fn validate(self) -> Result<NewPlant, CoreError> {
        Ok(NewPlant {
            name: require_name(self.name)?,
            image: self.image,
            price: parse_price(self.price)?,
            is_in_stock: self.is_in_stock.unwrap_or(DEFAULT_IN_STOCK),
        })
    }
}

/// DTO for partially updating a plant.
///
/// Each field is tri-state (see [`plantsy_core::patch`]): absent keys keep the
/// stored value and an explicit `null` clears it, except for `name`, which
/// cannot be cleared. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlant {
    #[serde(default, deserialize_with = "patch::present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::present")]
    pub is_in_stock: Option<Option<bool>>,
}

impl UpdatePlant {
    /// Reject a `null` name and convert the price.
    pub fn validate(self) -> Result<PlantChanges, CoreError> {
        Ok(PlantChanges {
            name: self.name.map(|name| reject_null("name", name)).transpose()?,
            image: self.image,
            price: self.price.map(parse_price).transpose()?,
            is_in_stock: self.is_in_stock,
        })
    }
}

// ---------------------------------------------------------------------------
// Validated inputs (repository arguments)
// ---------------------------------------------------------------------------

/// A plant ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub image: Option<String>,
    pub price: Option<Price>,
    pub is_in_stock: bool,
}

/// Field changes for one plant. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantChanges {
    pub name: Option<String>,
    pub image: Option<Option<String>>,
    pub price: Option<Option<Price>>,
    pub is_in_stock: Option<Option<bool>>,
}

impl PlantChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.is_in_stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn aloe() -> Plant {
        Plant {
            id: 1,
            name: "Aloe".to_string(),
            image: Some("aloe.png".to_string()),
            price_cents: Some(1599),
            is_in_stock: Some(true),
        }
    }

    #[test]
    fn serializes_fixed_field_set() {
        let value = serde_json::to_value(aloe()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Aloe",
                "image": "aloe.png",
                "price": 15.99,
                "is_in_stock": true,
            })
        );
    }

    #[test]
    fn missing_and_zero_price_serialize_as_null() {
        let mut plant = aloe();
        plant.price_cents = None;
        assert_eq!(serde_json::to_value(&plant).unwrap()["price"], json!(null));

        plant.price_cents = Some(0);
        assert_eq!(serde_json::to_value(&plant).unwrap()["price"], json!(null));
    }

    #[test]
    fn null_image_stays_null() {
        let mut plant = aloe();
        plant.image = None;
        assert_eq!(serde_json::to_value(&plant).unwrap()["image"], json!(null));
    }

    #[test]
    fn null_stock_flag_stays_null() {
        let mut plant = aloe();
        plant.is_in_stock = None;
        assert_eq!(serde_json::to_value(&plant).unwrap()["is_in_stock"], json!(null));
    }

    #[test]
    fn display_matches_log_format() {
        assert_eq!(aloe().to_string(), "<Plant Aloe>");
    }

    #[test]
    fn create_defaults_stock_flag() {
        let dto: CreatePlant = serde_json::from_value(json!({"name": "Fern"})).unwrap();
        let new = dto.validate().unwrap();
        assert_eq!(
            new,
            NewPlant {
                name: "Fern".to_string(),
                image: None,
                price: None,
                is_in_stock: true,
            }
        );
    }

    #[test]
    fn create_treats_null_stock_flag_as_omitted() {
        let dto: CreatePlant =
            serde_json::from_value(json!({"name": "Fern", "is_in_stock": null})).unwrap();
        assert!(dto.validate().unwrap().is_in_stock);
    }

    #[test]
    fn create_keeps_explicit_false_stock_flag() {
        let dto: CreatePlant =
            serde_json::from_value(json!({"name": "Fern", "is_in_stock": false})).unwrap();
        assert!(!dto.validate().unwrap().is_in_stock);
    }

    #[test]
    fn create_requires_name() {
        let dto: CreatePlant = serde_json::from_value(json!({"price": 3.5})).unwrap();
        assert!(matches!(dto.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn create_ignores_unknown_keys() {
        let dto: CreatePlant =
            serde_json::from_value(json!({"name": "Fern", "colour": "green"})).unwrap();
        assert_eq!(dto.validate().unwrap().name, "Fern");
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let dto: UpdatePlant =
            serde_json::from_value(json!({"price": null, "name": "Ivy"})).unwrap();
        let changes = dto.validate().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Ivy"));
        assert_eq!(changes.price, Some(None));
        assert_eq!(changes.image, None);
        assert_eq!(changes.is_in_stock, None);
    }

    #[test]
    fn empty_update_has_no_changes() {
        let dto: UpdatePlant = serde_json::from_value(json!({})).unwrap();
        assert!(dto.validate().unwrap().is_empty());
    }

    #[test]
    fn update_rejects_null_name() {
        let dto: UpdatePlant = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(matches!(dto.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn update_keeps_null_stock_flag() {
        let dto: UpdatePlant = serde_json::from_value(json!({"is_in_stock": null})).unwrap();
        let changes = dto.validate().unwrap();
        assert_eq!(changes.is_in_stock, Some(None));
        assert!(!changes.is_empty());
    }

    #[test]
    fn update_rounds_price() {
        let dto: UpdatePlant = serde_json::from_value(json!({"price": 4.999})).unwrap();
        let changes = dto.validate().unwrap();
        assert_eq!(changes.price, Some(Some(Price::from_cents(500))));
    }
}
