//! Car record model
//!
//! Three shapes of the same record:
//! - [`Car`]: what the store holds
//! - [`CarDraft`]: create input, `year` required, `engine` defaulted
//! - [`CarPatch`]: partial update, every field optional, absence means
//!   "leave the stored value alone"

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};

/// Earliest accepted model year (inclusive)
pub const MIN_YEAR: i32 = 1978;

/// First rejected model year (exclusive upper bound)
pub const MAX_YEAR_EXCLUSIVE: i32 = 2023;

/// Engine assigned when a create omits one
pub const DEFAULT_ENGINE: &str = "V4";

/// Check that `year` lies in `[MIN_YEAR, MAX_YEAR_EXCLUSIVE)`
pub fn validate_year(year: i32) -> CatalogResult<()> {
    if (MIN_YEAR..MAX_YEAR_EXCLUSIVE).contains(&year) {
        Ok(())
    } else {
        Err(CatalogError::validation(format!(
            "year must be >= {} and < {}, got {}",
            MIN_YEAR, MAX_YEAR_EXCLUSIVE, year
        )))
    }
}

fn default_engine() -> Option<String> {
    Some(DEFAULT_ENGINE.to_string())
}

/// A stored car record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_engine")]
    pub engine: Option<String>,
    #[serde(default)]
    pub autonomous: Option<bool>,
    #[serde(default)]
    pub sold: Option<Vec<String>>,
}

impl Car {
    /// Re-check the create-time constraints on an already built record
    pub fn validate(&self) -> CatalogResult<()> {
        validate_year(self.year)
    }

    /// Apply a patch, returning the merged record
    ///
    /// Only fields present in the patch are overwritten.
    pub fn merged(&self, patch: &CarPatch) -> Car {
        let mut car = self.clone();
        if let Some(make) = &patch.make {
            car.make = Some(make.clone());
        }
        if let Some(model) = &patch.model {
            car.model = Some(model.clone());
        }
        if let Some(year) = patch.year {
            car.year = year;
        }
        if let Some(price) = patch.price {
            car.price = Some(price);
        }
        if let Some(engine) = &patch.engine {
            car.engine = Some(engine.clone());
        }
        if let Some(autonomous) = patch.autonomous {
            car.autonomous = Some(autonomous);
        }
        if let Some(sold) = &patch.sold {
            car.sold = Some(sold.clone());
        }
        car
    }
}

/// Input to a create
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CarDraft {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub engine: Option<String>,
    pub autonomous: Option<bool>,
    pub sold: Option<Vec<String>>,
}

impl CarDraft {
    /// Draft with only the required field set
    pub fn with_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// Validate and turn the draft into a storable record
    pub fn into_car(self) -> CatalogResult<Car> {
        let year = self
            .year
            .ok_or_else(|| CatalogError::validation("year is required"))?;
        validate_year(year)?;

        Ok(Car {
            make: self.make,
            model: self.model,
            year,
            price: self.price,
            engine: self.engine.or_else(default_engine),
            autonomous: self.autonomous,
            sold: self.sold,
        })
    }
}

/// Partial update payload
///
/// `None` means the field was not supplied. There is no default
/// materialization here: an empty patch merges to the stored record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CarPatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub engine: Option<String>,
    pub autonomous: Option<bool>,
    pub sold: Option<Vec<String>>,
}

impl CarPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self == &CarPatch::default()
    }

    /// Names of the fields this patch sets, in record order
    pub fn fields_set(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.make.is_some() {
            fields.push("make");
        }
        if self.model.is_some() {
            fields.push("model");
        }
        if self.year.is_some() {
            fields.push("year");
        }
        if self.price.is_some() {
            fields.push("price");
        }
        if self.engine.is_some() {
            fields.push("engine");
        }
        if self.autonomous.is_some() {
            fields.push("autonomous");
        }
        if self.sold.is_some() {
            fields.push("sold");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(validate_year(1978).is_ok());
        assert!(validate_year(2022).is_ok());
        assert!(validate_year(1977).is_err());
        assert!(validate_year(2023).is_err());
    }

    #[test]
    fn test_draft_requires_year() {
        let err = CarDraft::default().into_car().unwrap_err();
        assert_eq!(err, CatalogError::validation("year is required"));
    }

    #[test]
    fn test_draft_defaults_engine() {
        let car = CarDraft::with_year(2000).into_car().unwrap();
        assert_eq!(car.engine.as_deref(), Some("V4"));
        assert_eq!(car.make, None);
        assert_eq!(car.sold, None);
    }

    #[test]
    fn test_draft_keeps_explicit_engine() {
        let draft = CarDraft {
            engine: Some("V8".to_string()),
            ..CarDraft::with_year(1999)
        };
        assert_eq!(draft.into_car().unwrap().engine.as_deref(), Some("V8"));
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let stored = Car {
            make: Some("Toyota".to_string()),
            price: Some(20000.0),
            ..CarDraft::with_year(2000).into_car().unwrap()
        };
        let patch = CarPatch {
            price: Some(25000.0),
            ..Default::default()
        };

        let merged = stored.merged(&patch);
        assert_eq!(merged.make.as_deref(), Some("Toyota"));
        assert_eq!(merged.year, 2000);
        assert_eq!(merged.price, Some(25000.0));
        assert_eq!(merged.engine.as_deref(), Some("V4"));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let stored = CarDraft::with_year(1990).into_car().unwrap();
        let patch = CarPatch::default();
        assert!(patch.is_empty());
        assert_eq!(stored.merged(&patch), stored);
    }

    #[test]
    fn test_fields_set_order() {
        let patch = CarPatch {
            sold: Some(vec![]),
            make: Some("Ford".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.fields_set(), vec!["make", "sold"]);
    }

    #[test]
    fn test_car_deserialize_defaults_engine() {
        let car: Car = serde_json::from_str(r#"{"year": 2010, "make": "Audi"}"#).unwrap();
        assert_eq!(car.engine.as_deref(), Some("V4"));
        assert_eq!(car.make.as_deref(), Some("Audi"));
        assert_eq!(car.autonomous, None);
    }
}
