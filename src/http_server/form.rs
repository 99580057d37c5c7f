//! Car form decoding
//!
//! Forms arrive as urlencoded key/value pairs. Empty values count as
//! absent. `sold` may repeat, and each value may hold comma-separated
//! tokens. Anything that fails to parse is a validation error.

use crate::catalog::{CarDraft, CarPatch, CatalogError, CatalogResult};

/// Raw car form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub price: Option<String>,
    pub engine: Option<String>,
    pub autonomous: Option<String>,
    pub sold: Option<Vec<String>>,
    pub min_id: Option<String>,
}

impl CarForm {
    /// Collect known fields from decoded pairs; unknown keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = CarForm::default();

        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let value = value.to_string();

            match key.as_str() {
                "make" => form.make = Some(value),
                "model" => form.model = Some(value),
                "year" => form.year = Some(value),
                "price" => form.price = Some(value),
                "engine" => form.engine = Some(value),
                "autonomous" => form.autonomous = Some(value),
                "min_id" => form.min_id = Some(value),
                "sold" => {
                    let tokens = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string);
                    form.sold.get_or_insert_with(Vec::new).extend(tokens);
                }
                _ => {}
            }
        }

        form
    }

    /// Build a create draft and the id offset
    pub fn into_draft(self) -> CatalogResult<(CarDraft, u32)> {
        let offset = match self.min_id.as_deref() {
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                CatalogError::validation(format!(
                    "min_id must be a non-negative integer, got '{}'",
                    raw
                ))
            })?,
            None => 0,
        };

        let draft = CarDraft {
            year: self.year.as_deref().map(parse_year).transpose()?,
            price: self.price.as_deref().map(parse_price).transpose()?,
            autonomous: self.autonomous.as_deref().map(parse_bool).transpose()?,
            make: self.make,
            model: self.model,
            engine: self.engine,
            sold: self.sold,
        };
        Ok((draft, offset))
    }

    /// Build a partial update; `min_id` has no meaning here and is ignored
    pub fn into_patch(self) -> CatalogResult<CarPatch> {
        Ok(CarPatch {
            year: self.year.as_deref().map(parse_year).transpose()?,
            price: self.price.as_deref().map(parse_price).transpose()?,
            autonomous: self.autonomous.as_deref().map(parse_bool).transpose()?,
            make: self.make,
            model: self.model,
            engine: self.engine,
            sold: self.sold,
        })
    }
}

/// Value of the first non-empty `key` in decoded pairs
pub fn field<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
        .find(|v| !v.is_empty())
}

fn parse_year(raw: &str) -> CatalogResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| CatalogError::validation(format!("year must be an integer, got '{}'", raw)))
}

fn parse_price(raw: &str) -> CatalogResult<f64> {
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(CatalogError::validation(format!(
            "price must be a number, got '{}'",
            raw
        ))),
    }
}

fn parse_bool(raw: &str) -> CatalogResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(CatalogError::validation(format!(
            "autonomous must be a boolean, got '{}'",
            raw
        ))),
    }
}
