//! Edit boundary: raw pharmacist input in, validated patch out.
//!
//! Nothing reaches the store until every provided field has parsed. A
//! rejected edit leaves the inventory exactly as it was.

use serde::{Deserialize, Deserializer, Serialize};

use rxstock_core::{DomainError, DomainResult, ItemId};

use crate::price::Price;

/// An edit as submitted from the inventory dialog, fields still unparsed.
///
/// Each field accepts either a string or a JSON number; both end up as the
/// raw text that [`StockEdit::validate`] parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEdit {
    pub id: ItemId,
    #[serde(default, deserialize_with = "raw_field")]
    pub current_stock: Option<String>,
    #[serde(default, deserialize_with = "raw_field")]
    pub minimum_stock: Option<String>,
    #[serde(default, deserialize_with = "raw_field")]
    pub unit_price: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl RawField {
    fn into_text(self) -> String {
        match self {
            RawField::Text(text) => text,
            RawField::Unsigned(n) => n.to_string(),
            RawField::Signed(n) => n.to_string(),
            RawField::Float(n) => n.to_string(),
        }
    }
}

fn raw_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawField>::deserialize(deserializer)?.map(RawField::into_text))
}

/// Validated changes to apply to one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPatch {
    pub current_stock: Option<u32>,
    pub minimum_stock: Option<u32>,
    pub unit_price: Option<Price>,
}

impl StockPatch {
    pub fn is_empty(&self) -> bool {
        self.current_stock.is_none() && self.minimum_stock.is_none() && self.unit_price.is_none()
    }
}

impl StockEdit {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            current_stock: None,
            minimum_stock: None,
            unit_price: None,
        }
    }

    pub fn with_current_stock(mut self, raw: impl Into<String>) -> Self {
        self.current_stock = Some(raw.into());
        self
    }

    pub fn with_minimum_stock(mut self, raw: impl Into<String>) -> Self {
        self.minimum_stock = Some(raw.into());
        self
    }

    pub fn with_unit_price(mut self, raw: impl Into<String>) -> Self {
        self.unit_price = Some(raw.into());
        self
    }

    /// Parse every provided field, or reject the whole edit.
    pub fn validate(&self) -> DomainResult<StockPatch> {
        let current_stock = self
            .current_stock
            .as_deref()
            .map(|raw| parse_stock("current_stock", raw))
            .transpose()?;

        let minimum_stock = self
            .minimum_stock
            .as_deref()
            .map(|raw| parse_stock("minimum_stock", raw))
            .transpose()?;

        if minimum_stock == Some(0) {
            return Err(DomainError::validation("minimum_stock must be greater than zero"));
        }

        let unit_price = self.unit_price.as_deref().map(Price::parse_decimal).transpose()?;

        let patch = StockPatch {
            current_stock,
            minimum_stock,
            unit_price,
        };
        if patch.is_empty() {
            return Err(DomainError::validation("edit does not change any field"));
        }
        Ok(patch)
    }
}

fn parse_stock(field: &str, raw: &str) -> DomainResult<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        DomainError::validation(format!("{field}: '{raw}' is not a whole number"))
    })?;

    if value < 0 {
        return Err(DomainError::validation(format!("{field}: must not be negative")));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::validation(format!("{field}: {value} is too large")))
}
