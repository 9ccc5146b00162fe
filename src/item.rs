use crate::error::{CatalogError, Result};
use crate::normalize;
use serde::Deserialize;

/// An item record exactly as it appears in the catalog document.
///
/// Price fields are `Option` so that a missing field, an explicit `null` and a
/// real `0` stay distinguishable: the first two become `None`, zero is `Some(0.0)`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub key: String,
    #[serde(alias = "name_display")]
    pub name_ru: String,
    #[serde(default, alias = "name_alt")]
    pub name_en: String,
    pub category: String,
    #[serde(default)]
    pub obtainability: String,
    #[serde(default, alias = "trade_unit_label")]
    pub trade_label: Option<String>,
    #[serde(default, alias = "trade_unit_count")]
    pub trade_count: Option<u32>,
    #[serde(default)]
    pub price_unit: Option<f64>,
    #[serde(default)]
    pub price_stack: Option<f64>,
    /// Generator output: price for `trade_count` units.
    #[serde(default)]
    pub price_ars: Option<f64>,
    #[serde(default)]
    pub price_note: Option<String>,
    #[serde(default)]
    pub icon_key: Option<String>,
}

/// A catalog row, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub key: String,
    pub name_display: String,
    pub name_alt: String,
    pub category: String,
    pub obtainability: String,
    pub trade_unit_label: String,
    pub trade_unit_count: u32,
    pub price_unit: Option<f64>,
    pub price_stack: Option<f64>,
    pub price_note: Option<String>,
    pub icon_key: Option<String>,
    pub search_index: String,
    pub(crate) collation_key: String,
}

impl Item {
    /// Validate a wire record and derive the load-time fields.
    /// `index` is the record position, used only for error messages.
    pub fn from_record(index: usize, rec: ItemRecord) -> Result<Self> {
        let invalid = |reason| CatalogError::InvalidItem {
            index,
            key: rec.key.clone(),
            reason,
        };

        if rec.key.trim().is_empty() {
            return Err(invalid("empty key"));
        }
        if rec.category.trim().is_empty() {
            return Err(invalid("empty category"));
        }
        if rec.name_ru.trim().is_empty() {
            return Err(invalid("empty display name"));
        }
        let trade_unit_count = rec.trade_count.unwrap_or(1);
        if trade_unit_count == 0 {
            return Err(invalid("trade_count must be positive"));
        }
        for price in [rec.price_unit, rec.price_stack, rec.price_ars]
            .into_iter()
            .flatten()
        {
            if !price.is_finite() {
                return Err(invalid("price is not a finite number"));
            }
        }

        // Explicit unit/stack prices win; otherwise derive both from the generator's
        // per-trade-unit `price_ars`.
        let price_stack = rec.price_stack.or(rec.price_ars);
        let price_unit = rec
            .price_unit
            .or_else(|| rec.price_ars.map(|p| p / f64::from(trade_unit_count)));

        let name_alt = if rec.name_en.trim().is_empty() {
            rec.key.replace('_', " ")
        } else {
            rec.name_en
        };
        let trade_unit_label = rec
            .trade_label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| trade_unit_count.to_string());
        let price_note = rec.price_note.filter(|n| !n.trim().is_empty());

        let search_index = normalize::search_index([
            rec.name_ru.as_str(),
            name_alt.as_str(),
            rec.key.as_str(),
            rec.category.as_str(),
            rec.obtainability.as_str(),
        ]);
        let collation_key = normalize::fold(&rec.name_ru);

        Ok(Self {
            key: rec.key,
            name_display: rec.name_ru,
            name_alt,
            category: rec.category,
            obtainability: rec.obtainability,
            trade_unit_label,
            trade_unit_count,
            price_unit,
            price_stack,
            price_note,
            icon_key: rec.icon_key,
            search_index,
            collation_key,
        })
    }
}
