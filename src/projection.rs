//! Per-row display fields: which price is shown, how it is printed, and which badge
//! an item gets. Nothing here decides filtering or ordering beyond [`active_price`].

use crate::item::Item;
use crate::policy::EconomyPolicy;
use crate::{normalize, statics};
use serde::{Deserialize, Serialize};

/// Which price field is preferred for display and price sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    Unit,
    #[default]
    Stack,
}

impl PriceMode {
    pub fn label(self) -> &'static str {
        match self {
            PriceMode::Unit => statics::EN_PRICE_MODE_UNIT,
            PriceMode::Stack => statics::EN_PRICE_MODE_STACK,
        }
    }
}

/// The price selected for an item, and the field it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePrice {
    pub value: f64,
    pub mode: PriceMode,
}

/// Preferred field for `mode` if present, otherwise the other field, otherwise none.
pub fn active_price(item: &Item, mode: PriceMode) -> Option<ActivePrice> {
    let unit = item.price_unit.map(|value| ActivePrice {
        value,
        mode: PriceMode::Unit,
    });
    let stack = item.price_stack.map(|value| ActivePrice {
        value,
        mode: PriceMode::Stack,
    });
    match mode {
        PriceMode::Stack => stack.or(unit),
        PriceMode::Unit => unit.or(stack),
    }
}

pub fn active_value(item: &Item, mode: PriceMode) -> Option<f64> {
    active_price(item, mode).map(|p| p.value)
}

/// Print a price amount with magnitude-tiered precision.
///
/// Integers get no decimals; below 1 up to 4 fraction digits, below 10 up to 3,
/// below 100 up to 2, otherwise 1. Halves round away from zero. Trailing zeros and
/// a trailing point are dropped.
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    let digits: usize = if value.fract() == 0.0 {
        0
    } else if magnitude < 1.0 {
        4
    } else if magnitude < 10.0 {
        3
    } else if magnitude < 100.0 {
        2
    } else {
        1
    };

    // Exact binary ties (1.0625 from 68 / 64) round half away from zero, not to even.
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    let mut s = format!("{rounded:.digits$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// Display string for the item's active price, or its note when the price is unknown.
pub fn format_price(item: &Item, mode: PriceMode, currency: &str) -> String {
    match active_value(item, mode) {
        Some(v) => format!("{} {currency}", format_amount(v)),
        None => item
            .price_note
            .clone()
            .unwrap_or_else(|| statics::EN_PRICE_UNDETERMINED.to_string()),
    }
}

/// Visual class for an obtainability tag. Styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObtainabilityClass {
    Farmable,
    Limited,
    Standard,
    Other,
}

impl ObtainabilityClass {
    pub fn badge(self) -> &'static str {
        match self {
            ObtainabilityClass::Farmable => statics::BADGE_FARMABLE,
            ObtainabilityClass::Limited => statics::BADGE_LIMITED,
            ObtainabilityClass::Standard => statics::BADGE_STANDARD,
            ObtainabilityClass::Other => statics::BADGE_OTHER,
        }
    }
}

pub fn classify(obtainability: &str) -> ObtainabilityClass {
    let tag = normalize::fold(obtainability);
    let is = |a: &str, b: &str| tag == normalize::fold(a) || tag == normalize::fold(b);
    if is(statics::TAG_FARMABLE, statics::TAG_FARMABLE_EN) {
        ObtainabilityClass::Farmable
    } else if is(statics::TAG_LIMITED, statics::TAG_LIMITED_EN) {
        ObtainabilityClass::Limited
    } else if is(statics::TAG_STANDARD, statics::TAG_STANDARD_EN) {
        ObtainabilityClass::Standard
    } else {
        ObtainabilityClass::Other
    }
}

/// Everything a view needs to draw one catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub obtainability: String,
    pub badge: ObtainabilityClass,
    pub icon_key: String,
    /// e.g. "per стак" or "per unit", matching the field the price came from.
    pub trade_unit: String,
    pub price_text: String,
    pub price_known: bool,
    pub minimum_price_text: Option<String>,
}

pub fn project_row(
    item: &Item,
    mode: PriceMode,
    currency: &str,
    policy: Option<&EconomyPolicy>,
) -> RowView {
    let active = active_price(item, mode);
    let trade_unit = match active.map(|p| p.mode) {
        Some(PriceMode::Stack) => format!("{} {}", statics::EN_PER_PREFIX, item.trade_unit_label),
        Some(PriceMode::Unit) => statics::EN_PER_UNIT.to_string(),
        None => statics::EN_EMPTY.to_string(),
    };
    let minimum_price_text = policy
        .and_then(|p| p.minimum_price_for(&item.key))
        .map(|m| {
            format!(
                "{} {currency} / {}",
                format_amount(m.min_price_ars),
                m.trade_count
            )
        });

    RowView {
        key: item.key.clone(),
        title: item.name_display.clone(),
        subtitle: item.name_alt.clone(),
        category: item.category.clone(),
        obtainability: item.obtainability.clone(),
        badge: classify(&item.obtainability),
        icon_key: item.icon_key.clone().unwrap_or_else(|| item.key.clone()),
        trade_unit,
        price_text: format_price(item, mode, currency),
        price_known: active.is_some(),
        minimum_price_text,
    }
}
