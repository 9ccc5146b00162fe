use crate::item::Item;
use crate::projection::{PriceMode, active_value};

/// Summary numbers shown above the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    pub total_count: usize,
    pub matched_count: usize,
    pub rendered_count: usize,
    /// Items in the full set without an active price.
    pub unknown_price_count: usize,
    /// Mean active price over the full set's known prices, 2 decimals; 0 when none is known.
    pub average_known_price: f64,
}

pub fn compute_stats(
    all: &[Item],
    matched: &[&Item],
    visible_limit: usize,
    mode: PriceMode,
) -> CatalogStats {
    let mut known = 0usize;
    let mut sum = 0.0f64;
    for item in all {
        if let Some(price) = active_value(item, mode) {
            known += 1;
            sum += price;
        }
    }

    let average_known_price = if known == 0 {
        0.0
    } else {
        round2(sum / known as f64)
    };

    CatalogStats {
        total_count: all.len(),
        matched_count: matched.len(),
        rendered_count: visible_limit.min(matched.len()),
        unknown_price_count: all.len() - known,
        average_known_price,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
