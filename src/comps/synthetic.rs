//! Deterministic fallback comps from a category/brand price table.

use super::models::{Comp, Query};

const DEFAULT_BASE: f64 = 30.0;

/// Marketplace multipliers, then the retail estimate.
const MARKETPLACE_MULTIPLIERS: [f64; 3] = [0.85, 0.95, 1.05];
const RETAIL_MULTIPLIER: f64 = 1.45;

pub const MARKETPLACE_SOURCE: &str = "Marketplace";
pub const RETAIL_SOURCE: &str = "Retail (est.)";

/// Base price for an item/brand pair.
///
/// The brand rule runs first and a recognized item category then overrides
/// it, so an IKEA sofa is priced like any other sofa.
pub fn base_price(item: &str, brand: Option<&str>) -> f64 {
    let mut base = DEFAULT_BASE;

    if brand.is_some_and(|b| b.trim().eq_ignore_ascii_case("ikea")) {
        base = 35.0;
    }

    match item.trim().to_lowercase().as_str() {
        "sofa" | "couch" | "sectional" => base = 250.0,
        "table" | "dining table" => base = 120.0,
        "chair" => base = 35.0,
        _ => {}
    }

    base
}

/// Builds the four estimated comps for a query.
pub fn synthesize(query: &Query) -> Vec<Comp> {
    let base = base_price(&query.item, query.brand.as_deref());
    let label = query.label();

    let mut comps: Vec<Comp> = MARKETPLACE_MULTIPLIERS
        .iter()
        .map(|m| Comp::new(MARKETPLACE_SOURCE, format!("{} (similar)", label), base * m, None))
        .collect();

    comps.push(Comp::new(
        RETAIL_SOURCE,
        format!("New {} (estimate)", label),
        base * RETAIL_MULTIPLIER,
        None,
    ));

    comps
}
