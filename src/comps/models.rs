//! Data models for item queries and comparable listings.

use serde::{Deserialize, Serialize};

/// Rounds a monetary amount to cents. Exact half-cent ties go to the even cent.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Describes the piece of furniture being priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Item category ("sofa", "dining table", ...)
    pub item: String,
    /// Brand if known
    pub brand: Option<String>,
    /// Condition if known ("like new", "worn", ...)
    pub condition: Option<String>,
}

impl Query {
    /// Creates a normalized query. Blank parts are dropped and a blank item becomes "item".
    pub fn new(item: &str, brand: Option<&str>, condition: Option<&str>) -> Self {
        let item = item.trim();
        Self {
            item: if item.is_empty() { "item".to_string() } else { item.to_string() },
            brand: non_blank(brand),
            condition: non_blank(condition),
        }
    }

    /// Item name with the brand in front, e.g. "IKEA chair".
    pub fn label(&self) -> String {
        match &self.brand {
            Some(brand) => format!("{} {}", brand, self.item),
            None => self.item.clone(),
        }
    }

    /// Free-text search phrase: `<brand> <item> <condition> price`.
    pub fn search_phrase(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(brand) = &self.brand {
            parts.push(brand.as_str());
        }
        parts.push(self.item.as_str());
        if let Some(condition) = &self.condition {
            parts.push(condition.as_str());
        }
        parts.push("price");
        parts.join(" ")
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

/// A comparable listing used as pricing evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comp {
    /// Where the comp came from ("Marketplace", "Web (CSE)", ...)
    pub source: String,
    /// Listing title
    pub title: String,
    /// Price in dollars; 0.0 means no usable price
    pub price: f64,
    /// Listing URL, absent for synthetic comps
    pub url: Option<String>,
}

impl Comp {
    /// Creates a comp with the price clamped to zero and rounded to cents.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        url: Option<String>,
    ) -> Self {
        let price = if price.is_finite() { round2(price.max(0.0)) } else { 0.0 };
        Self { source: source.into(), title: title.into(), price, url }
    }

    /// Returns the price when it can be used as evidence.
    pub fn usable_price(&self) -> Option<f64> {
        (self.price > 0.0).then_some(self.price)
    }
}
