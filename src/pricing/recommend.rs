//! Blends an expected price with comp statistics into a price band.

use crate::comps::{round2, Comp};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Used when there are no comps and no expectation.
const DEFAULT_PRICE: f64 = 50.0;
/// Share of the recommendation taken from the seller's base price.
const BASE_WEIGHT: f64 = 0.6;
/// Share pulled toward the comp average.
const MARKET_WEIGHT: f64 = 0.4;
const MIN_HALF_WIDTH: f64 = 2.0;
const FALLBACK_BAND: f64 = 0.1;
const PRICE_FLOOR: f64 = 1.0;
const MEDIUM_CONFIDENCE_COMPS: usize = 3;

const NOTE_NO_COMPS: &str =
    "Not enough real comp prices found; using your input / default estimate.";
const NOTE_WITHIN: &str = "Your expected price is within the comp range.";
const NOTE_URGENCY: &str =
    "List slightly higher if you can wait; price closer to low for quick sale.";
const NOTE_PHOTOS: &str = "Good photos and clear pickup details increase conversion.";

/// Coarse reliability label based on comp sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
        }
    }
}

/// A priced recommendation with its band and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_price: f64,
    pub low: f64,
    pub high: f64,
    pub confidence: Confidence,
    pub notes: Vec<String>,
}

impl Recommendation {
    /// Rounds to cents and keeps `1.0 <= low <= recommended <= high`.
    fn new(recommended: f64, low: f64, high: f64, confidence: Confidence, notes: Vec<String>) -> Self {
        let low = round2(low.max(PRICE_FLOOR));
        let recommended_price = round2(recommended).max(low);
        let high = round2(high).max(recommended_price);
        Self { recommended_price, low, high, confidence, notes }
    }
}

/// Produces a recommendation. Comps with no usable price are ignored.
pub fn recommend(expected_price: Option<f64>, comps: &[Comp]) -> Recommendation {
    let expected = expected_price.filter(|p| p.is_finite() && *p > 0.0);
    let prices: Vec<f64> = comps.iter().filter_map(Comp::usable_price).collect();

    if prices.is_empty() {
        let rec = expected.unwrap_or(DEFAULT_PRICE);
        debug!("No usable comps, recommending {:.2}", rec);
        return Recommendation::new(
            rec,
            rec * (1.0 - FALLBACK_BAND),
            rec * (1.0 + FALLBACK_BAND),
            Confidence::Low,
            vec![NOTE_NO_COMPS.to_string()],
        );
    }

    let count = prices.len() as f64;
    let avg = prices.iter().sum::<f64>() / count;
    let base = expected.unwrap_or(avg);
    let rec = BASE_WEIGHT * base + MARKET_WEIGHT * avg;

    // population standard deviation
    let variance = prices.iter().map(|p| (p - avg).powi(2)).sum::<f64>() / count;
    let half_width = variance.sqrt().max(MIN_HALF_WIDTH);

    let confidence = if prices.len() >= MEDIUM_CONFIDENCE_COMPS {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let mut notes = Vec::with_capacity(3);
    if let Some(expected) = expected {
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if expected < min {
            notes.push(format!(
                "Your expected price (${:.0}) is below comps; you could list higher.",
                expected
            ));
        } else if expected > max {
            notes.push(format!(
                "Your expected price (${:.0}) is above comps; expect slower interest.",
                expected
            ));
        } else {
            notes.push(NOTE_WITHIN.to_string());
        }
    }
    notes.push(NOTE_URGENCY.to_string());
    notes.push(NOTE_PHOTOS.to_string());

    debug!(
        "avg {:.2} over {} comps, recommending {:.2} +/- {:.2}",
        avg,
        prices.len(),
        rec,
        half_width
    );

    Recommendation::new(rec, rec - half_width, rec + half_width, confidence, notes)
}
