//! A finished pricing run: what was asked, the evidence, and the answer.

use super::recommend::{recommend, Recommendation};
use crate::comps::{Comp, Query};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub query: Query,
    pub expected_price: Option<f64>,
    pub comps: Vec<Comp>,
    pub recommendation: Recommendation,
}

impl Estimate {
    /// Prices `query` from already assembled comps.
    pub fn new(query: Query, expected_price: Option<f64>, comps: Vec<Comp>) -> Self {
        let recommendation = recommend(expected_price, &comps);
        Self { query, expected_price, comps, recommendation }
    }

    /// Number of comps that fed the statistics.
    pub fn usable_comps(&self) -> usize {
        self.comps.iter().filter(|c| c.usable_price().is_some()).count()
    }
}
