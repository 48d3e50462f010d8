//! Price recommendation from comps and the seller's expectation.

mod estimate;
mod recommend;

pub use estimate::Estimate;
pub use recommend::{recommend, Confidence, Recommendation};
