//! Comparable listings: models, price extraction, synthetic estimates and
//! live/synthetic selection.

pub mod assembler;
pub mod extract;
pub mod models;
pub mod synthetic;

pub use assembler::{CompAssembler, LiveLookup};
pub use extract::{extract_price, PatternPriceExtractor, PriceExtractor};
pub use models::{round2, Comp, Query};
pub use synthetic::synthesize;
