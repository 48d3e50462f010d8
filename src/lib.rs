//! furniture-comps - resale price estimates for used furniture
//!
//! Gathers comparable listings (live web search results when configured,
//! deterministic estimates otherwise) and turns them into a recommended
//! price band with confidence and notes.

pub mod agent;
pub mod commands;
pub mod comps;
pub mod config;
pub mod format;
pub mod pricing;
pub mod search;

pub use comps::{Comp, CompAssembler, Query};
pub use config::Config;
pub use pricing::{recommend, Confidence, Estimate, Recommendation};
