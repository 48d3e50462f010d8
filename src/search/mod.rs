//! Live comp lookup through a web search API.

mod client;
mod models;

pub use client::{CseClient, SearchError, WebSearch};
pub use models::SearchHit;
