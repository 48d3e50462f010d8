//! CLI command implementations.

pub mod interpret;
pub mod price;

pub use interpret::InterpretCommand;
pub use price::PriceCommand;
