//! Forecast Facade
//!
//! High-level API for the forecast stage. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export SPI traits, frames and errors
pub use forecast_spi::*;

// Re-export configuration
pub use forecast_api::*;

// Re-export implementations
pub use forecast_core::*;
