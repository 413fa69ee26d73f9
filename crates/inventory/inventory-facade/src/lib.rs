//! Inventory Facade
//!
//! High-level API for the inventory policy stage. Re-exports all public
//! types from the inventory stack for convenient usage.

// Re-export SPI traits, models and errors
pub use inventory_spi::*;

// Re-export defaults, ranges and the parameter builder
pub use inventory_api::*;

// Re-export implementations
pub use inventory_core::*;
