//! Error module containing error types and result aliases

mod inventory_error;

pub use inventory_error::{InventoryError, Result};
