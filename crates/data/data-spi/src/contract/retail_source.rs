//! Retail source trait definition.

use crate::error::Result;
use crate::model::{RawTables, SourceVersion};

/// A provider of the three raw retail tables.
///
/// Implementations must be cheap to ask for their [`SourceVersion`]; callers
/// use it to decide whether a previously loaded dataset is still current.
pub trait RetailSource: Send + Sync {
    /// Source name, used in logs.
    fn name(&self) -> &str;

    /// Current version of the underlying data.
    fn version(&self) -> Result<SourceVersion>;

    /// Load the sales, feature and store tables.
    fn load(&self) -> Result<RawTables>;
}
