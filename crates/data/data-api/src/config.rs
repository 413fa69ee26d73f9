//! Data source configuration types.

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory searched when none is configured.
pub const DEFAULT_DATA_DIR: &str = "data/";

/// Location of the three CSV sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the source files
    pub data_dir: PathBuf,
    /// Sales file name (Store, Dept, Date, Weekly_Sales, IsHoliday)
    pub sales_file: String,
    /// Feature file name (Store, Date, Temperature, Fuel_Price, MarkDown1-5, CPI, Unemployment, IsHoliday)
    pub features_file: String,
    /// Store metadata file name (Store, Type, Size)
    pub stores_file: String,
}

impl DataConfig {
    /// Create a configuration with the standard file names in `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn sales_path(&self) -> PathBuf {
        self.data_dir.join(&self.sales_file)
    }

    pub fn features_path(&self) -> PathBuf {
        self.data_dir.join(&self.features_file)
    }

    pub fn stores_path(&self) -> PathBuf {
        self.data_dir.join(&self.stores_file)
    }

    /// All three source paths in load order.
    pub fn paths(&self) -> [PathBuf; 3] {
        [self.sales_path(), self.features_path(), self.stores_path()]
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            sales_file: "train.csv".to_string(),
            features_file: "features.csv".to_string(),
            stores_file: "stores.csv".to_string(),
        }
    }
}

/// Builder for DataConfig.
#[derive(Debug, Default)]
pub struct DataConfigBuilder {
    data_dir: Option<PathBuf>,
    sales_file: Option<String>,
    features_file: Option<String>,
    stores_file: Option<String>,
}

impl DataConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Set the sales file name.
    pub fn sales_file(mut self, name: &str) -> Self {
        self.sales_file = Some(name.to_string());
        self
    }

    /// Set the features file name.
    pub fn features_file(mut self, name: &str) -> Self {
        self.features_file = Some(name.to_string());
        self
    }

    /// Set the stores file name.
    pub fn stores_file(mut self, name: &str) -> Self {
        self.stores_file = Some(name.to_string());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<DataConfig> {
        let defaults = DataConfig::default();
        let config = DataConfig {
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            sales_file: self.sales_file.unwrap_or(defaults.sales_file),
            features_file: self.features_file.unwrap_or(defaults.features_file),
            stores_file: self.stores_file.unwrap_or(defaults.stores_file),
        };

        for (field, value) in [
            ("sales_file", &config.sales_file),
            ("features_file", &config.features_file),
            ("stores_file", &config.stores_file),
        ] {
            if value.trim().is_empty() {
                return Err(DataError::ConfigError(format!("{} must not be empty", field)));
            }
        }

        Ok(config)
    }
}
