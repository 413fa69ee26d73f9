//! CSV-backed retail source.
//!
//! Reads the Kaggle-style `train.csv`, `features.csv` and `stores.csv` files.

use crate::parse::{parse_date, parse_flag, parse_optional_number};
use data_api::DataConfig;
use data_spi::{
    DataError, FileStamp, RawTables, Result, RetailSource, SalesRecord, SourceVersion,
    StoreFeatureRecord, StoreMetadata, StoreType,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SalesRow {
    #[serde(rename = "Store")]
    store: u32,
    #[serde(rename = "Dept")]
    dept: u32,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Weekly_Sales")]
    weekly_sales: f64,
    #[serde(rename = "IsHoliday")]
    is_holiday: String,
}

#[derive(Debug, Deserialize)]
struct FeatureRow {
    #[serde(rename = "Store")]
    store: u32,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Temperature")]
    temperature: String,
    #[serde(rename = "Fuel_Price")]
    fuel_price: String,
    #[serde(rename = "MarkDown1")]
    markdown1: String,
    #[serde(rename = "MarkDown2")]
    markdown2: String,
    #[serde(rename = "MarkDown3")]
    markdown3: String,
    #[serde(rename = "MarkDown4")]
    markdown4: String,
    #[serde(rename = "MarkDown5")]
    markdown5: String,
    #[serde(rename = "CPI")]
    cpi: String,
    #[serde(rename = "Unemployment")]
    unemployment: String,
    #[serde(rename = "IsHoliday")]
    is_holiday: String,
}

#[derive(Debug, Deserialize)]
struct StoreRow {
    #[serde(rename = "Store")]
    store: u32,
    #[serde(rename = "Type")]
    store_type: String,
    #[serde(rename = "Size")]
    size: f64,
}

/// Retail source reading three CSV files from a directory.
#[derive(Debug, Clone)]
pub struct CsvRetailSource {
    config: DataConfig,
}

impl CsvRetailSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// Source over the standard file names in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(DataConfig::new(dir.as_ref()))
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Read the sales file.
    pub fn load_sales(&self) -> Result<Vec<SalesRecord>> {
        let path = self.config.sales_path();
        read_rows(&path, |row: SalesRow| {
            Ok(SalesRecord {
                store: row.store,
                dept: row.dept,
                date: parse_date(&row.date).map_err(|e| e.to_string())?,
                weekly_sales: row.weekly_sales,
                is_holiday: parse_flag(&row.is_holiday)?,
            })
        })
    }

    /// Read the store feature file.
    pub fn load_features(&self) -> Result<Vec<StoreFeatureRecord>> {
        let path = self.config.features_path();
        read_rows(&path, |row: FeatureRow| {
            Ok(StoreFeatureRecord {
                store: row.store,
                date: parse_date(&row.date).map_err(|e| e.to_string())?,
                temperature: parse_optional_number(&row.temperature)?,
                fuel_price: parse_optional_number(&row.fuel_price)?,
                markdowns: [
                    parse_optional_number(&row.markdown1)?,
                    parse_optional_number(&row.markdown2)?,
                    parse_optional_number(&row.markdown3)?,
                    parse_optional_number(&row.markdown4)?,
                    parse_optional_number(&row.markdown5)?,
                ],
                cpi: parse_optional_number(&row.cpi)?,
                unemployment: parse_optional_number(&row.unemployment)?,
                is_holiday: parse_flag(&row.is_holiday)?,
            })
        })
    }

    /// Read the store metadata file.
    pub fn load_stores(&self) -> Result<Vec<StoreMetadata>> {
        let path = self.config.stores_path();
        read_rows(&path, |row: StoreRow| {
            Ok(StoreMetadata {
                store: row.store,
                store_type: row
                    .store_type
                    .parse::<StoreType>()
                    .map_err(|e| e.to_string())?,
                size: row.size,
            })
        })
    }
}

impl RetailSource for CsvRetailSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn version(&self) -> Result<SourceVersion> {
        let stamps = self
            .config
            .paths()
            .into_iter()
            .map(|path| {
                let meta = fs::metadata(&path).map_err(|e| unavailable(&path, e))?;
                Ok(FileStamp {
                    len: meta.len(),
                    modified: meta.modified().ok(),
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SourceVersion::new(
            self.config.data_dir().display().to_string(),
            stamps,
        ))
    }

    fn load(&self) -> Result<RawTables> {
        Ok(RawTables {
            sales: self.load_sales()?,
            features: self.load_features()?,
            stores: self.load_stores()?,
        })
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> DataError {
    DataError::SourceUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Deserialize every row of `path` and convert it with `convert`.
fn read_rows<R, T, F>(path: &Path, convert: F) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    F: Fn(R) -> std::result::Result<T, String>,
{
    let file = File::open(path).map_err(|e| unavailable(path, e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut out = Vec::new();
    for (idx, result) in reader.deserialize::<R>().enumerate() {
        // header occupies line 1
        let line = idx as u64 + 2;
        let parse_error = |reason: String| DataError::ParseError {
            source_name: source_name.clone(),
            line,
            reason,
        };

        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(unavailable(path, e)),
            Err(e) => return Err(parse_error(e.to_string())),
        };
        out.push(convert(row).map_err(parse_error)?);
    }

    Ok(out)
}
