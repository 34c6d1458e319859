//! Per-date table cache used by the cached range fetches.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::core::JqError;
use crate::core::schema::{Schema, parse_api_date};
use crate::core::table::{Cell, Table};

/// Storage for one table per (dataset, date).
///
/// A hit in [`TableCache::get`] replaces the network fetch for that date entirely.
pub trait TableCache: Send + Sync {
    /// The cached table for `dataset` on `date`, if present.
    ///
    /// `schema` restores the typed date columns.
    fn get(&self, dataset: &str, date: NaiveDate, schema: &Schema) -> Result<Option<Table>, JqError>;

    /// Stores `table` for `dataset` on `date`, replacing any previous entry.
    fn put(&self, dataset: &str, date: NaiveDate, table: &Table) -> Result<(), JqError>;
}

/// CSV files laid out as `{dir}/{yyyy}/{dataset}_{yyyymmdd}.csv`.
///
/// Each field holds the JSON literal of its cell and an empty field is a null, so a
/// reloaded table has the same cell kinds as the one that was stored.
#[derive(Debug, Clone)]
pub struct CsvCache {
    dir: PathBuf,
}

impl CsvCache {
    /// A cache rooted at `dir`. Directories are created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache root.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the entry for `dataset` on `date`.
    #[must_use]
    pub fn path_for(&self, dataset: &str, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{:04}", date.year()))
            .join(format!("{dataset}_{}.csv", date.format("%Y%m%d")))
    }
}

impl TableCache for CsvCache {
    fn get(&self, dataset: &str, date: NaiveDate, schema: &Schema) -> Result<Option<Table>, JqError> {
        let path = self.path_for(dataset, date);
        if !path.is_file() {
            return Ok(None);
        }

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(&path)?;
        let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let is_date: Vec<bool> = columns
            .iter()
            .map(|c| schema.date_columns.contains(&c.as_str()))
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let row = record
                .iter()
                .zip(&is_date)
                .map(|(field, &date_col)| decode_field(field, date_col))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), rows = rows.len(), "cache hit");

        Table::from_rows(columns, rows).map(Some)
    }

    fn put(&self, dataset: &str, date: NaiveDate, table: &Table) -> Result<(), JqError> {
        let path = self.path_for(dataset, date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // written aside and renamed so readers never see a partial file
        let tmp = path.with_extension("csv.tmp");
        {
            let mut w = csv::Writer::from_path(&tmp)?;
            w.write_record(table.columns())?;
            for row in table.rows() {
                w.write_record(row.iter().map(encode_cell))?;
            }
            w.flush()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn encode_cell(cell: &Cell) -> String {
    if cell.is_null() {
        String::new()
    } else {
        cell.to_json().to_string()
    }
}

fn decode_field(field: &str, date_col: bool) -> Result<Cell, JqError> {
    if field.is_empty() {
        return Ok(Cell::Null);
    }
    let v: Value = serde_json::from_str(field)?;
    match v {
        Value::String(s) if date_col => parse_api_date(&s)
            .map(Cell::Date)
            .ok_or_else(|| JqError::Data(format!("cached date is malformed: {s}"))),
        other => Ok(Cell::from_json(other)),
    }
}
