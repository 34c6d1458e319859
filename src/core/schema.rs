//! Per-endpoint output schemas and record normalization.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::core::JqError;
use crate::core::table::{Cell, Table};

/// A wider column set returned to some accounts, recognized by a sentinel field.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Field whose presence in the first record selects this variant.
    pub sentinel: &'static str,
    /// Full column list of the variant.
    pub columns: &'static [&'static str],
}

/// What one endpoint returns and how its rows are shaped.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Short dataset name, used for cache keys.
    pub name: &'static str,
    /// Endpoint path relative to the API base.
    pub path: &'static str,
    /// Name of the JSON array holding the records.
    pub data_key: &'static str,
    /// Standard column list, in output order.
    pub columns: &'static [&'static str],
    /// Optional extended column list.
    pub extended: Option<Variant>,
    /// Columns parsed into [`Cell::Date`].
    pub date_columns: &'static [&'static str],
    /// Sort keys, in priority order.
    pub sort_keys: &'static [&'static str],
}

impl Schema {
    /// The column list matching these records: the extended one when the first record
    /// carries the sentinel field, the standard one otherwise.
    #[must_use]
    pub fn columns_for(&self, records: &[Map<String, Value>]) -> &'static [&'static str] {
        match (self.extended, records.first()) {
            (Some(v), Some(first)) if first.contains_key(v.sentinel) => v.columns,
            _ => self.columns,
        }
    }

    /// Normalizes raw records into a typed, trimmed and sorted table.
    ///
    /// No records yields an empty table with the standard columns. Fields outside the
    /// chosen column list are dropped; columns a record lacks are `Null`.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Data`] if a date column holds something that is not a date.
    pub fn to_table(&self, records: Vec<Map<String, Value>>) -> Result<Table, JqError> {
        let columns = self.columns_for(&records);
        if records.is_empty() {
            return Ok(Table::empty(columns));
        }

        let rows = records
            .into_iter()
            .map(|mut rec| {
                columns
                    .iter()
                    .map(|&c| {
                        let v = rec.remove(c).unwrap_or(Value::Null);
                        if self.date_columns.contains(&c) {
                            date_cell(c, v)
                        } else {
                            Ok(Cell::from_json(v))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = Table::from_rows(columns.iter().map(|c| (*c).to_string()).collect(), rows)?;
        table.sort_by_columns(self.sort_keys)?;
        Ok(table)
    }
}

fn date_cell(column: &str, v: Value) -> Result<Cell, JqError> {
    match v {
        Value::Null => Ok(Cell::Null),
        Value::String(s) if s.is_empty() => Ok(Cell::Null),
        Value::String(s) => parse_api_date(&s)
            .map(Cell::Date)
            .ok_or_else(|| JqError::Data(format!("{column}: not a date: {s}"))),
        other => Err(JqError::Data(format!("{column}: not a date: {other}"))),
    }
}

/// Parses the API's date spellings, `YYYY-MM-DD` and `YYYYMMDD`.
#[must_use]
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .ok()
}
