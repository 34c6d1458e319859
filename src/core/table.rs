//! A small column-ordered table, the return type of every endpoint.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

use crate::core::JqError;

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing or null value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A calendar date (only produced for the date columns of a schema).
    Date(NaiveDate),
    /// A nested JSON array or object, kept as-is.
    Json(Value),
}

impl Cell {
    /// Converts a JSON scalar into a cell; arrays and objects become [`Cell::Json`].
    #[must_use]
    pub fn from_json(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Str(s),
            other => Self::Json(other),
        }
    }

    /// The JSON value of this cell. Dates become `YYYY-MM-DD` strings.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Float(f) => Value::from(*f),
            Self::Str(s) => Value::String(s.clone()),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::Json(v) => v.clone(),
        }
    }

    /// Whether this is [`Cell::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The text of a [`Cell::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The date of a [`Cell::Date`].
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Numeric value of an `Int` or `Float` cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Date(_) => 2,
            Self::Str(_) => 3,
            Self::Json(_) => 4,
            Self::Null => 5,
        }
    }

    /// Total order used for sorting: numbers compare numerically across `Int`/`Float`,
    /// nulls sort last, and otherwise unlike kinds are grouped by kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Json(a), Self::Json(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

/// Rows of [`Cell`]s under an ordered list of column names.
///
/// A table with zero rows still carries its full column list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// A table with the given columns and no rows.
    #[must_use]
    pub fn empty<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from rows laid out in `columns` order.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Data`] if a row's width differs from the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, JqError> {
        if let Some(bad) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(JqError::Data(format!(
                "row {bad} has {} cells, expected {}",
                rows[bad].len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, each laid out in [`columns`](Self::columns) order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of column `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let i = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[i]).collect())
    }

    /// The cell at `row` in column `name`.
    #[must_use]
    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let i = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[i])
    }

    fn require_index(&self, name: &str) -> Result<usize, JqError> {
        self.column_index(name)
            .ok_or_else(|| JqError::Data(format!("no column named {name}")))
    }

    /// Stacks tables vertically.
    ///
    /// The result has `base` first, then every other column in the order it is first
    /// seen; cells a table does not have are `Null`.
    #[must_use]
    pub fn concat<S: AsRef<str>>(tables: Vec<Self>, base: &[S]) -> Self {
        let mut columns: Vec<String> = base.iter().map(|c| c.as_ref().to_string()).collect();
        for t in &tables {
            for c in &t.columns {
                if !columns.contains(c) {
                    columns.push(c.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(tables.iter().map(Self::len).sum());
        for t in tables {
            let map: Vec<Option<usize>> = columns.iter().map(|c| t.column_index(c)).collect();
            for mut row in t.rows {
                rows.push(
                    map.iter()
                        .map(|src| src.map_or(Cell::Null, |i| std::mem::replace(&mut row[i], Cell::Null)))
                        .collect(),
                );
            }
        }
        Self { columns, rows }
    }

    /// Stable sort by the given key columns, in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Data`] if a key column does not exist.
    pub fn sort_by_columns<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<(), JqError> {
        let idx = keys
            .iter()
            .map(|k| self.require_index(k.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.rows.sort_by(|a, b| {
            idx.iter()
                .map(|&i| a[i].total_cmp(&b[i]))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    /// A new table with only the given columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Data`] if a column does not exist.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<Self, JqError> {
        let idx = columns
            .iter()
            .map(|c| self.require_index(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| idx.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        })
    }

    /// Appends the non-key columns of `other`, matching rows on column `on`.
    ///
    /// Every row of `self` is kept; rows without a match get `Null`s.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::Data`] if either table lacks column `on`.
    pub fn left_join(&self, other: &Self, on: &str) -> Result<Self, JqError> {
        let left_key = self.require_index(on)?;
        let right_key = other.require_index(on)?;

        let mut lookup: HashMap<String, usize> = HashMap::new();
        for (i, row) in other.rows.iter().enumerate() {
            if !row[right_key].is_null() {
                lookup.entry(row[right_key].to_string()).or_insert(i);
            }
        }

        let extra: Vec<usize> = (0..other.columns.len()).filter(|&i| i != right_key).collect();
        let mut columns = self.columns.clone();
        columns.extend(extra.iter().map(|&i| other.columns[i].clone()));

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let hit = if row[left_key].is_null() {
                    None
                } else {
                    lookup.get(&row[left_key].to_string()).map(|&j| &other.rows[j])
                };
                let mut out = row.clone();
                out.extend(
                    extra
                        .iter()
                        .map(|&i| hit.map_or(Cell::Null, |r| r[i].clone())),
                );
                out
            })
            .collect();

        Ok(Self { columns, rows })
    }
}
