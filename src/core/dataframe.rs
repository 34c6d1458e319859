use chrono::NaiveDate;
use polars::prelude::*;

use crate::core::table::{Cell, Table};

/// Trait for converting fetched tables into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bool,
    Int,
    Float,
    Date,
    Text,
}

/// The narrowest dtype holding every non-null cell of a column.
fn infer(cells: &[&Cell]) -> Kind {
    let mut kind: Option<Kind> = None;
    for c in cells {
        let k = match c {
            Cell::Null => continue,
            Cell::Bool(_) => Kind::Bool,
            Cell::Int(_) => Kind::Int,
            Cell::Float(_) => Kind::Float,
            Cell::Date(_) => Kind::Date,
            Cell::Str(_) | Cell::Json(_) => Kind::Text,
        };
        kind = Some(match (kind, k) {
            (None, k) => k,
            (Some(a), b) if a == b => a,
            (Some(Kind::Int | Kind::Float), Kind::Int | Kind::Float) => Kind::Float,
            _ => Kind::Text,
        });
    }
    kind.unwrap_or(Kind::Text)
}

fn epoch_days(d: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    i32::try_from(d.signed_duration_since(epoch).num_days()).unwrap_or(i32::MAX)
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut out = Vec::with_capacity(self.columns().len());
        for name in self.columns() {
            let cells = self.column(name).unwrap_or_default();
            let col = match infer(&cells) {
                Kind::Bool => Column::new(
                    name.as_str().into(),
                    cells.iter().map(|c| match c {
                        Cell::Bool(b) => Some(*b),
                        _ => None,
                    }).collect::<Vec<_>>(),
                ),
                Kind::Int => Column::new(
                    name.as_str().into(),
                    cells.iter().map(|c| match c {
                        Cell::Int(i) => Some(*i),
                        _ => None,
                    }).collect::<Vec<_>>(),
                ),
                Kind::Float => Column::new(name.as_str().into(), cells.iter().map(|c| c.as_f64()).collect::<Vec<_>>()),
                Kind::Date => Column::new(
                    name.as_str().into(),
                    cells.iter().map(|c| c.as_date().map(epoch_days)).collect::<Vec<_>>(),
                )
                .cast(&DataType::Date)?,
                Kind::Text => Column::new(
                    name.as_str().into(),
                    cells
                        .iter()
                        .map(|c| (!c.is_null()).then(|| c.to_string()))
                        .collect::<Vec<_>>(),
                ),
            };
            out.push(col);
        }
        DataFrame::new(out)
    }
}
