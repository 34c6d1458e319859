//! Listed issues and the static sector / market-segment reference tables.

mod schema;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{Cell, JqClient, JqError, Schema, Table};

/// Output schema of [`ListedInfoBuilder`].
pub const INFO_SCHEMA: Schema = schema::INFO;
/// Output schema of [`sections`].
pub const SECTIONS_SCHEMA: Schema = schema::SECTIONS;

/// A builder for the listed-issue master (`/listed/info`).
///
/// Without a code every issue is returned; without a date, the latest master.
#[derive(Clone)]
pub struct ListedInfoBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
}

impl ListedInfoBuilder {
    /// Creates a new `ListedInfoBuilder`.
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            code: None,
            date: None,
        }
    }

    /// Restricts the result to one issue code (4 or 5 digits).
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The master as of this date.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Fetches the master, sorted by `Code`.
    ///
    /// Accounts that receive margin information get the extended column set, which adds
    /// `MarginCode` and `MarginCodeName`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(code = ?self.code, date = ?self.date))
    )]
    pub async fn fetch(self) -> Result<Table, JqError> {
        let mut q = Query::new();
        q.opt("code", self.code.as_deref()).date("date", self.date);
        self.client.fetch_table(&INFO_SCHEMA, q.as_slice()).await
    }
}

/// The listed-issue master with English sector and market-segment names joined in.
///
/// Adds `Sector17CodeNameEnglish`, `Sector33CodeNameEnglish` and
/// `MarketCodeNameEnglish`; rows whose code is unknown get nulls there.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn list(
    client: &JqClient,
    code: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<Table, JqError> {
    let mut info = ListedInfoBuilder::new(client);
    if let Some(c) = code {
        info = info.code(c);
    }
    if let Some(d) = date {
        info = info.date(d);
    }
    let info = info.fetch().await?;

    let s17 = sector17().select(&["Sector17Code", "Sector17CodeNameEnglish"])?;
    let s33 = sector33().select(&["Sector33Code", "Sector33CodeNameEnglish"])?;
    let seg = market_segments().select(&["MarketCode", "MarketCodeNameEnglish"])?;

    let mut out = info
        .left_join(&s17, "Sector17Code")?
        .left_join(&s33, "Sector33Code")?
        .left_join(&seg, "MarketCode")?;
    out.sort_by_columns(&["Code"])?;
    Ok(out)
}

/// Market sections known to the API (`/listed/sections`), sorted by `SectionCode`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn sections(client: &JqClient) -> Result<Table, JqError> {
    client.fetch_table(&SECTIONS_SCHEMA, &[]).await
}

fn static_table<const N: usize>(columns: [&str; N], rows: &[[&str; N]]) -> Table {
    let rows = rows
        .iter()
        .map(|r| r.iter().map(|v| Cell::Str((*v).to_string())).collect())
        .collect();
    // every row has N cells, so this cannot fail
    Table::from_rows(columns.iter().map(|c| (*c).to_string()).collect(), rows)
        .unwrap_or_else(|_| Table::empty(&columns))
}

/// The 17-sector classification: code, Japanese name and English name, in code order.
#[must_use]
pub fn sector17() -> Table {
    static_table(schema::SECTOR_17_COLUMNS, schema::SECTOR_17)
}

/// The 33-sector classification with the 17-sector code each maps to, in code order.
#[must_use]
pub fn sector33() -> Table {
    static_table(schema::SECTOR_33_COLUMNS, schema::SECTOR_33)
}

/// Market segment codes and names, in code order.
#[must_use]
pub fn market_segments() -> Table {
    static_table(schema::MARKET_SEGMENT_COLUMNS, schema::MARKET_SEGMENTS)
}
