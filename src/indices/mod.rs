//! Index OHLC: every published index, and TOPIX on its own endpoint.

mod schema;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{JqClient, JqError, Schema, Table};

/// Output schema of [`IndicesBuilder`].
pub const INDICES_SCHEMA: Schema = schema::INDICES;
/// Output schema of [`topix`].
pub const TOPIX_SCHEMA: Schema = schema::TOPIX;

/// A builder for daily index prices (`/indices`).
///
/// The API needs either an index code or a date.
#[derive(Clone)]
pub struct IndicesBuilder {
    client: JqClient,
    code: Option<String>,
    date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl IndicesBuilder {
    /// Creates a new `IndicesBuilder`.
    pub fn new(client: &JqClient) -> Self {
        Self {
            client: client.clone(),
            code: None,
            date: None,
            from: None,
            to: None,
        }
    }

    /// Index code, e.g. `"0000"` for TOPIX.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Every index on one day. Overrides `from` / `to`.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// First day of the period (inclusive).
    #[must_use]
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Last day of the period (inclusive).
    #[must_use]
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Fetches the prices, sorted by `Date` then `Code`.
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
        q.opt("code", self.code.as_deref())
            .date_or_period(self.date, self.from, self.to);
        self.client.fetch_table(&INDICES_SCHEMA, q.as_slice()).await
    }
}

/// TOPIX daily OHLC (`/indices/topix`), sorted by `Date`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn topix(
    client: &JqClient,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.date("from", from).date("to", to);
    client.fetch_table(&TOPIX_SCHEMA, q.as_slice()).await
}
