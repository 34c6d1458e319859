//! Nikkei 225 index options.

mod schema;

use chrono::NaiveDate;

use crate::core::query::Query;
use crate::core::{CalendarDate, JqClient, JqError, RangeFetch, Schema, Table};

/// Output schema of [`index_option`].
pub const INDEX_OPTION_SCHEMA: Schema = schema::INDEX_OPTION;

/// Every index option quote of one trading day (`/option/index_option`), sorted by
/// `Date` then `Code`.
///
/// # Errors
///
/// Returns an error if the request fails or the response is malformed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn index_option(client: &JqClient, date: NaiveDate) -> Result<Table, JqError> {
    let mut q = Query::new();
    q.date("date", Some(date));
    client.fetch_table(&INDEX_OPTION_SCHEMA, q.as_slice()).await
}

/// Index option quotes for each day from `start` to `end` inclusive.
///
/// # Errors
///
/// Fails on an invalid range, or with the first error of any day's fetch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn index_option_range(
    client: &JqClient,
    start: impl CalendarDate,
    end: impl CalendarDate,
) -> Result<Table, JqError> {
    let range = RangeFetch::new(start, end)?
        .workers(client.max_workers())
        .sort_keys(INDEX_OPTION_SCHEMA.sort_keys)
        .base_columns(INDEX_OPTION_SCHEMA.columns);

    client.id_token().await?;
    range.run(|date| index_option(client, date)).await
}
