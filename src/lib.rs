//! jquants-rs: ergonomic client for the J-Quants API.
//!
//! [`JqClient`] owns the login state: it logs in with a mail address and password (or
//! starts from a refresh token), exchanges the refresh token for an id token, and keeps
//! both fresh for every request. Each API area has its own module, and every call
//! returns a [`Table`] with the endpoint's documented columns, typed dates and a
//! deterministic row order.
//!
//! ```no_run
//! use jquants_rs::{JqClient, listed, prices};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), jquants_rs::JqError> {
//! let client = JqClient::builder()
//!     .mail_address("me@example.com")
//!     .password("secret")
//!     .build()?;
//!
//! let issues = listed::list(&client, None, None).await?;
//! let week = prices::price_range(&client, "2024-01-04", "2024-01-10").await?;
//! println!("{} issues, {} quotes", issues.len(), week.len());
//! # Ok(())
//! # }
//! ```
//!
//! Range helpers fan out one request per calendar day, `max_workers` at a time
//! (default 5); [`fins::statements_range`] and [`fins::fs_details_range`] can read and
//! fill a [`CsvCache`].

pub mod core;

pub mod fins;
pub mod indices;
pub mod listed;
pub mod markets;
pub mod options;
pub mod prices;

pub use crate::core::{
    AuthRetryConfig, Backoff, CalendarDate, Cell, ConfigLoader, Credentials, CsvCache,
    JqClient, JqClientBuilder, JqError, RangeFetch, RetryConfig, Schema, Settings, Table,
    TableCache, TokenLifetimes, today_in_tokyo,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
