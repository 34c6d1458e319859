//! Core components of the `jquants-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`JqClient`] and its builder, with the token manager behind them.
//! - The primary [`JqError`] type.
//! - Credential resolution ([`ConfigLoader`]).
//! - The tabular model ([`Table`], [`Cell`]) and the per-endpoint [`Schema`]s.
//! - Range orchestration ([`RangeFetch`]) and the per-date [`TableCache`].

/// The main client (`JqClient`), builder, and configuration.
pub mod client;
/// The primary error type (`JqError`) for the crate.
pub mod error;
/// Credential resolution from config files and the environment.
pub mod config;
/// Per-date table cache.
pub mod cache;
/// Per-date fan-out over a calendar range.
pub mod range;
/// Endpoint schemas and record normalization.
pub mod schema;
/// The table type returned by every endpoint.
pub mod table;

#[cfg(feature = "dataframe")]
pub mod dataframe;

pub(crate) mod net;
pub(crate) mod pagination;
pub(crate) mod query;
pub(crate) mod services;

// convenient re-exports so most code can just `use crate::core::JqClient`
pub use cache::{CsvCache, TableCache};
pub use client::{AuthRetryConfig, Backoff, JqClient, JqClientBuilder, RetryConfig, TokenLifetimes};
pub use config::{ConfigLoader, Credentials, Settings};
pub use error::JqError;
pub use range::{CalendarDate, RangeFetch, date_range, today_in_tokyo};
pub use schema::{Schema, Variant};
pub use table::{Cell, Table};
