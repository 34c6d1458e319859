use std::future::Future;

use serde_json::{Map, Value};

use crate::core::schema::Schema;
use crate::core::table::Table;
use crate::core::{JqClient, JqError, net};

/// Query parameter and response field carrying the continuation key.
pub(crate) const PAGINATION_KEY: &str = "pagination_key";

/// Upper bound on pages followed for one request.
const MAX_PAGES: usize = 10_000;

pub(crate) type Record = Map<String, Value>;

/// Drives a keyed pagination loop.
///
/// `fetch_page` is called with `None` first, then with each `pagination_key` the previous
/// page returned, until a page comes back without one. Records under `data_key` are
/// concatenated in page order.
pub(crate) async fn paginate<F, Fut>(data_key: &str, mut fetch_page: F) -> Result<Vec<Record>, JqError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Value, JqError>>,
{
    let mut out = Vec::new();
    let mut key: Option<String> = None;

    for _ in 0..MAX_PAGES {
        let mut page = fetch_page(key.clone()).await?;
        out.extend(take_records(&mut page, data_key)?);

        let next = match page.get(PAGINATION_KEY) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };
        match next {
            None => return Ok(out),
            Some(n) if key.as_deref() == Some(n.as_str()) => {
                return Err(JqError::Data(format!("pagination key repeated: {n}")));
            }
            Some(n) => key = Some(n),
        }
    }
    Err(JqError::Data(format!("gave up after {MAX_PAGES} pages")))
}

fn take_records(page: &mut Value, data_key: &str) -> Result<Vec<Record>, JqError> {
    let Some(items) = page.get_mut(data_key).map(Value::take) else {
        return Err(JqError::Data(format!("response has no `{data_key}` field")));
    };
    match items {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::Object(m) => Ok(m),
                other => Err(JqError::Data(format!("`{data_key}` holds a non-object: {other}"))),
            })
            .collect(),
        other => Err(JqError::Data(format!("`{data_key}` is not an array: {other}"))),
    }
}

impl JqClient {
    /// All records of `path`, following pagination.
    pub(crate) async fn fetch_records(
        &self,
        path: &str,
        data_key: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Record>, JqError> {
        paginate(data_key, |key| async move {
            match key {
                None => net::get_json(self, path, params).await,
                Some(k) => {
                    let mut p = params.to_vec();
                    p.push((PAGINATION_KEY, k));
                    net::get_json(self, path, &p).await
                }
            }
        })
        .await
    }

    /// Fetches every page of `schema`'s endpoint and normalizes it into a table.
    pub(crate) async fn fetch_table(
        &self,
        schema: &Schema,
        params: &[(&str, String)],
    ) -> Result<Table, JqError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(path = schema.path, ?params, "fetching dataset");

        let records = self.fetch_records(schema.path, schema.data_key, params).await?;
        schema.to_table(records)
    }
}
