use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{JqClient, JqError};

/// The URL without its query string, for error messages.
pub(crate) fn display_url(url: &Url) -> String {
    let mut u = url.clone();
    u.set_query(None);
    u.to_string()
}

/// Turns a non-2xx response into [`JqError::Status`], embedding the response body.
pub(crate) async fn ensure_success(resp: Response) -> Result<Response, JqError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = display_url(resp.url());
    let body = match resp.text().await {
        Ok(text) => text,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%url, error = %_e, "could not read error response body");
            String::new()
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), %url, "request failed");

    Err(JqError::Status {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Reads the body as UTF-8 text and decodes it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, JqError> {
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Authenticated GET of `path` (relative to the client's base URL).
pub(crate) async fn get_json(
    client: &JqClient,
    path: &str,
    params: &[(&str, String)],
) -> Result<serde_json::Value, JqError> {
    let mut url = client.base_url().join(path)?;
    if !params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params {
            qp.append_pair(k, v);
        }
    }

    let id_token = client.id_token().await?;
    let req = client.http().get(url).bearer_auth(id_token);
    let resp = ensure_success(client.send_with_retry(req).await?).await?;
    read_json(resp).await
}
