//! Low-level HTTP transport — `CoinsHttp`.
//!
//! Implements [`Transport`] with reqwest: flattens the query record, applies
//! the merged options and maps non-2xx responses onto [`HttpError`].
//! Requests are sent once; there is no retry loop.

use crate::error::HttpError;
use crate::http::query::to_query_pairs;
use crate::transport::{ApiRequest, ApiResponse, Endpoint, Transport};

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed transport for the coins REST API.
#[derive(Debug, Clone)]
pub struct CoinsHttp {
    base_url: String,
    client: Client,
}

impl CoinsHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Wrap an existing reqwest client (shared pools, custom TLS, proxies).
    pub fn from_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: Endpoint, base_override: Option<&str>) -> String {
        let base = base_override
            .map(|b| b.trim_end_matches('/'))
            .unwrap_or(&self.base_url);
        format!("{}{}", base, endpoint.path())
    }
}

impl Transport for CoinsHttp {
    async fn get<Q, R>(
        &self,
        endpoint: Endpoint,
        request: ApiRequest<Q>,
    ) -> Result<ApiResponse<R>, HttpError>
    where
        Q: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let ApiRequest { query, options } = request;
        let params = to_query_pairs(&query)?;
        let url = self.url_for(endpoint, options.base_url.as_deref());

        let mut req = self.client.get(&url).query(&params);
        if let Some(headers) = &options.headers {
            for (name, value) in headers {
                req = req.header(name.as_str(), value.as_str());
            }
        }
        if let Some(timeout) = options.timeout {
            req = req.timeout(timeout);
        }

        tracing::debug!(endpoint = endpoint.name(), params = params.len(), "GET {}", url);

        let resp = req.send().await.map_err(map_send_error)?;
        let status = resp.status().as_u16();
        tracing::debug!(endpoint = endpoint.name(), status, "response");

        if resp.status().is_success() {
            let data = resp.json::<R>().await?;
            return Ok(ApiResponse { status, data });
        }

        Err(error_for_status(resp).await)
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

async fn error_for_status(resp: Response) -> HttpError {
    let status_code = resp.status().as_u16();
    let retry_after_ms = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .and_then(|secs| secs.checked_mul(1000));
    let body_text = resp.text().await.unwrap_or_default();

    match status_code {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body_text),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest {
            status: status_code,
            body: body_text,
        },
        _ => HttpError::ServerError {
            status: status_code,
            body: body_text,
        },
    }
}
