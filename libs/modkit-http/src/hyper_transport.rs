//! Default [`HttpTransport`] on top of `hyper-util`'s pooled client.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::USER_AGENT;
use http::{HeaderMap, HeaderValue, Method, Request, Uri};
use http_body_util::{BodyExt, Empty};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use crate::config::HttpClientConfig;
use crate::error::TransportError;
use crate::response::HttpResponse;
use crate::transport::HttpTransport;

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Pooled HTTP/1.1 client speaking both `http` and `https`.
///
/// Cheap to share behind an `Arc`; connections are reused across calls.
#[derive(Clone)]
pub struct HyperTransport {
    client: HttpsClient,
    timeout: Option<Duration>,
    user_agent: Option<HeaderValue>,
}

impl HyperTransport {
    /// Build a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configured user agent is not a valid header value.
    pub fn new(cfg: &HttpClientConfig) -> Result<Self, TransportError> {
        let user_agent = cfg
            .user_agent
            .as_deref()
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|e| TransportError::InvalidConfig(format!("user_agent: {e}")))?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self {
            client,
            timeout: cfg.timeout,
            user_agent,
        })
    }

    async fn send(
        &self,
        url: &str,
        request: Request<Empty<Bytes>>,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_owned(),
                reason: format!("failed to read response body: {e}"),
            })?
            .to_bytes();

        Ok(HttpResponse::new(parts.status, parts.headers, body))
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    #[tracing::instrument(skip(self, headers), fields(status))]
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse, TransportError> {
        let uri: Uri = url
            .parse()
            .map_err(|e: http::uri::InvalidUri| TransportError::InvalidUrl {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        let mut request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Empty::<Bytes>::new())
            .map_err(|e| TransportError::InvalidUrl {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        *request.headers_mut() = headers;
        if let Some(ua) = &self.user_agent
            && !request.headers().contains_key(USER_AGENT)
        {
            request.headers_mut().insert(USER_AGENT, ua.clone());
        }

        let response = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.send(url, request))
                .await
                .map_err(|_| TransportError::Timeout {
                    url: url.to_owned(),
                    timeout,
                })??,
            None => self.send(url, request).await?,
        };

        tracing::Span::current().record("status", response.status().as_u16());
        Ok(response)
    }
}
