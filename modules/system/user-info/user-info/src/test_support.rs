#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use discovery_sdk::{DiscoveryClient, DiscoveryError};
use http::{HeaderMap, StatusCode};
use modkit_http::{HttpResponse, HttpTransport, TransportError};
use parking_lot::Mutex;

use crate::config::UserInfoConfig;
use crate::domain::Service;

pub const AUTH_BASE_URL: &str = "http://backend.test/api/auth";

#[must_use]
pub fn encode_segment(value: &serde_json::Value) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).unwrap())
}

/// A compact JWT with the given payload and a dummy signature.
#[must_use]
pub fn jwt(claims: &serde_json::Value) -> String {
    let header = encode_segment(&serde_json::json!({ "alg": "ES256", "typ": "JWT" }));
    format!("{header}.{}.c2lnbmF0dXJl", encode_segment(claims))
}

/// Discovery that always answers with the same base URL.
pub struct FixedDiscovery {
    base_url: String,
    calls: AtomicUsize,
}

impl FixedDiscovery {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscoveryClient for FixedDiscovery {
    async fn base_url(&self, service_name: &str) -> Result<String, DiscoveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if service_name == "auth" {
            Ok(self.base_url.clone())
        } else {
            Err(DiscoveryError::UnknownService(service_name.to_owned()))
        }
    }
}

/// Discovery that always fails.
pub struct FailingDiscovery;

#[async_trait]
impl DiscoveryClient for FailingDiscovery {
    async fn base_url(&self, _service_name: &str) -> Result<String, DiscoveryError> {
        Err(DiscoveryError::Unavailable("registry offline".to_owned()))
    }
}

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// Transport answering from a queue of scripted results.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.responses.lock().push_back(Ok(HttpResponse::new(
            status,
            HeaderMap::new(),
            body.to_owned(),
        )));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.responses.lock().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_owned(),
            headers,
        });
        self.responses
            .lock()
            .pop_front()
            .expect("unexpected request: no scripted response left")
    }
}

pub fn service_with(
    discovery: Arc<dyn DiscoveryClient>,
    transport: Arc<dyn HttpTransport>,
) -> Service {
    Service::new(discovery, transport, &UserInfoConfig::default())
}
