pub mod client;

pub use client::ReqwestTransport;

use async_trait::async_trait;
use crate::errors::TransportError;
use crate::models::{HttpRequest, NetworkService};

/// Response as seen by the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn body_string(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Sends candidate requests to a network service. Implementations must be
/// safe to share across concurrent verification calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        request: &HttpRequest,
        service: &NetworkService,
    ) -> Result<HttpResponse, TransportError>;
}
