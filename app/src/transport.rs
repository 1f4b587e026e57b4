//! Blocking HTTP transport backed by ureq.

use tracing::debug;
use users_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes core `HttpRequest`s with a shared ureq agent.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses
/// come back as data and the core decides what they mean.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = &self.agent;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;
        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, headers, body })
    }
}
