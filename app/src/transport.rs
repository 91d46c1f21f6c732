//! ureq-backed executor for the core's plain-data requests.

use tasklist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

/// Owns one configured ureq agent for the life of the session.
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    /// Build an agent with status-as-error disabled so 4xx/5xx responses
    /// reach the core's parsers as data rather than `Err`.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute one request. Any I/O failure (connect, DNS, read) becomes
    /// `ApiError::Transport`; HTTP status interpretation stays in the core.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => {
                self.agent.post(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                self.agent.put(&req.path).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
