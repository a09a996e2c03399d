use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use super::validation::LeadForm;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not reach the lead endpoint: {0}")]
    Network(String),
    #[error("lead endpoint answered with status {0}")]
    Rejected(u16),
    #[error("lead could not be encoded: {0}")]
    Encode(String),
}

/// Where a validated lead goes. The simulated transport stands in until a
/// real endpoint is configured at build time.
#[derive(Clone, Debug, PartialEq)]
pub enum LeadTransport {
    Simulated { latency_ms: u32 },
    Http { endpoint: String },
}

impl LeadTransport {
    pub fn from_config() -> Self {
        match config::get_lead_endpoint() {
            Some(endpoint) => LeadTransport::Http {
                endpoint: endpoint.to_string(),
            },
            None => LeadTransport::Simulated {
                latency_ms: config::SIMULATED_SUBMIT_LATENCY_MS,
            },
        }
    }

    pub async fn deliver(&self, lead: &LeadForm) -> Result<(), SubmitError> {
        match self {
            LeadTransport::Simulated { latency_ms } => {
                TimeoutFuture::new(*latency_ms).await;
                let payload =
                    serde_json::to_string(lead).map_err(|e| SubmitError::Encode(e.to_string()))?;
                log!("Lead captured (simulated):", payload);
                Ok(())
            }
            LeadTransport::Http { endpoint } => {
                let response = Request::post(endpoint)
                    .json(lead)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected(response.status()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_the_failure() {
        assert_eq!(
            SubmitError::Rejected(503).to_string(),
            "lead endpoint answered with status 503"
        );
        assert!(SubmitError::Network("offline".into()).to_string().contains("offline"));
    }

    #[test]
    fn lead_payload_uses_select_values() {
        let lead = crate::form::validation::valid_lead();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["employees"], "11-50");
        assert_eq!(json["email"], "joao@empresa.com.br");
    }
}
