use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// HuggingFace Inference API endpoint for the Flux Dev model. Fixed: the
/// binary never reads it from the environment.
pub const HF_API_URL: &str =
    "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-dev";

/// Upper bound on a single upstream call. No retries on any path.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Fixed by the relay, not client-configurable.
const GUIDANCE_SCALE: f64 = 3.5;

fn default_dimension() -> u32 {
    1024
}

fn default_steps() -> u32 {
    28
}

/// Inbound body for `POST /generate`. Every field defaults so a partial body
/// still parses; an absent prompt becomes the empty string and fails
/// validation with a 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_dimension")]
    pub height: u32,
    #[serde(default = "default_steps")]
    pub steps: u32,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub image: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct InferencePayload<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    width: u32,
    height: u32,
    num_inference_steps: u32,
    guidance_scale: f64,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: String,
}

/// Outbound client for the Flux inference endpoint. One shared connection
/// pool for the process lifetime; the bearer token is immutable after
/// startup.
#[derive(Clone)]
pub struct FluxClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl FluxClient {
    pub fn new(token: &str) -> Self {
        Self::with_endpoint(HF_API_URL.to_string(), token, REQUEST_TIMEOUT)
    }

    /// Tests point this at a mock server and shorten the timeout; production
    /// code always goes through [`FluxClient::new`].
    pub fn with_endpoint(endpoint: String, token: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            token: token.to_string(),
        }
    }

    /// Issues the single synchronous upstream call and returns the raw image
    /// bytes on success. Failures are classified by status code, first match
    /// wins: 503 is the model warming up, 401 a rejected token, any other
    /// non-200 is mirrored back with the upstream's own error message when
    /// its body yields one.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>, RelayError> {
        let payload = InferencePayload {
            inputs: &request.prompt,
            parameters: InferenceParameters {
                width: request.width,
                height: request.height,
                num_inference_steps: request.steps,
                guidance_scale: GUIDANCE_SCALE,
            },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_len = request.prompt.len(),
            "dispatching inference request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        match status.as_u16() {
            503 => Err(RelayError::ModelLoading),
            401 => Err(RelayError::UpstreamAuth),
            200 => {
                let bytes = response.bytes().await.map_err(classify_transport_error)?;
                Ok(bytes.to_vec())
            }
            code => {
                let fallback = format!("API Error: {code}");
                let message = match response.json::<UpstreamErrorBody>().await {
                    Ok(body) => body.error,
                    Err(_) => fallback,
                };
                Err(RelayError::Upstream {
                    status: code,
                    message,
                })
            }
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::Internal(err.to_string())
    }
}
