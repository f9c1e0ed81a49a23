use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::auth::AuthStrategy;
use crate::error::Error;
use crate::types::{Envelope, Puzzle, WordSearchRequest};

pub type ApiResult<T> = Result<T, Error>;

/// Production endpoint for the word search generator.
pub const ENDPOINT_URL: &str = "https://api.apiverve.com/v1/wordsearch";

#[derive(Debug, Clone)]
pub struct WordSearchClient {
    endpoint: String,
    client: ReqwestClient,
    auth: Arc<dyn AuthStrategy>, // Using Arc to allow cloning
}

impl WordSearchClient {
    /// Client against the production endpoint with default transport options.
    pub fn new(auth: impl AuthStrategy + 'static) -> Self {
        WordSearchClient {
            endpoint: ENDPOINT_URL.to_string(),
            client: ReqwestClient::new(),
            auth: Arc::new(auth),
        }
    }

    pub fn builder() -> WordSearchClientBuilder {
        WordSearchClientBuilder::default()
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        self.auth.apply_auth(request)
    }

    /// Generates a puzzle from the given words.
    ///
    /// Performs exactly one POST; the client never retries. The request
    /// fields are serialized verbatim, and the service is authoritative
    /// for validating them.
    #[instrument(skip(self, request))]
    pub async fn generate(&self, request: &WordSearchRequest) -> ApiResult<Puzzle> {
        self.execute(request).await
    }

    /// Same call as [`generate`](Self::generate), but lets the caller pick
    /// the payload type, e.g. `serde_json::Value` to keep it opaque.
    #[instrument(skip(self, request))]
    pub async fn execute<T>(&self, request: &WordSearchRequest) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        info!("Sending POST request to URL: {}", self.endpoint);

        let mut req = self.client.post(&self.endpoint);
        req = self.apply_auth(req);
        req = req.json(request);

        match serde_json::to_string(request) {
            Ok(json_body) => {
                debug!("Serialized body: {}", json_body);
            }
            Err(e) => {
                error!("Failed to serialize body: {:?}", e);
                return Err(Error::Decode(e.to_string()));
            }
        }

        let response = req.send().await.map_err(|e| {
            error!(
                "Network error while sending POST request to {}: {:?}",
                self.endpoint, e
            );
            Error::Transport(e)
        })?;

        self.handle_response(response).await
    }

    #[instrument(skip(self, response))]
    async fn handle_response<T>(&self, response: Response) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            error!("Request failed with HTTP status {}", status);
            return Err(Error::HttpStatus { status, body });
        }

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        let envelope: Envelope<T> =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
                error!("Failed to parse JSON response: {}", err);
                Error::Decode(err.to_string())
            })?;

        if envelope.status == "ok" {
            envelope.data.ok_or_else(|| {
                Error::Decode("response reported status ok but carried no data field".to_string())
            })
        } else {
            Err(Error::Api(envelope.error.unwrap_or_else(|| {
                format!("service reported status {:?} with no error message", envelope.status)
            })))
        }
    }
}

/// Options for [`WordSearchClient`]: endpoint override and request timeout.
///
/// No timeout is enforced unless one is set here; it covers the whole
/// round-trip, connect included.
#[derive(Debug, Default)]
pub struct WordSearchClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl WordSearchClientBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self, auth: impl AuthStrategy + 'static) -> ApiResult<WordSearchClient> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(WordSearchClient {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| ENDPOINT_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            client,
            auth: Arc::new(auth),
        })
    }
}
