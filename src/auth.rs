use reqwest::RequestBuilder;
use std::fmt::{self, Debug};

use crate::error::Error;

/// Environment variable consulted by [`ApiKeyAuth::from_env`].
pub const API_KEY_ENV: &str = "APIVERVE_API_KEY";

pub trait AuthStrategy: Send + Sync {
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder;
}

impl Debug for dyn AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthStrategy")
    }
}

/// API key credential, sent as the `x-api-key` header on every request.
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        ApiKeyAuth {
            api_key: api_key.into(),
        }
    }

    /// Reads the key from the `APIVERVE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(ApiKeyAuth::new(key)),
            _ => Err(Error::MissingCredential(format!(
                "environment variable {API_KEY_ENV} is not set"
            ))),
        }
    }
}

impl AuthStrategy for ApiKeyAuth {
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("x-api-key", &self.api_key)
    }
}

impl Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"***") // Don't expose the actual key
            .finish()
    }
}
