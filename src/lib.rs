//! Async client for the APIVerve Word Search Generator API.
//!
//! Builds a JSON request, attaches the `x-api-key` credential, POSTs to the
//! fixed endpoint and decodes the `{status, data, error}` envelope into a
//! typed [`Puzzle`] or a discriminated [`Error`]. All generation happens
//! server-side; this crate is only the wire contract.
//!
//! ```no_run
//! use wordsearch_client::{ApiKeyAuth, WordSearchClient, WordSearchRequest, Difficulty};
//!
//! # async fn run() -> Result<(), wordsearch_client::Error> {
//! let client = WordSearchClient::new(ApiKeyAuth::from_env()?);
//! let request = WordSearchRequest::builder()
//!     .words(vec!["PUZZLE".to_string(), "SEARCH".to_string(), "WORD".to_string()])
//!     .size(15u32)
//!     .difficulty(Difficulty::Medium)
//!     .build()
//!     .expect("words is set");
//! let puzzle = client.generate(&request).await?;
//! println!("{} words placed", puzzle.word_count);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{ApiKeyAuth, AuthStrategy, API_KEY_ENV};
pub use client::{ApiResult, WordSearchClient, WordSearchClientBuilder, ENDPOINT_URL};
pub use error::Error;
pub use types::{
    Cell, Difficulty, Envelope, Placement, Puzzle, PuzzleImage, WordSearchRequest,
    WordSearchRequestBuilder,
};
