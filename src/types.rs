use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Parameters for the word search generator endpoint.
///
/// `words` is passed through in caller order; the service expects 3-20
/// entries but the client performs no validation of its own. `size` and
/// `difficulty` are omitted from the wire body when unset, matching the
/// service's other SDKs.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(public, setter(into))]
pub struct WordSearchRequest {
    pub words: Vec<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl WordSearchRequest {
    pub fn builder() -> WordSearchRequestBuilder {
        WordSearchRequestBuilder::default()
    }
}

/// Difficulty level; affects which directions words may run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Wire envelope wrapping every response from the service.
///
/// Exactly one of `data` / `error` is meaningful, discriminated by
/// `status` (`"ok"` on success).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<u16>,
}

/// Generated puzzle, as returned in the envelope's `data` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub grid: Vec<Vec<String>>,
    pub words: Vec<Placement>,
    pub word_count: u32,
    pub size: u32,
    pub difficulty: String,
    pub html: String,
    pub image: PuzzleImage,
    pub solution_image: PuzzleImage,
}

/// Where a single word was hidden in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub direction: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

/// Rendered puzzle image hosted by the service; the download URL expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleImage {
    pub image_name: String,
    pub format: String,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
    pub expires: u64,
}
