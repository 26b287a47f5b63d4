//! Short link entity and the create-path outcome types.

/// A persisted short link.
///
/// `key` is the user-facing symbol form, `storage_key` its percent-encoded form
/// used as the store key. `target_url` is whatever was stored at create time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub key: String,
    pub storage_key: String,
    pub target_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(key: String, storage_key: String, target_url: String) -> Self {
        Self {
            key,
            storage_key,
            target_url,
        }
    }
}

/// Input data for creating a short link.
///
/// Bounds on `key` and `length` are enforced by the request DTOs before this
/// struct is built.
#[derive(Debug, Clone, Default)]
pub struct NewShortLink {
    pub url: String,
    pub key: Option<String>,
    pub length: Option<usize>,
}

/// The native-script and ASCII-host renderings of the same short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrls {
    pub native: String,
    pub ascii: String,
}

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The candidate key was free and now maps to the target.
    Created { link: ShortLink, urls: ShortUrls },
    /// The candidate key already maps to a stored value; nothing was written.
    Conflict { key: String },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }
}
