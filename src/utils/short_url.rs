//! Public short URL rendering.

use crate::domain::entities::ShortUrls;
use crate::utils::uri_encoding::decode_component;

/// Host names under which short links are published.
///
/// Both hosts resolve to this service; they only differ in presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHosts {
    /// Host in its native script, e.g. `短.コム`.
    pub native: String,
    /// The same host in its ASCII-compatible (punycode) form, e.g. `xn--s7y.xn--tckwe`.
    pub ascii: String,
}

impl PublicHosts {
    pub fn new(native: impl Into<String>, ascii: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            ascii: ascii.into(),
        }
    }

    /// Builds both URL forms for a percent-encoded storage key.
    ///
    /// The native form embeds the decoded symbols; the ASCII form keeps the
    /// percent-encoded key in the path. A key that does not decode to UTF-8 is
    /// used as-is in both.
    pub fn render(&self, storage_key: &str) -> ShortUrls {
        let decoded = decode_component(storage_key)
            .map(|k| k.into_owned())
            .unwrap_or_else(|_| storage_key.to_string());

        ShortUrls {
            native: format!("https://{}/{}", self.native, decoded),
            ascii: format!("https://{}/{}", self.ascii, storage_key),
        }
    }
}

/// Converts a host name to its ASCII-compatible form via IDNA.
///
/// Returns `None` if the host is not a valid domain name.
pub fn to_ascii_host(host: &str) -> Option<String> {
    let parsed = url::Url::parse(&format!("https://{}/", host)).ok()?;
    parsed.host_str().map(str::to_string)
}
