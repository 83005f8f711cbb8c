use url::Url;

/// Resolves storage keys to client-usable URLs.
///
/// The real deployment will hand out time-limited signed URLs from the object
/// store; until then every key resolves against a configured public base, and
/// this is the one seam a presigner has to replace.
#[derive(Debug, Clone)]
pub struct StorageLinks {
    base: Url,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid asset base URL: {0}")]
pub struct InvalidBaseUrl(#[from] url::ParseError);

impl StorageLinks {
    pub fn new(base: &str) -> Result<Self, InvalidBaseUrl> {
        // Trailing slash so Url::join treats the last path segment as a directory
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        Ok(Self {
            base: Url::parse(&normalized)?,
        })
    }

    pub fn from_config() -> Result<Self, InvalidBaseUrl> {
        Self::new(&crate::config::config().delivery.asset_base_url)
    }

    /// URL for one stored object. Keys are slash-separated paths like
    /// `tenant/album/image.jpg`.
    pub fn object_url(&self, storage_key: &str) -> String {
        match self.base.join(storage_key.trim_start_matches('/')) {
            Ok(url) => url.to_string(),
            // Join only fails on keys that cannot form a path; fall back to
            // simple concatenation rather than dropping the reference.
            Err(_) => format!("{}{}", self.base, storage_key),
        }
    }
}
