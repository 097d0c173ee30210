//! Upstream URL construction.

use crate::config::DEFAULT_API_BASE_URL;

/// Builds resource URLs under one API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base_url: String,
}

impl ApiRoutes {
    /// Create routes under `base_url`; trailing slashes are dropped.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
        }
    }

    /// The API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the detail document for an entity id or name.
    pub fn entity_url(&self, entity_id: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, entity_id.trim_matches('/'))
    }

    /// URL of the single-call entity listing.
    pub fn listing_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={limit}", self.base_url)
    }
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
