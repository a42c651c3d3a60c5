use anyhow::Result;
use url::Url;

use crate::stats::{OriginData, OriginStats};

/// Source of origin snapshots. `Ok(None)` means the data is not available.
pub trait DataProvider {
    fn origin_data_list(&self) -> Result<Option<Vec<OriginData>>>;

    fn load_origin_data(&self, origin: &str) -> Result<Option<OriginData>>;

    fn load_origin_stats(&self) -> Result<Option<OriginStats>>;
}

/// Reduces a URL to its serialized origin (`scheme://host[:port]`).
///
/// Anything that does not parse as a URL is returned trimmed as-is.
pub fn normalize_origin(input: &str) -> String {
    let trimmed = input.trim();
    match Url::parse(trimmed) {
        Ok(url) if url.origin().is_tuple() => url.origin().ascii_serialization(),
        _ => trimmed.to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    origins: Option<Vec<OriginData>>,
    stats: Option<OriginStats>,
}

impl MemoryProvider {
    pub fn new(origins: Vec<OriginData>, stats: OriginStats) -> Self {
        Self {
            origins: Some(origins),
            stats: Some(stats),
        }
    }

    /// A provider whose data layer has nothing to offer.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_origins(origins: Vec<OriginData>) -> Self {
        Self {
            origins: Some(origins),
            stats: None,
        }
    }
}

impl DataProvider for MemoryProvider {
    fn origin_data_list(&self) -> Result<Option<Vec<OriginData>>> {
        Ok(self.origins.clone())
    }

    fn load_origin_data(&self, origin: &str) -> Result<Option<OriginData>> {
        let origin = normalize_origin(origin);
        Ok(self
            .origins
            .as_ref()
            .and_then(|list| list.iter().find(|o| normalize_origin(&o.origin) == origin))
            .cloned())
    }

    fn load_origin_stats(&self) -> Result<Option<OriginStats>> {
        Ok(self.stats.clone())
    }
}
