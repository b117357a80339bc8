//! Product source configuration

use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use shop_core::ProductSource;
use crate::sources::{EmbeddedSource, JsonSource};

/// Where the catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Sample catalog bundled with the binary
    #[default]
    Embedded,

    /// JSON array of products on disk
    File { path: PathBuf },
}

impl SourceConfig {
    /// Pick the file source when a path is given, the sample catalog otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => SourceConfig::File { path },
            None => SourceConfig::Embedded,
        }
    }

    /// Create the configured source
    pub fn open(&self) -> Box<dyn ProductSource> {
        match self {
            SourceConfig::Embedded => Box::new(EmbeddedSource::new()),
            SourceConfig::File { path } => Box::new(JsonSource::new(path.clone())),
        }
    }
}
