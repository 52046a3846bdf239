//! Where a feed comes from.

use crate::error::{CatalogError, LoadErrorKind};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name of the feed under a base directory or URL.
pub const FEED_FILE_NAME: &str = "data.json";

/// A resolved feed location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    File(PathBuf),
    /// `http://` or `https://` URL of the JSON document itself
    Url(String),
}

impl FeedSource {
    /// Resolve a filesystem path; directories resolve to their `data.json`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.is_dir() {
            Self::File(path.join(FEED_FILE_NAME))
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Resolve a URL; anything not naming a `.json` document is treated as a
    /// base URL and gets `data.json` appended.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let path_part = url.split(['?', '#']).next().unwrap_or(url);
        if path_part.ends_with(".json") {
            Self::Url(url.to_string())
        } else if url.ends_with('/') {
            Self::Url(format!("{url}{FEED_FILE_NAME}"))
        } else {
            Self::Url(format!("{url}/{FEED_FILE_NAME}"))
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

fn is_url(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl FromStr for FeedSource {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(CatalogError::load(
                "resolving feed source",
                LoadErrorKind::EmptySource,
            ));
        }
        if is_url(raw) {
            Ok(Self::from_url(raw))
        } else {
            Ok(Self::from_path(Path::new(raw)))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
