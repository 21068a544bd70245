// SPDX-License-Identifier: MPL-2.0
//! Slide image references and their load state.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a slide image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideSource {
    /// Local file, decoded lazily by the renderer.
    Path(PathBuf),
    /// Remote `http`/`https` image, fetched in the background.
    Url(String),
}

impl SlideSource {
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Short name for logs and window titles.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            ),
            Self::Url(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }

    /// Parses every entry, failing on the first invalid one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<SlideSource>> {
        raw.iter().map(|entry| entry.as_ref().parse()).collect()
    }
}

impl FromStr for SlideSource {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Source("empty slide source".to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Url(trimmed.to_string()));
        }
        if let Some(path) = trimmed.strip_prefix("file://") {
            if path.is_empty() {
                return Err(Error::Source(format!("empty file URL: {raw:?}")));
            }
            return Ok(Self::Path(PathBuf::from(path)));
        }
        if lower.contains("://") {
            return Err(Error::Source(format!("unsupported scheme: {raw:?}")));
        }
        Ok(Self::Path(PathBuf::from(trimmed)))
    }
}

impl From<&Path> for SlideSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl fmt::Display for SlideSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load state of one real slide.
///
/// Clones share the state of the slide they mirror.
#[derive(Debug, Clone)]
pub enum SlideImage {
    /// Remote image not fetched yet.
    Pending,
    Ready(Handle),
    /// Fetch failed; the slide renders as an empty frame.
    Broken,
}

impl SlideImage {
    /// Initial state for a source: local files are ready immediately.
    #[must_use]
    pub fn for_source(source: &SlideSource) -> Self {
        match source {
            SlideSource::Path(path) => Self::Ready(Handle::from_path(path)),
            SlideSource::Url(_) => Self::Pending,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Self::Ready(handle) => Some(handle),
            Self::Pending | Self::Broken => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_are_urls() {
        assert_eq!(
            "https://cdn.example.com/a.jpg".parse::<SlideSource>().ok(),
            Some(SlideSource::Url("https://cdn.example.com/a.jpg".into()))
        );
        assert!("HTTP://example.com/b.png"
            .parse::<SlideSource>()
            .map(|s| s.is_remote())
            .unwrap_or(false));
    }

    #[test]
    fn plain_strings_are_paths() {
        assert_eq!(
            "photos/a.jpg".parse::<SlideSource>().ok(),
            Some(SlideSource::Path(PathBuf::from("photos/a.jpg")))
        );
    }

    #[test]
    fn file_urls_become_paths() {
        assert_eq!(
            "file:///srv/a.jpg".parse::<SlideSource>().ok(),
            Some(SlideSource::Path(PathBuf::from("/srv/a.jpg")))
        );
    }

    #[test]
    fn empty_and_unknown_schemes_are_rejected() {
        assert!(matches!("  ".parse::<SlideSource>(), Err(Error::Source(_))));
        assert!(matches!(
            "ftp://example.com/a.jpg".parse::<SlideSource>(),
            Err(Error::Source(_))
        ));
    }

    #[test]
    fn parse_all_stops_on_first_error() {
        assert!(SlideSource::parse_all(&["a.jpg", ""]).is_err());
        assert_eq!(
            SlideSource::parse_all(&["a.jpg", "b.jpg"]).map(|v| v.len()).ok(),
            Some(2)
        );
    }

    #[test]
    fn label_uses_last_segment() {
        let url: SlideSource = "https://example.com/gallery/c.webp".parse().expect("url");
        assert_eq!(url.label(), "c.webp");
        let path: SlideSource = "photos/a.jpg".parse().expect("path");
        assert_eq!(path.label(), "a.jpg");
    }

    #[test]
    fn local_sources_start_ready() {
        let path: SlideSource = "photos/a.jpg".parse().expect("path");
        assert!(SlideImage::for_source(&path).handle().is_some());
        let url: SlideSource = "https://example.com/a.jpg".parse().expect("url");
        assert!(SlideImage::for_source(&url).is_pending());
    }
}
