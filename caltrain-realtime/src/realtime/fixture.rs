//! Fixture page fetcher for use without network access.
//!
//! Loads saved station pages from a directory and serves them as if they
//! were live responses. A page is looked up by the last path segment of the
//! requested URL, so the file for San Francisco is
//! `sanfranciscostation-mobile.html`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::client::PageFetcher;
use super::error::FetchError;

/// Page fetcher that serves HTML files from a directory.
#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    /// Page bodies keyed by file name.
    pages: Arc<HashMap<String, String>>,
}

impl FixtureFetcher {
    /// Load every `.html` file in `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, FetchError> {
        let dir = dir.as_ref();
        let mut pages = HashMap::new();

        let entries = std::fs::read_dir(dir).map_err(|e| FetchError::Fixture {
            message: format!("failed to read fixture directory {}: {e}", dir.display()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FetchError::Fixture {
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("html") {
                continue;
            }

            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            let body = std::fs::read_to_string(&path).map_err(|e| FetchError::Fixture {
                message: format!("failed to read {}: {e}", path.display()),
            })?;

            pages.insert(name.to_string(), body);
        }

        if pages.is_empty() {
            return Err(FetchError::Fixture {
                message: format!("no fixture pages found in {}", dir.display()),
            });
        }

        debug!(count = pages.len(), dir = %dir.display(), "loaded fixture pages");

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// File names of the loaded pages, sorted.
    pub fn available_pages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl PageFetcher for FixtureFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let name = url.rsplit('/').next().unwrap_or(url);

        self.pages
            .get(name)
            .cloned()
            .ok_or_else(|| FetchError::Fixture {
                message: format!("no fixture page for {url}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_only_html_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "tamienstation-mobile.html", "<html></html>");
        write(dir.path(), "gilroystation-mobile.html", "<html></html>");
        write(dir.path(), "notes.txt", "ignored");

        let fetcher = FixtureFetcher::new(dir.path()).unwrap();

        assert_eq!(
            fetcher.available_pages(),
            ["gilroystation-mobile.html", "tamienstation-mobile.html"]
        );
    }

    #[test]
    fn empty_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FixtureFetcher::new(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FixtureFetcher::new(dir.path().join("absent")).is_err());
    }

    #[tokio::test]
    async fn serves_page_by_url() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "tamienstation-mobile.html", "<p>tamien</p>");
        let fetcher = FixtureFetcher::new(dir.path()).unwrap();

        let body = fetcher
            .fetch_page("http://localhost/schedules/realtime/stations/tamienstation-mobile.html")
            .await
            .unwrap();
        assert_eq!(body, "<p>tamien</p>");
    }

    #[tokio::test]
    async fn unknown_page_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "tamienstation-mobile.html", "<p>tamien</p>");
        let fetcher = FixtureFetcher::new(dir.path()).unwrap();

        let result = fetcher
            .fetch_page("http://localhost/schedules/realtime/stations/gilroystation-mobile.html")
            .await;
        assert!(matches!(result, Err(FetchError::Fixture { .. })));
    }
}
