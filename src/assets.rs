//! Logo download and naming.
//!
//! Known logo URLs get a human-readable `<Team Name>.png` filename; anything
//! else falls back to the URL's final path segment. Downloads are best
//! effort: any fetch or write failure is logged and never aborts the record
//! assembly that triggered it.

use crate::fetch::Fetcher;
use crate::teams::lookup_team_name;

use std::path::Path;
use tracing::{info, warn};

/// Display filename for a logo URL.
pub fn resolve_filename(url: &str) -> String {
    match lookup_team_name(url) {
        Some(name) => format!("{name}.png"),
        None => url.rsplit('/').next().unwrap_or(url).to_string(),
    }
}

/// Fetch `url` and persist it under `media_dir`, overwriting any existing
/// file. The directory is created on demand; creation is idempotent, so
/// concurrent callers are fine.
pub async fn download_image(fetcher: &dyn Fetcher, media_dir: &Path, url: &str) {
    let path = media_dir.join(resolve_filename(url));

    if let Err(e) = tokio::fs::create_dir_all(media_dir).await {
        warn!(error = %e, dir = %media_dir.display(), "failed to create media directory");
        return;
    }

    match fetcher.fetch_bytes(url).await {
        Ok(bytes) => {
            if let Err(e) = tokio::fs::write(&path, bytes).await {
                warn!(error = %e, path = %path.display(), "failed to write image");
            } else {
                info!(path = %path.display(), "image downloaded");
            }
        }
        Err(e) => warn!(error = %e, url, "failed to download image"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::MockFetcher;

    #[test]
    fn known_logo_resolves_to_team_display_name() {
        assert_eq!(
            resolve_filename("https://dashboard.pba.ph/assets/logo/Ginebra150.png"),
            "Ginebra San Miguel.png",
        );
        assert_eq!(
            resolve_filename("https://dashboard.pba.ph/assets/logo/web_nlx.png"),
            "NLEX.png",
        );
    }

    #[test]
    fn unknown_logo_falls_back_to_last_path_segment() {
        assert_eq!(
            resolve_filename("https://example.com/logos/unknown123.png"),
            "unknown123.png",
        );
        assert_eq!(resolve_filename("bare-name.png"), "bare-name.png");
    }

    #[tokio::test]
    async fn downloads_into_the_media_directory() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("media");
        let url = "https://dashboard.pba.ph/assets/logo/web_mer.png";
        let fetcher = MockFetcher::new().with_bytes(url, b"\x89PNG fake");

        download_image(&fetcher, &media, url).await;

        let written = std::fs::read(media.join("Meralco.png")).unwrap();
        assert_eq!(written, b"\x89PNG fake");
    }

    #[tokio::test]
    async fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = "https://example.com/logos/x.png";
        std::fs::write(dir.path().join("x.png"), b"old").unwrap();
        let fetcher = MockFetcher::new().with_bytes(url, b"new");

        download_image(&fetcher, dir.path(), url).await;

        assert_eq!(std::fs::read(dir.path().join("x.png")).unwrap(), b"new");
    }

    #[tokio::test]
    async fn failed_fetch_writes_nothing_and_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new(); // knows no URLs -> 404

        download_image(&fetcher, dir.path(), "https://example.com/missing.png").await;

        assert!(!dir.path().join("missing.png").exists());
    }
}
