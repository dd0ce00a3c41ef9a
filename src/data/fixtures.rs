//! Fixture loading
//!
//! Fixtures live in a `data/` directory next to the executable (or the
//! working directory during development). Loading happens once at startup
//! on the async runtime; the app receives the parsed structs as messages.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::{GalleryData, MomentsData, TracksData};

/// Resolve the fixture directory
///
/// Prefers `data/` under the current working directory (development),
/// falling back to `data/` next to the executable (installed).
pub fn data_dir() -> PathBuf {
    let cwd_data = PathBuf::from("data");
    if cwd_data.is_dir() {
        return cwd_data;
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .unwrap_or(cwd_data)
}

/// Resolve a fixture media path (photos, previews) against the data directory
pub fn media_path(relative: &str) -> PathBuf {
    data_dir().join(relative)
}

async fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing fixture {}", path.display()))
}

/// Load the tracks fixture (`data/tracks.json`)
pub async fn load_tracks() -> Result<TracksData> {
    load_json(&data_dir().join("tracks.json")).await
}

/// Load the moments fixture (`data/moments.json`)
pub async fn load_moments() -> Result<MomentsData> {
    load_json(&data_dir().join("moments.json")).await
}

/// Load the gallery fixture (`data/gallery.json`)
pub async fn load_gallery() -> Result<GalleryData> {
    load_json(&data_dir().join("gallery.json")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_path_joins_under_data_dir() {
        let path = media_path("photos/um.jpg");
        assert!(path.ends_with("data/photos/um.jpg") || path.ends_with("photos/um.jpg"));
    }

    #[tokio::test]
    async fn missing_fixture_is_an_error_not_a_panic() {
        let result: Result<TracksData> =
            load_json(&Path::new("definitely-missing").join("tracks.json")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn malformed_fixture_reports_parse_context() {
        let dir = std::env::temp_dir().join("wrapped-fixture-test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").expect("write temp fixture");

        let result: Result<TracksData> = load_json(&path).await;
        let err = format!("{:#}", result.expect_err("must fail"));
        assert!(err.contains("parsing fixture"));

        let _ = std::fs::remove_file(&path);
    }
}
