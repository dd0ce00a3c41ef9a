//! Fixture data models
//!
//! These mirror the JSON fixture schema one-to-one and are consumed
//! read-only by the view layer.

use serde::Deserialize;

/// One ranked track with an optional local preview clip
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub rank: u32,
    pub title: String,
    pub artist: String,
    pub plays: u32,
    /// Path to a local preview audio file, relative to the data directory
    pub preview: String,
}

/// The couple's header data plus their ranked tracks
#[derive(Debug, Clone, Deserialize)]
pub struct TracksData {
    pub user: String,
    pub partner: String,
    pub months: u32,
    #[serde(rename = "topTracks")]
    pub top_tracks: Vec<Track>,
}

impl TracksData {
    /// Highest play count across all tracks (1 minimum so bar math never divides by zero)
    pub fn max_plays(&self) -> u32 {
        self.top_tracks
            .iter()
            .map(|t| t.plays)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Sum of plays across all tracks
    pub fn total_plays(&self) -> u32 {
        self.top_tracks.iter().map(|t| t.plays).sum()
    }
}

/// One timeline moment
#[derive(Debug, Clone, Deserialize)]
pub struct Moment {
    pub id: String,
    /// ISO date (`2025-10-15`)
    pub date: String,
    pub title: String,
    pub desc: String,
    pub media: String,
}

impl Moment {
    /// Whether the moment's media is a video clip rather than a photo
    pub fn is_video(&self) -> bool {
        crate::utils::is_video_path(&self.media)
    }
}

/// The relationship label plus its moments, oldest first
#[derive(Debug, Clone, Deserialize)]
pub struct MomentsData {
    pub relationship: String,
    pub moments: Vec<Moment>,
}

/// Gallery media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One gallery tile
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub media: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub caption: String,
}

/// The full gallery
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryData {
    pub items: Vec<GalleryItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_fixture_parses() {
        let json = r#"{
            "user": "Heitor",
            "partner": "Livia",
            "months": 3,
            "topTracks": [
                { "rank": 1, "title": "Preferida", "artist": "KayBlack, Wall Hein",
                  "plays": 56, "preview": "previews/preferida.mp3" },
                { "rank": 2, "title": "Papoulas", "artist": "Yago Oproprio",
                  "plays": 42, "preview": "previews/papoulas.mp3" }
            ]
        }"#;

        let data: TracksData = serde_json::from_str(json).expect("tracks fixture");
        assert_eq!(data.user, "Heitor");
        assert_eq!(data.top_tracks.len(), 2);
        assert_eq!(data.max_plays(), 56);
        assert_eq!(data.total_plays(), 98);
    }

    #[test]
    fn max_plays_never_returns_zero() {
        let data = TracksData {
            user: String::new(),
            partner: String::new(),
            months: 0,
            top_tracks: Vec::new(),
        };
        assert_eq!(data.max_plays(), 1);
    }

    #[test]
    fn moments_fixture_parses_and_detects_videos() {
        let json = r#"{
            "relationship": "3 meses",
            "moments": [
                { "id": "m1", "date": "2025-10-15", "title": "Primeira Mensagem",
                  "desc": "Ele falou 'oi' e ela riu.", "media": "photos/um.jpg" },
                { "id": "m3", "date": "2025-12-20", "title": "Viagem",
                  "desc": "Roda gigante.", "media": "videos/clip-01.mp4" }
            ]
        }"#;

        let data: MomentsData = serde_json::from_str(json).expect("moments fixture");
        assert!(!data.moments[0].is_video());
        assert!(data.moments[1].is_video());
    }

    #[test]
    fn gallery_kind_uses_lowercase_tags() {
        let json = r#"{
            "items": [
                { "id": "g1", "media": "photos/um.jpg", "type": "image", "caption": "Nós" },
                { "id": "g2", "media": "videos/dois.mp4", "type": "video", "caption": "Risadas" }
            ]
        }"#;

        let data: GalleryData = serde_json::from_str(json).expect("gallery fixture");
        assert_eq!(data.items[0].kind, MediaKind::Image);
        assert_eq!(data.items[1].kind, MediaKind::Video);
    }
}
