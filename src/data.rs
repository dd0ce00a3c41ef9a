//! Static fixture data for the gift
//!
//! All content (tracks, moments, gallery) is supplied as read-only JSON
//! fixtures under `data/`. Nothing here is ever written back.

pub mod fixtures;
pub mod model;

pub use fixtures::{load_gallery, load_moments, load_tracks};
pub use model::{GalleryData, GalleryItem, MediaKind, Moment, MomentsData, Track, TracksData};
