//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the only
//! layer that should import from `crate::app`.

pub mod featured_card;
pub mod footer;
pub mod gallery_grid;
pub mod header;
pub mod hero;
pub mod highlights_modal;
pub mod lightbox;
pub mod message_dialog;
pub mod moment_modal;
pub mod moments_timeline;
pub mod plays_chart;
pub mod theme_menu;
pub mod top_tracks;

pub use header::HEADER_HEIGHT;
