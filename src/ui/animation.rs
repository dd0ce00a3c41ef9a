//! Animation helpers built on `iced_anim`
//!
//! Two small pieces drive every transition in the gift: exclusive hover
//! fades for list rows and tiles, and a reveal fade for modal overlays.

mod hover;

pub use hover::{HoverFades, Reveal};
