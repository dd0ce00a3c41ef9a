//! Ambient visual effects
//!
//! The ember layer is a fixed population of soft glowing particles drifting
//! down behind the page content. It is decorative only: it reads viewer
//! preferences through the animation gate and does zero work when disabled,
//! when the viewer asked for reduced motion, or while the window is hidden.

pub mod ember_field;
pub mod ember_layer;
pub mod environment;

pub use ember_field::{Ember, EmberCounts, EmberField};
pub use environment::{Environment, should_animate};
