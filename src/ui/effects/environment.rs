//! Animation gate
//!
//! Decides whether the ember layer may run at all, from three inputs: the
//! viewer's explicit toggle, the reduced-motion preference and the
//! data-saver preference. The decision is pure so it can be tested without
//! a window; the live signals are sampled into an [`Environment`] snapshot
//! by the app state.

use iced::Size;

/// Viewport width below which the mobile ember count applies
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Compute whether the ember effect should animate
///
/// A preference that is not set counts as "allowed"; only an explicit
/// reduced-motion or data-saver signal suppresses the effect.
pub fn should_animate(enabled: bool, reduced_motion: bool, data_saver: bool) -> bool {
    enabled && !reduced_motion && !data_saver
}

/// Snapshot of the environment signals the effect reacts to
///
/// Sampled from settings and window events rather than read inside the
/// effect, so the stepper and renderer stay display-free for tests.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    /// Viewer asked for reduced motion
    pub reduced_motion: bool,
    /// Viewer asked for constrained data/resource use
    pub data_saver: bool,
    /// Whether the hosting window is currently visible
    pub visible: bool,
    /// Logical viewport size
    pub viewport: Size,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            data_saver: false,
            visible: true,
            viewport: Size::new(1100.0, 860.0),
        }
    }
}

impl Environment {
    /// Gate decision for this snapshot combined with the explicit toggle
    pub fn allows_animation(&self, enabled: bool) -> bool {
        should_animate(enabled, self.reduced_motion, self.data_saver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_enabled() {
        assert!(!should_animate(false, false, false));
        assert!(should_animate(true, false, false));
    }

    #[test]
    fn reduced_motion_wins_over_enabled() {
        assert!(!should_animate(true, true, false));
    }

    #[test]
    fn data_saver_wins_over_enabled() {
        assert!(!should_animate(true, false, true));
    }

    #[test]
    fn unset_preferences_default_to_allowing() {
        let env = Environment::default();
        assert!(env.allows_animation(true));
        assert!(!env.allows_animation(false));
    }
}
