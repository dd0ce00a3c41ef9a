//! Hover and reveal transitions
//!
//! Hover is exclusive: at most one row or tile is hovered at a time, so
//! only the active item and the previously active (fading out) item carry
//! animations - O(1) regardless of list length.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration (200ms for a snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Modal reveal duration
const REVEAL_DURATION: Duration = Duration::from_millis(220);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

fn reveal_easing() -> Easing {
    Easing::EASE.with_duration(REVEAL_DURATION)
}

/// Exclusive hover fades keyed by item id
#[derive(Debug)]
pub struct HoverFades<K: Eq + Hash + Clone> {
    /// Currently hovered item, fading in
    active_key: Option<K>,
    active_anim: Animated<f32>,
    /// Previously hovered item, fading out
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverFades<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverFades<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Set the hovered item; `None` unhovers everything
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // Whatever was active starts fading out from its current value
        if let Some(old) = self.active_key.take() {
            self.fading_key = Some(old);
            let current = *self.active_anim.value();
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Hover progress for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    /// Check if a specific key is currently the hovered item
    #[allow(dead_code)]
    pub fn is_hovered(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Drop the fading entry once it has fully faded out
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && !self.fading_anim.is_animating()
        {
            self.fading_key = None;
        }
    }

    /// Advance the animations; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}

/// Fade-in/out state for a modal overlay
#[derive(Debug)]
pub struct Reveal {
    animation: Animated<f32>,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, reveal_easing()),
        }
    }

    /// Fade the overlay in
    pub fn open(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade the overlay out
    pub fn close(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Current opacity progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    /// Whether the overlay contributes anything to the frame
    pub fn is_visible(&self) -> bool {
        self.progress() > 0.01
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance the animation; call once per animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_exclusive() {
        let mut fades: HoverFades<u32> = HoverFades::new();
        assert_eq!(fades.progress(&1), 0.0);

        fades.set_hovered(Some(1));
        assert!(fades.is_hovered(&1));

        fades.set_hovered(Some(2));
        assert!(fades.is_hovered(&2));
        assert!(!fades.is_hovered(&1));
    }

    #[test]
    fn unhover_clears_the_active_key() {
        let mut fades: HoverFades<u32> = HoverFades::new();
        fades.set_hovered(Some(3));
        fades.set_hovered(None);
        assert!(!fades.is_hovered(&3));
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut fades: HoverFades<u32> = HoverFades::new();
        fades.set_hovered(Some(1));
        let p = fades.progress(&1);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn reveal_starts_hidden() {
        let reveal = Reveal::new();
        assert_eq!(reveal.progress(), 0.0);
        assert!(!reveal.is_visible());
    }

    #[test]
    fn opening_targets_full_opacity() {
        let mut reveal = Reveal::new();
        reveal.open();
        assert!(reveal.is_animating() || reveal.progress() > 0.0);
    }
}
