//! Ember population and frame stepper
//!
//! The field owns a fixed-size vector of embers. Each frame advances every
//! ember's vertical drift and wobble phase by the elapsed time; embers that
//! leave the bottom of the surface are replaced in their slot by a fresh
//! one re-entering from the top edge. The initial seed fills the whole
//! surface instead, so the first frame does not look empty - the one
//! intentional asymmetry in the design.

use std::f32::consts::TAU;
use std::ops::Range;

use rand::Rng;

use super::environment::MOBILE_BREAKPOINT;

/// Sideways wobble amplitude in logical pixels
pub const WOBBLE_AMPLITUDE: f32 = 20.0;

/// Largest frame delta the stepper will integrate, in seconds
///
/// After the window was hidden the next delta can span minutes; clamping
/// keeps embers from teleporting across the surface in one frame.
pub const MAX_FRAME_DELTA: f32 = 1.0;

const SIZE_RANGE: Range<f32> = 6.0..28.0;
const SPEED_RANGE: Range<f32> = 30.0..120.0;
const OPACITY_RANGE: Range<f32> = 0.08..0.18;
const WOBBLE_SPEED_RANGE: Range<f32> = 0.5..2.0;

/// One drifting glow
///
/// `x` holds the base horizontal position; the wobble displacement is
/// derived at render time and never written back, so the underlying drift
/// stays purely vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ember {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub wobble_phase: f32,
    pub wobble_speed: f32,
    pub wobble_offset: f32,
}

impl Ember {
    /// Generate a fresh ember
    ///
    /// `from_top` seeds at the top edge (`y = -size`, the recycle path);
    /// otherwise the ember lands anywhere on the surface (initial seed).
    fn generate<R: Rng>(rng: &mut R, width: f32, height: f32, from_top: bool) -> Self {
        let size = rng.random_range(SIZE_RANGE);
        Self {
            x: rng.random_range(0.0..width.max(1.0)),
            y: if from_top {
                -size
            } else {
                rng.random_range(0.0..height.max(1.0))
            },
            size,
            speed: rng.random_range(SPEED_RANGE),
            opacity: rng.random_range(OPACITY_RANGE),
            wobble_phase: 0.0,
            wobble_speed: rng.random_range(WOBBLE_SPEED_RANGE),
            wobble_offset: rng.random_range(0.0..TAU),
        }
    }

    /// Horizontal render displacement for the current wobble phase
    pub fn wobble_x(&self) -> f32 {
        (self.wobble_phase + self.wobble_offset).sin() * WOBBLE_AMPLITUDE
    }
}

/// Population sizes per viewport class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmberCounts {
    pub desktop: usize,
    pub mobile: usize,
}

impl Default for EmberCounts {
    fn default() -> Self {
        Self {
            desktop: 10,
            mobile: 5,
        }
    }
}

impl EmberCounts {
    /// Population size for a viewport width
    pub fn for_width(&self, width: f32) -> usize {
        if width < MOBILE_BREAKPOINT {
            self.mobile
        } else {
            self.desktop
        }
    }
}

/// The ember population plus the surface it drifts over
///
/// Exclusively owned by the app state; the stepper and renderer run in
/// strict sequence inside one frame message, so there are no aliasing
/// concerns.
#[derive(Debug, Clone, Default)]
pub struct EmberField {
    embers: Vec<Ember>,
    width: f32,
    height: f32,
}

impl EmberField {
    /// Create an empty field; call [`EmberField::seed`] before stepping
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the population and reseed for a (possibly new) surface size
    ///
    /// Invoked at startup and on every resize. Seeding is full-field so the
    /// effect looks settled on its first frame.
    pub fn seed<R: Rng>(&mut self, width: f32, height: f32, counts: EmberCounts, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = counts.for_width(width);
        self.embers = (0..count)
            .map(|_| Ember::generate(rng, width, height, false))
            .collect();
    }

    /// Advance the population by `dt` seconds
    ///
    /// Embers drift straight down and accumulate wobble phase; a slot whose
    /// ember has fully exited the bottom is refilled with a top-edge entry.
    /// The population length never changes here.
    pub fn step<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        let (width, height) = (self.width, self.height);

        for ember in &mut self.embers {
            ember.y += ember.speed * dt;
            ember.wobble_phase += ember.wobble_speed * dt;

            if ember.y > height + ember.size {
                *ember = Ember::generate(rng, width, height, true);
            }
        }
    }

    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }

    pub fn len(&self) -> usize {
        self.embers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn seeded_field(width: f32) -> (EmberField, StdRng) {
        let mut rng = rng();
        let mut field = EmberField::new();
        field.seed(width, 800.0, EmberCounts::default(), &mut rng);
        (field, rng)
    }

    #[test]
    fn population_matches_viewport_class() {
        let (desktop, _) = seeded_field(1024.0);
        assert_eq!(desktop.len(), 10);

        let (mobile, _) = seeded_field(500.0);
        assert_eq!(mobile.len(), 5);
    }

    #[test]
    fn breakpoint_is_strictly_below_768() {
        let counts = EmberCounts::default();
        assert_eq!(counts.for_width(767.9), counts.mobile);
        assert_eq!(counts.for_width(768.0), counts.desktop);
    }

    #[test]
    fn initial_seed_covers_the_full_field() {
        let (field, _) = seeded_field(1024.0);
        for ember in field.embers() {
            assert!((0.0..1024.0).contains(&ember.x));
            assert!((0.0..800.0).contains(&ember.y));
        }
    }

    #[test]
    fn descent_is_monotonic_until_recycle() {
        let (mut field, mut rng) = seeded_field(1024.0);

        for _ in 0..200 {
            let before: Vec<f32> = field.embers().iter().map(|e| e.y).collect();
            field.step(0.016, &mut rng);
            for (ember, y_before) in field.embers().iter().zip(&before) {
                // A drop in y means the slot was recycled to the top edge
                if ember.y < *y_before {
                    assert_eq!(ember.y, -ember.size);
                } else {
                    assert!(ember.y >= *y_before);
                }
            }
        }
    }

    #[test]
    fn recycled_embers_redraw_from_configured_ranges() {
        let mut rng = rng();
        let mut field = EmberField::new();
        field.seed(1024.0, 100.0, EmberCounts::default(), &mut rng);

        // Drive everything off the bottom; a 100px surface empties fast
        for _ in 0..600 {
            field.step(0.1, &mut rng);
        }

        for ember in field.embers() {
            assert!((6.0..28.0).contains(&ember.size));
            assert!((30.0..120.0).contains(&ember.speed));
            assert!((0.08..0.18).contains(&ember.opacity));
            assert!((0.5..2.0).contains(&ember.wobble_speed));
            assert!((0.0..TAU).contains(&ember.wobble_offset));
        }
    }

    #[test]
    fn recycle_re_enters_exactly_at_the_top_edge() {
        let (mut field, mut rng) = seeded_field(1024.0);

        // Run until at least one recycle happened in the step just taken
        let mut saw_recycle = false;
        for _ in 0..2000 {
            let before: Vec<f32> = field.embers().iter().map(|e| e.y).collect();
            field.step(0.05, &mut rng);
            for (ember, y_before) in field.embers().iter().zip(&before) {
                if ember.y < *y_before {
                    saw_recycle = true;
                    assert_eq!(ember.y, -ember.size);
                    assert_eq!(ember.wobble_phase, 0.0);
                }
            }
            if saw_recycle {
                break;
            }
        }
        assert!(saw_recycle, "no recycle observed");
    }

    #[test]
    fn population_length_is_invariant_across_steps() {
        let (mut field, mut rng) = seeded_field(1024.0);
        let len = field.len();
        for _ in 0..500 {
            field.step(0.016, &mut rng);
            assert_eq!(field.len(), len);
        }
    }

    #[test]
    fn oversized_frame_deltas_are_clamped() {
        let (mut field, mut rng) = seeded_field(1024.0);
        let before: Vec<(f32, f32)> = field.embers().iter().map(|e| (e.y, e.speed)).collect();

        // A multi-minute gap after backgrounding must integrate as one second
        field.step(120.0, &mut rng);

        for (ember, (y_before, speed)) in field.embers().iter().zip(&before) {
            if ember.y >= *y_before {
                let travelled = ember.y - y_before;
                assert!(travelled <= speed * MAX_FRAME_DELTA + f32::EPSILON);
            }
        }
    }

    #[test]
    fn negative_deltas_do_nothing() {
        let (mut field, mut rng) = seeded_field(1024.0);
        let before: Vec<Ember> = field.embers().to_vec();
        field.step(-5.0, &mut rng);
        assert_eq!(field.embers(), before.as_slice());
    }

    #[test]
    fn wobble_never_exceeds_the_amplitude_and_never_touches_x() {
        let (mut field, mut rng) = seeded_field(1024.0);

        for _ in 0..300 {
            let before: Vec<(f32, f32)> = field.embers().iter().map(|e| (e.x, e.y)).collect();
            field.step(0.016, &mut rng);
            for (ember, (x_before, y_before)) in field.embers().iter().zip(&before) {
                assert!(ember.wobble_x().abs() <= WOBBLE_AMPLITUDE);
                // Base x drifts only through recycling, never through wobble
                if ember.y >= *y_before {
                    assert_eq!(ember.x, *x_before);
                }
            }
        }
    }

    #[test]
    fn reseeding_replaces_the_population_wholesale() {
        let (mut field, mut rng) = seeded_field(1024.0);
        assert_eq!(field.len(), 10);

        field.seed(500.0, 600.0, EmberCounts::default(), &mut rng);
        assert_eq!(field.len(), 5);
        for ember in field.embers() {
            assert!((0.0..500.0).contains(&ember.x));
            assert!((0.0..600.0).contains(&ember.y));
        }
    }
}
