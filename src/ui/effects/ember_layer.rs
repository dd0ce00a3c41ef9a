//! Ember layer renderer
//!
//! Draws the field as soft warm glows on a full-surface canvas stacked
//! behind the page content. The canvas API has no radial gradients, so the
//! three-stop falloff (bright core, base body, transparent halo) is
//! approximated with nested circle fills, halo first.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use super::ember_field::EmberField;
use crate::ui::theme;

/// Canvas program borrowing the field for one frame
pub struct EmberLayer<'a> {
    field: &'a EmberField,
    /// Global opacity multiplier (0.0 to 1.0)
    opacity: f32,
}

impl<'a> EmberLayer<'a> {
    pub fn new(field: &'a EmberField, opacity: f32) -> Self {
        Self {
            field,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl<'a, Message> Program<Message> for EmberLayer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        iced_theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Nothing to draw on a degenerate surface; fail silent, not fatal
        if bounds.width <= 0.0 || bounds.height <= 0.0 || self.field.is_empty() {
            return Vec::new();
        }

        let dark = theme::is_dark_theme(iced_theme);
        let (base, halo) = theme::ember_palette(dark);

        let mut frame = Frame::new(renderer, bounds.size());

        // Population order is draw order; all embers share one layer
        for ember in self.field.embers() {
            let center = Point::new(ember.x + ember.wobble_x(), ember.y);
            let alpha = ember.opacity * self.opacity;

            let halo_circle = Path::circle(center, ember.size);
            frame.fill(&halo_circle, Color { a: alpha * 0.35, ..halo });

            let body = Path::circle(center, ember.size * 0.6);
            frame.fill(&body, Color { a: alpha, ..base });

            let core = Path::circle(center, ember.size * 0.3);
            frame.fill(
                &core,
                Color {
                    a: (alpha * 1.5).min(1.0),
                    ..base
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Build the ember layer element for the current frame
pub fn view<'a, Message: 'a>(field: &'a EmberField, opacity: f32) -> Element<'a, Message> {
    Canvas::new(EmberLayer::new(field, opacity))
        .width(Fill)
        .height(Fill)
        .into()
}
