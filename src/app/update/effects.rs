//! Ember effect, window environment and animation tick handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle effect and animation messages
    pub fn handle_effects(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::EffectTick => {
                // The callback stays registered while the window is hidden,
                // but the stepper does no work
                if !self.core.environment.visible {
                    return Some(Task::none());
                }

                let now = Instant::now();
                let dt = self
                    .ui
                    .last_effect_tick
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(0.0);
                self.ui.last_effect_tick = Some(now);

                self.ui.ember_field.step(dt, &mut rand::rng());
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.core.environment.viewport = *size;
                if self.core.embers_allowed() {
                    // A resize discards the population outright
                    self.ui.ember_field.seed(
                        size.width,
                        size.height,
                        self.ui.ember_counts,
                        &mut rand::rng(),
                    );
                    tracing::debug!(
                        "Ember field reseeded: {} embers for {}x{}",
                        self.ui.ember_field.len(),
                        size.width,
                        size.height
                    );
                }
                Some(Task::none())
            }

            Message::WindowVisibilityChanged(visible) => {
                self.core.environment.visible = *visible;
                if *visible {
                    // Do not integrate the hidden gap as one huge frame
                    self.ui.last_effect_tick = None;
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.track_hover.tick(now);
                self.ui.tile_hover.tick(now);
                self.ui.highlights.reveal.tick(now);
                self.ui.moment_modal.reveal.tick(now);
                self.ui.message_dialog.reveal.tick(now);
                self.ui.lightbox.reveal.tick(now);

                self.ui.cleanup_animations();

                // Index-backed modals drop their selection once the close
                // fade has fully played out
                if self.ui.moment_modal.closing
                    && !self.ui.moment_modal.reveal.is_animating()
                    && !self.ui.moment_modal.reveal.is_visible()
                {
                    self.ui.moment_modal.selected = None;
                    self.ui.moment_modal.closing = false;
                }
                if self.ui.lightbox.closing
                    && !self.ui.lightbox.reveal.is_animating()
                    && !self.ui.lightbox.reveal.is_visible()
                {
                    self.ui.lightbox.selected = None;
                    self.ui.lightbox.closing = false;
                }

                Some(Task::none())
            }

            Message::HoverTrack(rank) => {
                self.ui.track_hover.set_hovered(*rank);
                Some(Task::none())
            }

            Message::HoverTile(index) => {
                self.ui.tile_hover.set_hovered(*index);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::Size;

    use crate::app::state::App;
    use crate::app::message::Message;

    /// App with the ember gate forced open, regardless of on-disk settings
    fn app_with_open_gate() -> App {
        let mut app = App::default();
        app.core.settings.effects.embers_enabled = true;
        app.core.environment.reduced_motion = false;
        app.core.environment.data_saver = false;
        app.core.environment.visible = true;
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 800.0)));
        app
    }

    #[test]
    fn resize_reseeds_population_for_the_new_width() {
        let mut app = app_with_open_gate();
        assert_eq!(app.ui.ember_field.len(), app.ui.ember_counts.desktop);

        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(app.ui.ember_field.len(), app.ui.ember_counts.mobile);
    }

    #[test]
    fn effect_ticks_do_nothing_while_the_window_is_hidden() {
        let mut app = app_with_open_gate();
        let _ = app.update(Message::WindowVisibilityChanged(false));
        app.ui.last_effect_tick = Some(Instant::now() - Duration::from_millis(200));

        let before = app.ui.ember_field.embers().to_vec();
        for _ in 0..5 {
            let _ = app.update(Message::EffectTick);
        }
        assert_eq!(app.ui.ember_field.embers(), before.as_slice());
    }

    #[test]
    fn effect_ticks_advance_the_field_while_visible() {
        let mut app = app_with_open_gate();
        app.ui.last_effect_tick = Some(Instant::now() - Duration::from_millis(200));

        let before = app.ui.ember_field.embers().to_vec();
        let _ = app.update(Message::EffectTick);

        let moved = app
            .ui
            .ember_field
            .embers()
            .iter()
            .zip(&before)
            .any(|(after, b)| after.y > b.y);
        assert!(moved, "a 200ms visible tick must advance the drift");
    }
}
