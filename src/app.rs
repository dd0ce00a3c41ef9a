//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Settings, ThemeMode};
use crate::i18n::{Language, Locale};
pub use message::{Message, Section};
pub use state::{App, ContentState, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let content = ContentState::default();
        let mut ui = UiState::new();

        // 3. Seed the ember field for the default viewport; the first
        //    resize event reseeds for the real window size
        if core.embers_allowed() {
            let viewport = core.environment.viewport;
            ui.ember_field.seed(
                viewport.width,
                viewport.height,
                ui.ember_counts,
                &mut rand::rng(),
            );
        }

        let app = Self { core, content, ui };

        // 4. Load the fixture content on the async runtime
        (app, helpers::load_fixtures())
    }

    /// Application theme resolved from the persisted mode
    pub fn theme(&self) -> Theme {
        let dark = match self.core.settings.display.theme {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => self.core.system_dark,
        };
        if dark { Theme::Dark } else { Theme::Light }
    }

    /// Window title from the loaded couple data
    pub fn title(&self) -> String {
        if let Some(tracks) = &self.content.tracks {
            format!(
                "{} & {} — Wrapped: {} {}",
                tracks.user,
                tracks.partner,
                tracks.months,
                self.core
                    .locale
                    .get(crate::i18n::Key::HeroMonthsOfUs)
            )
        } else {
            "Wrapped".to_string()
        }
    }

    /// Subscriptions for the ember layer, transitions, previews, slideshow,
    /// keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Duration;

        let visible = self.core.environment.visible;

        // 1. Ember frame ticks. When the gate is closed (effect disabled,
        //    reduced motion or data saver) nothing is registered at all.
        let ember_sub = if self.core.embers_allowed() {
            iced::window::frames().map(|_| Message::EffectTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Hover/reveal transitions (~60fps while anything is in flight)
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Preview end detection (500ms poll while playing)
        let preview_sub = if self.ui.playing_rank.is_some() {
            iced::time::every(Duration::from_millis(500)).map(|_| Message::PreviewTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Highlights slideshow auto-advance (5s)
        let highlights_sub = if self.ui.highlights.open && visible {
            iced::time::every(Duration::from_secs(5)).map(|_| Message::HighlightsTick)
        } else {
            iced::Subscription::none()
        };

        // 5. Keyboard events (modal navigation)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 6. Window resize (reseeds the ember population)
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 7. Window focus as the desktop visibility signal
        let visibility_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Window(iced::window::Event::Focused) => {
                Some(Message::WindowVisibilityChanged(true))
            }
            iced::Event::Window(iced::window::Event::Unfocused) => {
                Some(Message::WindowVisibilityChanged(false))
            }
            _ => None,
        });

        iced::Subscription::batch([
            ember_sub,
            animation_sub,
            preview_sub,
            highlights_sub,
            keyboard_sub,
            resize_sub,
            visibility_sub,
        ])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::ui::effects::should_animate;

    pub fn needs_ember_frames(enabled: bool, reduced_motion: bool, data_saver: bool) -> bool {
        should_animate(enabled, reduced_motion, data_saver)
    }

    pub fn needs_animation_frames(has_active_animations: bool) -> bool {
        has_active_animations
    }

    pub fn needs_preview_poll(is_playing: bool) -> bool {
        is_playing
    }

    pub fn needs_slideshow_timer(highlights_open: bool, window_visible: bool) -> bool {
        highlights_open && window_visible
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_ember_gate {
        use super::*;

        #[test]
        fn reduced_motion_registers_zero_frame_callbacks() {
            // Regardless of the enabled input, reduced motion wins
            assert!(!needs_ember_frames(true, true, false));
            assert!(!needs_ember_frames(false, true, false));
            assert!(!needs_ember_frames(true, true, true));
        }

        #[test]
        fn data_saver_registers_zero_frame_callbacks() {
            assert!(!needs_ember_frames(true, false, true));
            assert!(!needs_ember_frames(false, false, true));
        }

        #[test]
        fn gate_opens_only_when_enabled_and_unconstrained() {
            assert!(needs_ember_frames(true, false, false));
            assert!(!needs_ember_frames(false, false, false));
        }
    }

    mod property_subscription_independence {
        use super::*;

        #[test]
        fn preview_poll_only_depends_on_playback() {
            // The preview poll must not care about animation state
            assert!(needs_preview_poll(true));
            assert!(!needs_preview_poll(false));
        }

        #[test]
        fn animation_frames_follow_active_transitions() {
            assert!(needs_animation_frames(true));
            assert!(!needs_animation_frames(false));
        }

        #[test]
        fn slideshow_pauses_while_window_hidden() {
            assert!(needs_slideshow_timer(true, true));
            assert!(!needs_slideshow_timer(true, false));
            assert!(!needs_slideshow_timer(false, true));
        }

        #[test]
        fn ember_gate_is_independent_of_other_subscriptions() {
            // Whatever previews or animations are doing, the gate decision
            // is a function of its three inputs alone
            for is_playing in [false, true] {
                for has_anims in [false, true] {
                    let _ = (is_playing, has_anims);
                    assert!(needs_ember_frames(true, false, false));
                    assert!(!needs_ember_frames(true, true, false));
                }
            }
        }
    }
}
