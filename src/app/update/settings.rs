//! Theme, effects and language settings handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::analytics;
use crate::i18n::Locale;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleThemeMenu => {
                self.ui.theme_menu_open = !self.ui.theme_menu_open;
                Some(Task::none())
            }

            Message::SetThemeMode(mode) => {
                self.core.settings.display.theme = *mode;
                self.ui.theme_menu_open = false;
                analytics::track_interaction("theme_menu", &format!("theme_{:?}", mode));
                self.persist_settings();
                Some(Task::none())
            }

            Message::SetLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                self.persist_settings();
                Some(Task::none())
            }

            Message::SetEmbersEnabled(enabled) => {
                self.core.settings.effects.embers_enabled = *enabled;
                analytics::track_interaction(
                    "theme_menu",
                    if *enabled { "embers_on" } else { "embers_off" },
                );

                if self.core.embers_allowed() {
                    // Re-enabling starts from a fresh full-field population
                    let viewport = self.core.environment.viewport;
                    self.ui.ember_field.seed(
                        viewport.width,
                        viewport.height,
                        self.ui.ember_counts,
                        &mut rand::rng(),
                    );
                }
                // The frame subscription disappears with the gate; make sure
                // a later re-enable does not integrate the idle gap
                self.ui.last_effect_tick = None;

                self.persist_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
