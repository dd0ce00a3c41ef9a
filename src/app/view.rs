//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, effects, pages, theme, widgets};

impl App {
    /// Build the view: backdrop, ember layer, page, then modal overlays
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let iced_theme = self.theme();
        let dark = theme::is_dark_theme(&iced_theme);

        // Opaque page backdrop; everything above it leaves gaps for the embers
        let backdrop = container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::page);

        // Ember layer behind the content
        let ember_overlay: Element<'_, Message> = if self.core.embers_allowed() {
            effects::ember_layer::view(&self.ui.ember_field, self.core.settings.effects.opacity)
        } else {
            Space::new().width(0).height(0).into()
        };

        // Header + scrollable page
        let header = components::header::view(
            self.content.user(),
            self.content.partner(),
            self.ui.active_section,
            dark,
            locale,
        );
        let main = column![header, pages::wrapped::view(self)]
            .width(Fill)
            .height(Fill);

        // Overlays - always the same stack shape to preserve scroll state

        let theme_menu_overlay: Element<'_, Message> = if self.ui.theme_menu_open {
            components::theme_menu::view(&self.core.settings, locale)
        } else {
            Space::new().width(0).height(0).into()
        };

        let highlights_progress = self.ui.highlights.reveal.progress();
        let highlights_overlay: Element<'_, Message> =
            if self.ui.highlights.open || self.ui.highlights.reveal.is_visible() {
                match &self.content.gallery {
                    Some(gallery) => components::highlights_modal::view(
                        &gallery.items,
                        self.ui.highlights.index,
                        highlights_progress,
                        locale,
                    ),
                    None => Space::new().width(0).height(0).into(),
                }
            } else {
                Space::new().width(0).height(0).into()
            };

        let moment_progress = self.ui.moment_modal.reveal.progress();
        let moment_overlay: Element<'_, Message> = match (
            self.ui.moment_modal.selected,
            &self.content.moments,
        ) {
            (Some(index), Some(moments)) => match moments.moments.get(index) {
                Some(moment) => components::moment_modal::view(moment, moment_progress, locale),
                None => Space::new().width(0).height(0).into(),
            },
            _ => Space::new().width(0).height(0).into(),
        };

        let message_progress = self.ui.message_dialog.reveal.progress();
        let message_overlay: Element<'_, Message> =
            if self.ui.message_dialog.open || self.ui.message_dialog.reveal.is_visible() {
                let placeholder = components::message_dialog::default_message(
                    self.content.partner(),
                    self.content.user(),
                );
                components::message_dialog::view(
                    self.content.partner(),
                    &self.ui.message_dialog.text,
                    &placeholder,
                    self.ui.message_dialog.copied,
                    message_progress,
                    locale,
                )
            } else {
                Space::new().width(0).height(0).into()
            };

        let lightbox_progress = self.ui.lightbox.reveal.progress();
        let lightbox_overlay: Element<'_, Message> = match (
            self.ui.lightbox.selected,
            &self.content.gallery,
        ) {
            (Some(index), Some(gallery)) => {
                components::lightbox::view(&gallery.items, index, lightbox_progress, locale)
            }
            _ => Space::new().width(0).height(0).into(),
        };

        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![
            backdrop,
            ember_overlay,
            main,
            theme_menu_overlay,
            highlights_overlay,
            moment_overlay,
            message_overlay,
            lightbox_overlay,
            toast_overlay,
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
