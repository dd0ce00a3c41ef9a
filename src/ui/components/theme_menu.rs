//! Theme and effects popup menu, anchored under the header's theme button

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{Settings, ThemeMode};
use crate::i18n::{Key, Language, Locale};
use crate::ui::components::header::HEADER_HEIGHT;
use crate::ui::theme;

/// Build the theme menu overlay
pub fn view<'a>(settings: &'a Settings, locale: Locale) -> Element<'a, Message> {
    let section_label = |key: Key| {
        container(text(locale.get(key)).size(11).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }))
        .padding(Padding::new(4.0).left(14.0))
    };

    let mode_row = |mode: ThemeMode| {
        let (icon, label_key) = match mode {
            ThemeMode::Light => ("☀", Key::ThemeLight),
            ThemeMode::Dark => ("☾", Key::ThemeDark),
            ThemeMode::System => ("⌂", Key::ThemeSystem),
        };
        let selected = settings.display.theme == mode;

        let mut entry = row![
            text(icon).size(13),
            text(locale.get(label_key)).size(13),
            Space::new().width(Fill),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        if selected {
            entry = entry.push(text("✓").size(13).color(theme::TERRACOTTA));
        }

        button(entry)
            .width(Fill)
            .padding(Padding::new(8.0).left(14.0).right(14.0))
            .style(move |theme, status| {
                let mut style = theme::link_button(theme, status);
                if selected {
                    style.text_color = theme::TERRACOTTA;
                }
                style
            })
            .on_press(Message::SetThemeMode(mode))
    };

    let embers_row = row![
        text(locale.get(Key::EffectsEmbers)).size(13),
        Space::new().width(Fill),
        toggler(settings.effects.embers_enabled)
            .on_toggle(Message::SetEmbersEnabled)
            .size(18),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(8.0).left(14.0).right(14.0));

    let language_row = |language: Language| {
        let selected = locale.language == language;
        button(text(language.display_name()).size(13))
            .padding(Padding::new(6.0).left(12.0).right(12.0))
            .style(move |theme, status| {
                let mut style = theme::link_button(theme, status);
                if selected {
                    style.text_color = theme::TERRACOTTA;
                }
                style
            })
            .on_press(Message::SetLanguage(language))
    };
    let mut languages = row![].spacing(4).padding(Padding::new(0.0).left(10.0));
    for language in Language::all() {
        languages = languages.push(language_row(*language));
    }

    let divider = container(Space::new().width(Fill).height(1))
        .padding(Padding::new(6.0).left(10.0).right(10.0))
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::border_color(theme))),
            ..Default::default()
        });

    let mut menu_content = column![section_label(Key::ThemeSectionTitle)];
    for mode in ThemeMode::all() {
        menu_content = menu_content.push(mode_row(*mode));
    }
    menu_content = menu_content
        .push(divider)
        .push(section_label(Key::EffectsSectionTitle))
        .push(embers_row)
        .push(languages);
    let menu_content = menu_content
        .width(210)
        .padding(Padding::new(8.0).top(10.0).bottom(12.0));

    let menu = container(menu_content).style(|theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(theme::surface_elevated(theme))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 1.0,
            color: theme::border_color(theme),
        },
        shadow: iced::Shadow {
            color: theme::shadow_color(theme),
            offset: iced::Vector::new(0.0, 6.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    });

    let menu = mouse_area(menu).on_press(Message::Noop);

    // Anchor below the theme button at the top-right corner
    let anchored = container(menu)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .padding(Padding::new(8.0).top(HEADER_HEIGHT + 4.0).right(16.0));

    let blocker = mouse_area(anchored)
        .interaction(Interaction::Idle)
        .on_press(Message::ToggleThemeMenu);

    opaque(blocker).into()
}
