//! Wrapped - a couple's digital gift presentation
//! Built with iced for a warm, cozy single-page UI

mod app;
mod audio;
mod data;
mod features;
mod i18n;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(1100.0, 860.0))
        .run()
}
