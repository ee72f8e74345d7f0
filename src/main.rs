//! TextDrawable - contact list with generated initials avatars
//! Built with iced; avatars are drawn on a canvas and can be exported as PNG

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(iced::Size::new(720.0, 900.0))
        .antialiasing(true)
        .run()
}
