mod error;
mod loading;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, SessionStatus};

/// Colors derived from the theme toggle.
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Palette {
    fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Reset,
                text: Color::White,
                accent: Color::Cyan,
                dim: Color::DarkGray,
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
            }
        }
    }
}

/// Render the screen for the current session status.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::new(app.dark_mode());
    frame.render_widget(Block::default().bg(palette.background), area);

    match &app.status {
        SessionStatus::Loading => loading::render(frame, area, &palette),
        SessionStatus::Error(message) => error::render(frame, area, &palette, message),
        SessionStatus::InProgress => quiz::render(frame, area, app, &palette),
        SessionStatus::Finished => result::render(frame, area, app, &palette),
    }
}
