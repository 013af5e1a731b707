use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Loading questions...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
