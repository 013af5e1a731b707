use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(9),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SOMETHING WENT WRONG",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(""),
        Line::from("r retry  ·  q quit".fg(palette.dim)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.dim),
    );

    frame.render_widget(widget, chunks[1]);
}
