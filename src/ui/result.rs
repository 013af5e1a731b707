//! Final score screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let celebrating = app.is_celebration();
    let (headline, headline_color) = if celebrating {
        ("GREAT JOB!", Color::Green)
    } else {
        ("QUIZ OVER", Color::Yellow)
    };

    let mut content = vec![Line::from("")];
    if celebrating {
        content.push(confetti_line());
    } else {
        content.push(Line::from(""));
    }
    content.extend([
        Line::from(Span::styled(
            headline,
            Style::default().fg(headline_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score: {} / {}", app.score(), app.total_questions()),
            Style::default().fg(palette.text).bold(),
        )),
        Line::from(""),
    ]);
    if celebrating {
        content.push(confetti_line());
    } else {
        content.push(Line::from(""));
    }
    content.extend([
        Line::from(""),
        Line::from("r restart  ·  t theme  ·  q quit".fg(palette.dim)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.dim),
    );

    frame.render_widget(widget, chunks[1]);
}

fn confetti_line() -> Line<'static> {
    let colors = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Magenta,
    ];
    let spans: Vec<Span> = colors
        .iter()
        .cycle()
        .take(15)
        .map(|c| Span::styled("* ", Style::default().fg(*c)))
        .collect();
    Line::from(spans)
}
