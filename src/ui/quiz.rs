//! Question screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::App;
use crate::events::Feedback;

use super::Palette;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),  // progress
        Constraint::Length(6),  // question text
        Constraint::Min(10),    // options
        Constraint::Length(1),  // feedback flash
        Constraint::Length(1),  // controls
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app, palette);
    render_question_text(frame, chunks[1], &question.prompt, palette);
    render_options(
        frame,
        chunks[2],
        &question.options,
        app.selected_option(),
        palette,
    );
    render_feedback(frame, chunks[3], app.last_feedback());
    render_controls(frame, chunks[4], palette);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let progress = format!(
        "Question {} of {}    Score {}",
        app.question_number(),
        app.total_questions(),
        app.score()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(palette.dim);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(palette.text)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.dim)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; 4],
    selected: usize,
    palette: &Palette,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(palette.accent).bold()
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<Feedback>) {
    let (text, color) = match feedback {
        Some(Feedback::Correct) => ("Correct!", Color::Green),
        Some(Feedback::Incorrect) => ("Wrong!", Color::Red),
        _ => return,
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold());
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  t theme  ·  q quit")
        .alignment(Alignment::Center)
        .fg(palette.dim);
    frame.render_widget(widget, area);
}
