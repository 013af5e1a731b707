//! # trivia-quiz
//!
//! A terminal trivia quiz: five easy multiple-choice questions fetched from
//! the Open Trivia DB, answered one at a time, with a celebration for three
//! or more correct.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::Quiz;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fetch a round of questions and run the quiz in the terminal.
//!     Quiz::new(true).run().await
//! }
//! ```

mod app;
mod data;
mod events;
mod models;
pub mod terminal;
mod text;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::Mutex;

pub use app::{App, SUCCESS_THRESHOLD, SessionStatus};
pub use data::{LoadError, QUESTION_COUNT, TriviaClient};
pub use events::Feedback;
pub use models::Question;
pub use text::decode_entities;

/// Delay between answering and moving on, so the feedback can land first.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(500);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Shared session state, mutated by the event loop and the spawned
/// fetch and advance tasks.
type SharedApp = Arc<Mutex<App>>;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: SharedApp,
    client: TriviaClient,
    feedback_rx: Option<events::FeedbackReceiver>,
}

impl Quiz {
    /// Create a new quiz. `dark_mode` picks the starting color scheme.
    pub fn new(dark_mode: bool) -> Self {
        let (tx, rx) = events::channel();
        Self {
            app: Arc::new(Mutex::new(App::new(tx, dark_mode))),
            client: TriviaClient::new(),
            feedback_rx: Some(rx),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, starts the first fetch, and returns when the
    /// user quits.
    pub async fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(rx) = self.feedback_rx.take() {
            events::spawn_sink(rx);
        }
        spawn_load(&self.app, &self.client).await;

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &self.app, &self.client).await;
        terminal::restore()?;
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &SharedApp,
    client: &TriviaClient,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        // Poll with a timeout so state changed by background tasks (a fetch
        // landing, a deferred advance firing) reaches the screen promptly.
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_input(app, client, key.code).await;
            }
        }
    }

    Ok(())
}

async fn handle_input(app: &SharedApp, client: &TriviaClient, key: KeyCode) {
    // Quit and theme work on every screen.
    {
        let mut app = app.lock().await;
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                app.toggle_theme();
                return;
            }
            _ => {}
        }
    }

    let status = app.lock().await.status.clone();
    match status {
        SessionStatus::Loading => {}
        SessionStatus::Error(_) | SessionStatus::Finished => {
            if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
                spawn_load(app, client).await;
            }
        }
        SessionStatus::InProgress => match key {
            KeyCode::Up | KeyCode::Char('k') => app.lock().await.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.lock().await.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => submit_answer(app).await,
            _ => {}
        },
    }
}

/// Start a fetch and commit its outcome.
///
/// The commit presents the token minted here, so a fetch superseded by a
/// newer `spawn_load` call is discarded when it finally lands.
async fn spawn_load(app: &SharedApp, client: &TriviaClient) {
    let token = app.lock().await.begin_loading();

    let app = Arc::clone(app);
    let client = client.clone();
    tokio::spawn(async move {
        let result = client.fetch_questions().await;
        app.lock().await.commit_load(token, result);
    });
}

/// Submit the highlighted option and schedule the deferred advance.
async fn submit_answer(app: &SharedApp) {
    let ticket = {
        let mut app = app.lock().await;
        let Some(selected) = app.selected_option_text().map(str::to_string) else {
            return;
        };
        app.record_answer(&selected)
    };

    // None means the call was out of turn; nothing to schedule.
    let Some(ticket) = ticket else {
        return;
    };

    let app = Arc::clone(app);
    tokio::spawn(async move {
        tokio::time::sleep(ADVANCE_DELAY).await;
        app.lock().await.apply_advance(ticket);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_questions() -> Vec<Question> {
        (1..=5)
            .map(|n| Question {
                prompt: format!("Question {n}?"),
                options: [
                    format!("Right {n}"),
                    "Wrong A".into(),
                    "Wrong B".into(),
                    "Wrong C".into(),
                ],
                correct_answer: format!("Right {n}"),
            })
            .collect()
    }

    async fn loaded_shared_app() -> (SharedApp, events::FeedbackReceiver) {
        let (tx, rx) = events::channel();
        let app: SharedApp = Arc::new(Mutex::new(App::new(tx, true)));
        {
            let mut app = app.lock().await;
            let token = app.begin_loading();
            app.commit_load(token, Ok(test_questions()));
        }
        (app, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_advance_fires_only_after_the_delay() {
        let (app, _rx) = loaded_shared_app().await;

        submit_answer(&app).await;
        // Let the spawned advance task be polled so it parks on its timer
        // before virtual time is advanced; otherwise `advance` fires nothing.
        tokio::task::yield_now().await;
        {
            let app = app.lock().await;
            assert_eq!(app.score(), 1);
            assert_eq!(app.question_number(), 1);
        }

        // Just short of the delay: still on the first question.
        tokio::time::advance(ADVANCE_DELAY - Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(app.lock().await.question_number(), 1);

        tokio::time::advance(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert_eq!(app.lock().await.question_number(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn double_submission_during_the_delay_scores_once() {
        let (app, _rx) = loaded_shared_app().await;

        submit_answer(&app).await;
        submit_answer(&app).await;
        // Let the spawned advance task park on its timer before advancing the
        // virtual clock; otherwise `advance` fires nothing.
        tokio::task::yield_now().await;

        tokio::time::advance(ADVANCE_DELAY + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        let app = app.lock().await;
        assert_eq!(app.score(), 1);
        assert_eq!(app.question_number(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_during_the_delay_discards_the_old_advance() {
        let (app, _rx) = loaded_shared_app().await;

        submit_answer(&app).await;

        // A new session replaces the old one before the timer fires.
        {
            let mut app = app.lock().await;
            let token = app.begin_loading();
            app.commit_load(token, Ok(test_questions()));
        }

        tokio::time::advance(ADVANCE_DELAY + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        let app = app.lock().await;
        assert_eq!(app.status, SessionStatus::InProgress);
        assert_eq!(app.question_number(), 1);
        assert_eq!(app.score(), 0);
    }
}
