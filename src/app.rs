//! Quiz session state.
//!
//! One [`App`] covers one attempt at the quiz, from fetch to either a final
//! score or a load failure. A retry replaces the session wholesale.

use uuid::Uuid;

use crate::data::LoadError;
use crate::events::{Feedback, FeedbackSender};
use crate::models::Question;

const NUM_OPTIONS: usize = 4;

/// Score needed, out of five, to earn the celebration.
pub const SUCCESS_THRESHOLD: usize = 3;

/// The one user-facing message for every kind of load failure.
const LOAD_ERROR_MESSAGE: &str = "Failed to load questions. Please try again.";

/// Where the session currently is, as the UI sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; the message is user-facing.
    Error(String),
    /// Questions are loaded and one is on screen.
    InProgress,
    /// All questions have been answered.
    Finished,
}

/// Handle for a scheduled advance to the next question.
///
/// A ticket is only honored by the session and question it was minted for;
/// once either moves on, applying it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    token: Uuid,
    question_index: usize,
}

pub struct App {
    pub status: SessionStatus,
    pub should_quit: bool,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_option: usize,
    dark_mode: bool,
    /// Identifies the fetch whose result is allowed to commit.
    load_token: Uuid,
    /// Set between answering and the deferred advance firing.
    advance_pending: bool,
    last_feedback: Option<Feedback>,
    feedback: FeedbackSender,
}

impl App {
    pub fn new(feedback: FeedbackSender, dark_mode: bool) -> Self {
        Self {
            status: SessionStatus::Loading,
            should_quit: false,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            selected_option: 0,
            dark_mode,
            load_token: Uuid::new_v4(),
            advance_pending: false,
            last_feedback: None,
            feedback,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// One-based number of the question on screen.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Text of the highlighted option, if a question is on screen.
    pub fn selected_option_text(&self) -> Option<&str> {
        self.current_question()
            .map(|q| q.options[self.selected_option].as_str())
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Feedback for the answer just given, shown until the advance fires.
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    /// Whether the final score earns the celebration.
    pub fn is_celebration(&self) -> bool {
        self.score >= SUCCESS_THRESHOLD
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    /// Flip the color scheme. Orthogonal to quiz state; survives restarts.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Enter Loading and mint the token the next commit must present.
    ///
    /// Any in-flight fetch or scheduled advance from the previous session is
    /// superseded from this point on; its token no longer matches.
    pub fn begin_loading(&mut self) -> Uuid {
        self.status = SessionStatus::Loading;
        self.load_token = Uuid::new_v4();
        self.advance_pending = false;
        self.last_feedback = None;
        self.load_token
    }

    /// Commit the outcome of a fetch.
    ///
    /// A result carrying a stale token belongs to a superseded `load` and is
    /// discarded. On success the session starts over from question one; on
    /// failure the status carries the user-facing message and the previous
    /// question set is left alone.
    pub fn commit_load(&mut self, token: Uuid, result: Result<Vec<Question>, LoadError>) {
        if token != self.load_token {
            log::debug!("discarding result of superseded fetch");
            return;
        }

        match result {
            Ok(questions) => {
                self.questions = questions;
                self.current_index = 0;
                self.score = 0;
                self.selected_option = 0;
                self.status = SessionStatus::InProgress;
                log::debug!("session started with {} questions", self.questions.len());
            }
            Err(err) => {
                log::warn!("failed to load questions: {err}");
                self.status = SessionStatus::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Record an answer for the question on screen.
    ///
    /// Returns the ticket for the deferred advance, or `None` when the call
    /// is out of turn: not `InProgress`, or an advance is already pending
    /// (a second submission inside the delay window is ignored). Out-of-turn
    /// calls mutate nothing.
    pub fn record_answer(&mut self, selected: &str) -> Option<AdvanceTicket> {
        if self.status != SessionStatus::InProgress || self.advance_pending {
            return None;
        }
        let question = self.questions.get(self.current_index)?;

        let feedback = if question.is_correct(selected) {
            self.score += 1;
            Feedback::Correct
        } else {
            Feedback::Incorrect
        };
        self.last_feedback = Some(feedback);
        let _ = self.feedback.send(feedback);

        self.advance_pending = true;
        Some(AdvanceTicket {
            token: self.load_token,
            question_index: self.current_index,
        })
    }

    /// Apply a deferred advance.
    ///
    /// Stale tickets are ignored, so a timer that outlives its session (a
    /// restart mid-delay) cannot corrupt the one that replaced it.
    pub fn apply_advance(&mut self, ticket: AdvanceTicket) {
        if ticket.token != self.load_token
            || self.status != SessionStatus::InProgress
            || ticket.question_index != self.current_index
            || !self.advance_pending
        {
            return;
        }

        self.advance_pending = false;
        self.last_feedback = None;
        self.selected_option = 0;
        self.current_index += 1;

        if self.current_index >= self.questions.len() {
            self.status = SessionStatus::Finished;
            if self.is_celebration() {
                let _ = self.feedback.send(Feedback::Celebrate);
            }
        }
    }
}
