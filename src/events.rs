//! Feedback signals for external widgets.
//!
//! The session controller announces what just happened; whatever wants to
//! react (a sound player, a celebration effect) subscribes to the channel.
//! The sink shipped here logs the events.

use tokio::sync::mpsc;

/// A feedback signal emitted by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The submitted answer was right.
    Correct,
    /// The submitted answer was wrong.
    Incorrect,
    /// The session finished at or above the success threshold.
    Celebrate,
}

pub type FeedbackSender = mpsc::UnboundedSender<Feedback>;
pub type FeedbackReceiver = mpsc::UnboundedReceiver<Feedback>;

/// Create the feedback channel.
pub fn channel() -> (FeedbackSender, FeedbackReceiver) {
    mpsc::unbounded_channel()
}

/// Drain feedback events into the log.
pub fn spawn_sink(mut rx: FeedbackReceiver) {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                Feedback::Correct => log::debug!("feedback: correct answer"),
                Feedback::Incorrect => log::debug!("feedback: wrong answer"),
                Feedback::Celebrate => log::debug!("feedback: celebrate"),
            }
        }
    });
}
