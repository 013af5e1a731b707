mod provider;

pub use provider::{LoadError, QUESTION_COUNT, TriviaClient};
