//! Open Trivia DB client.

use rand::Rng;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Question;
use crate::text::decode_entities;

/// How many questions make up one session.
pub const QUESTION_COUNT: usize = 5;

// Fixed query: five questions, General Knowledge, easy, multiple choice.
const API_URL: &str =
    "https://opentdb.com/api.php?amount=5&category=9&difficulty=easy&type=multiple";

/// Why a fetch produced no question set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider returned response code {0}")]
    Api(i32),
    #[error("provider returned no questions")]
    Empty,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the trivia provider.
#[derive(Clone)]
pub struct TriviaClient {
    client: Client,
}

impl TriviaClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch one session's worth of questions.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the request fails, the provider reports a
    /// non-zero response code, or the result list is empty.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, LoadError> {
        log::debug!("fetching questions from {API_URL}");

        let response = self.client.get(API_URL).send().await?;
        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body: ApiResponse = response.json().await?;
        build_questions(body, &mut rand::rng())
    }
}

impl Default for TriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: i32,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: [String; 3],
}

/// Turn the provider envelope into shuffled questions.
///
/// Provider text is untrusted and arrives with HTML entities; it is decoded
/// to plain text here so nothing downstream ever treats it as markup.
fn build_questions<R: Rng + ?Sized>(
    body: ApiResponse,
    rng: &mut R,
) -> Result<Vec<Question>, LoadError> {
    if body.response_code != 0 {
        return Err(LoadError::Api(body.response_code));
    }
    if body.results.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(body
        .results
        .into_iter()
        .map(|q| {
            Question::from_answers(
                decode_entities(&q.question),
                decode_entities(&q.correct_answer),
                q.incorrect_answers.map(|a| decode_entities(&a)),
                rng,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn parse(json: &str) -> ApiResponse {
        serde_json::from_str(json).expect("payload should parse")
    }

    fn ok_payload() -> String {
        let result = |n: usize| {
            format!(
                r#"{{"question":"Question {n}?","correct_answer":"Right {n}","incorrect_answers":["Wrong A","Wrong B","Wrong C"]}}"#
            )
        };
        let results: Vec<String> = (1..=QUESTION_COUNT).map(result).collect();
        format!(
            r#"{{"response_code":0,"results":[{}]}}"#,
            results.join(",")
        )
    }

    #[test]
    fn builds_full_question_set() {
        let body = parse(&ok_payload());
        let mut rng = StdRng::seed_from_u64(3);
        let questions = build_questions(body, &mut rng).expect("should build");

        assert_eq!(questions.len(), QUESTION_COUNT);
        for q in &questions {
            let hits = q.options.iter().filter(|o| q.is_correct(o)).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn nonzero_response_code_is_an_error() {
        let body = parse(r#"{"response_code":1,"results":[]}"#);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build_questions(body, &mut rng),
            Err(LoadError::Api(1))
        ));
    }

    #[test]
    fn empty_results_is_an_error() {
        let body = parse(r#"{"response_code":0,"results":[]}"#);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build_questions(body, &mut rng),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_results_field_is_an_error() {
        let body = parse(r#"{"response_code":0}"#);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build_questions(body, &mut rng),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn entities_are_decoded_before_questions_are_built() {
        let body = parse(
            r#"{"response_code":0,"results":[{
                "question":"Who wrote &quot;Hamlet&quot;?",
                "correct_answer":"Shakespeare &amp; co",
                "incorrect_answers":["Marlowe","Jonson","Webster&#039;s"]
            }]}"#,
        );
        let mut rng = StdRng::seed_from_u64(9);
        let questions = build_questions(body, &mut rng).expect("should build");

        assert_eq!(questions[0].prompt, "Who wrote \"Hamlet\"?");
        assert!(questions[0].is_correct("Shakespeare & co"));
        assert!(questions[0].options.iter().any(|o| o == "Webster's"));
    }
}
