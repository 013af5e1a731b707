use rand::Rng;
use rand::seq::SliceRandom;

/// A single multiple-choice question with its options in display order.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct_answer: String,
}

impl Question {
    /// Build a question from the correct answer and the three wrong ones.
    ///
    /// The options are shuffled so the correct one isn't always in the same
    /// position.
    pub fn from_answers<R: Rng + ?Sized>(
        prompt: String,
        correct_answer: String,
        incorrect_answers: [String; 3],
        rng: &mut R,
    ) -> Self {
        let [a, b, c] = incorrect_answers;
        let mut options = [correct_answer.clone(), a, b, c];
        options.shuffle(rng);

        Self {
            prompt,
            options,
            correct_answer,
        }
    }

    /// Whether the given option text is the correct answer.
    ///
    /// Matching is exact string equality, so if the source data duplicates
    /// the correct text among the wrong answers, any copy counts.
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sample(rng: &mut StdRng) -> Question {
        Question::from_answers(
            "What is the capital of France?".into(),
            "Paris".into(),
            ["London".into(), "Berlin".into(), "Madrid".into()],
            rng,
        )
    }

    #[test]
    fn options_contain_correct_answer_exactly_once() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let q = sample(&mut rng);
            let hits = q.options.iter().filter(|o| q.is_correct(o)).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn shuffle_keeps_all_four_options() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = sample(&mut rng);
        let mut sorted: Vec<&str> = q.options.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, ["Berlin", "London", "Madrid", "Paris"]);
    }

    #[test]
    fn matching_is_exact_text_equality() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = sample(&mut rng);
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("paris"));
        assert!(!q.is_correct("London"));
    }
}
