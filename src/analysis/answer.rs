//! Mock answer scoring.

use crate::consts::cli_consts::interview::{MAX_SCORE, MIN_SCORE};
use crate::interview::Question;
use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Sentiment {
    Positive,
    Neutral,
    #[strum(serialize = "Needs improvement")]
    NeedsImprovement,
}

impl Sentiment {
    fn from_score(score: f64) -> Self {
        if score > 70.0 {
            Sentiment::Positive
        } else if score > 50.0 {
            Sentiment::Neutral
        } else {
            Sentiment::NeedsImprovement
        }
    }
}

/// Feedback for one submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
}

const STRENGTHS: [&str; 3] = [
    "Good technical knowledge demonstrated",
    "Clear communication style",
    "Relevant examples provided",
];

const IMPROVEMENTS: [&str; 3] = [
    "Could provide more specific examples",
    "Consider discussing edge cases",
    "Elaborate on implementation details",
];

/// Scores `answer` against `question`.
///
/// The score grows with the word count, gets a bonus when any tip is quoted in
/// the answer, is perturbed by up to 20 points from `rng` and is finally
/// clamped to 40..=90.
///
/// Words are the pieces between single spaces, empty pieces included, so a
/// newline does not separate words and a double space adds one.
pub fn analyze_answer<R: Rng + ?Sized>(
    answer: &str,
    question: &Question,
    rng: &mut R,
) -> Feedback {
    let word_count = answer.split(' ').count();
    let has_keywords = mentions_tip(answer, question);

    let bonus = if has_keywords { 20.0 } else { 0.0 };
    let raw = (word_count as f64 * 2.0 + bonus + rng.gen_range(0.0..20.0))
        .clamp(MIN_SCORE, MAX_SCORE);

    let keywords = if has_keywords {
        "Technical concepts covered"
    } else {
        "Missing key concepts"
    };

    Feedback {
        score: raw.round() as u8,
        strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
        improvements: IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        keywords: vec![keywords.to_string()],
        sentiment: Sentiment::from_score(raw),
    }
}

fn mentions_tip(answer: &str, question: &Question) -> bool {
    let answer = answer.to_lowercase();
    question
        .tips
        .iter()
        .any(|tip| answer.contains(&tip.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::questions::sample_questions;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    // Any answer scores within the mock bounds.
    fn test_score_is_bounded() {
        let questions = sample_questions();
        let mut rng = StdRng::seed_from_u64(7);
        let long_answer = "word ".repeat(500);
        for answer in ["yes", "I would use REST", long_answer.as_str(), ""] {
            for question in &questions {
                for _ in 0..50 {
                    let feedback = analyze_answer(answer, question, &mut rng);
                    assert!((40..=90).contains(&feedback.score), "score {}", feedback.score);
                }
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let question = &sample_questions()[0];
        let a = analyze_answer("some answer text", question, &mut StdRng::seed_from_u64(42));
        let b = analyze_answer("some answer text", question, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tip_mention_is_case_insensitive() {
        let question = &sample_questions()[1];
        let mut rng = StdRng::seed_from_u64(1);
        let feedback = analyze_answer("I always USE STAR METHOD here", question, &mut rng);
        assert_eq!(feedback.keywords, vec!["Technical concepts covered"]);

        let feedback = analyze_answer("I would talk to them", question, &mut rng);
        assert_eq!(feedback.keywords, vec!["Missing key concepts"]);
    }

    #[test]
    // A long answer with a tip saturates at the upper bound.
    fn test_long_answer_hits_ceiling() {
        let question = &sample_questions()[2];
        let answer = format!("{} consider scalability", "detail ".repeat(60));
        let feedback = analyze_answer(&answer, question, &mut StdRng::seed_from_u64(3));
        assert_eq!(feedback.score, 90);
        assert_eq!(feedback.sentiment, Sentiment::Positive);
    }

    #[test]
    // A one-word answer without tips can never exceed 2 + 20 points, so it is floored.
    fn test_short_answer_hits_floor() {
        let question = &sample_questions()[0];
        let feedback = analyze_answer("dunno", question, &mut StdRng::seed_from_u64(9));
        assert_eq!(feedback.score, 40);
        assert_eq!(feedback.sentiment, Sentiment::NeedsImprovement);
    }

    #[test]
    fn test_sentiment_thresholds() {
        assert_eq!(Sentiment::from_score(70.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(70.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(50.0), Sentiment::NeedsImprovement);
        assert_eq!(Sentiment::NeedsImprovement.to_string(), "Needs improvement");
    }

    #[test]
    // Only single spaces separate words.
    fn test_word_count_splits_on_single_spaces() {
        let question = &sample_questions()[0];
        let words = vec!["word"; 30];

        let by_newline = analyze_answer(&words.join("\n"), question, &mut StepRng::new(0, 0));
        assert_eq!(by_newline.score, 40);

        let by_space = analyze_answer(&words.join(" "), question, &mut StepRng::new(0, 0));
        assert_eq!(by_space.score, 60);

        // 25 words and 24 empty pieces
        let doubled = vec!["word"; 25].join("  ");
        let by_double_space = analyze_answer(&doubled, question, &mut StepRng::new(0, 0));
        assert_eq!(by_double_space.score, 90);
    }
}
