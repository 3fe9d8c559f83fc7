//! Biophilia quiz scoring.
//!
//! A completed quiz is ten answers on a `1..=10` scale. The score is the sum
//! of the answers as a percentage of the maximum possible sum, rounded half
//! to even.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Tier;

/// Questions asked by the biophilia quiz, in order.
pub const QUIZ_QUESTIONS: [&str; 10] = [
    "How many hours per week do you spend in natural settings?",
    "Do you have plants in your home?",
    "How often do you notice birds, insects, or other wildlife?",
    "Do you prefer natural materials (wood, stone, etc.) in your living space?",
    "How important is access to nature for your well-being?",
    "Do you engage in outdoor recreational activities?",
    "Do you feel a sense of awe or wonder in natural settings?",
    "Do you take action to protect natural environments?",
    "How connected do you feel to the cycles of nature (seasons, day/night)?",
    "Do you seek out information about nature or environmental topics?",
];

/// Accepted range for a single quiz answer.
pub const ANSWER_RANGE: RangeInclusive<u8> = 1..=10;

const POINTS_PER_QUESTION: u64 = 10;

/// Normalise quiz answers to a percentage of the maximum possible total.
///
/// Returns `0` for an empty slice. Answers are not range-checked: values
/// above ten push the result past 100 proportionally. Use [`QuizAnswers`]
/// to validate a completed quiz first.
///
/// # Examples
/// ```
/// use natureconnect_core::calculate_score;
///
/// assert_eq!(calculate_score(&[]), 0);
/// assert_eq!(calculate_score(&[10; 10]), 100);
/// assert_eq!(calculate_score(&[5, 6, 7, 8, 9, 5, 6, 7, 8, 9]), 70);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the percentage is rounded from a float ratio of small integer totals"
)]
#[must_use]
pub fn calculate_score(answers: &[u32]) -> u32 {
    if answers.is_empty() {
        return 0;
    }
    let total: u64 = answers.iter().copied().map(u64::from).sum();
    let max_total = answers.len() as u64 * POINTS_PER_QUESTION;
    let percentage = (total as f64 / max_total as f64) * 100.0;
    percentage.round_ties_even() as u32
}

/// A biophilia score in `0..=100`.
///
/// # Examples
/// ```
/// use natureconnect_core::{BiophiliaScore, Tier};
///
/// let score = BiophiliaScore::new(72).expect("score within range");
/// assert_eq!(score.value(), 72);
/// assert_eq!(score.tier(), Tier::High);
/// assert!(BiophiliaScore::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BiophiliaScore(u8);

/// Error returned when a score exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("biophilia score {value} is outside 0..=100")]
pub struct BiophiliaScoreError {
    /// The rejected value.
    pub value: u8,
}

impl BiophiliaScore {
    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Validate and wrap `value`.
    ///
    /// # Errors
    /// Returns [`BiophiliaScoreError`] when `value` is above 100.
    pub const fn new(value: u8) -> Result<Self, BiophiliaScoreError> {
        if value > Self::MAX.0 {
            return Err(BiophiliaScoreError { value });
        }
        Ok(Self(value))
    }

    /// Score a validated quiz.
    #[must_use]
    pub fn from_answers(answers: &QuizAnswers) -> Self {
        let widened: Vec<u32> = answers.as_slice().iter().copied().map(u32::from).collect();
        let raw = calculate_score(&widened);
        u8::try_from(raw).map_or(Self::MAX, |value| Self(value.min(Self::MAX.0)))
    }

    /// The score as an integer percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Recommendation tier for this score.
    #[must_use]
    pub fn tier(self) -> Tier {
        Tier::for_score(u32::from(self.0))
    }
}

impl TryFrom<u8> for BiophiliaScore {
    type Error = BiophiliaScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BiophiliaScore> for u8 {
    fn from(score: BiophiliaScore) -> Self {
        score.0
    }
}

/// Answers to a completed quiz: one per question, each within
/// [`ANSWER_RANGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers(Vec<u8>);

/// Errors returned by [`QuizAnswers::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizAnswersError {
    /// The number of answers did not match the number of questions.
    #[error("expected {expected} answers, found {found}")]
    WrongCount {
        /// Number of quiz questions.
        expected: usize,
        /// Number of answers supplied.
        found: usize,
    },
    /// An answer fell outside the accepted range.
    #[error("answer {answer} to question {question} is outside 1..=10")]
    OutOfRange {
        /// One-based question number.
        question: usize,
        /// The rejected answer.
        answer: u8,
    },
}

impl QuizAnswers {
    /// Validate a full set of quiz answers.
    ///
    /// # Errors
    /// Returns [`QuizAnswersError::WrongCount`] unless exactly one answer per
    /// question is given, and [`QuizAnswersError::OutOfRange`] for the first
    /// answer outside [`ANSWER_RANGE`].
    ///
    /// # Examples
    /// ```
    /// use natureconnect_core::{BiophiliaScore, QuizAnswers};
    ///
    /// let answers = QuizAnswers::new(vec![1; 10]).expect("valid answers");
    /// assert_eq!(BiophiliaScore::from_answers(&answers).value(), 10);
    /// assert!(QuizAnswers::new(vec![11; 10]).is_err());
    /// ```
    pub fn new(answers: Vec<u8>) -> Result<Self, QuizAnswersError> {
        if answers.len() != QUIZ_QUESTIONS.len() {
            return Err(QuizAnswersError::WrongCount {
                expected: QUIZ_QUESTIONS.len(),
                found: answers.len(),
            });
        }
        if let Some((index, &answer)) = answers
            .iter()
            .enumerate()
            .find(|(_, answer)| !ANSWER_RANGE.contains(*answer))
        {
            return Err(QuizAnswersError::OutOfRange {
                question: index + 1,
                answer,
            });
        }
        Ok(Self(answers))
    }

    /// Borrow the answers in question order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 0)]
    #[case(&[10; 10], 100)]
    #[case(&[1; 10], 10)]
    #[case(&[5, 6, 7, 8, 9, 5, 6, 7, 8, 9], 70)]
    #[case(&[1, 1, 1, 2], 12)]
    #[case(&[1, 2, 2, 2], 18)]
    fn score_matches_reference_values(#[case] answers: &[u32], #[case] expected: u32) {
        assert_eq!(calculate_score(answers), expected);
    }

    #[rstest]
    fn raw_formula_is_not_clamped() {
        assert_eq!(calculate_score(&[20; 10]), 200);
    }

    #[rstest]
    fn validated_answers_always_score_within_range() {
        let answers = QuizAnswers::new(vec![10; 10]).expect("valid answers");
        assert_eq!(BiophiliaScore::from_answers(&answers), BiophiliaScore::MAX);
    }

    #[rstest]
    #[case(vec![5; 9], QuizAnswersError::WrongCount { expected: 10, found: 9 })]
    #[case(vec![5; 11], QuizAnswersError::WrongCount { expected: 10, found: 11 })]
    #[case(
        vec![5, 5, 0, 5, 5, 5, 5, 5, 5, 5],
        QuizAnswersError::OutOfRange { question: 3, answer: 0 }
    )]
    #[case(
        vec![5, 5, 5, 5, 5, 5, 5, 5, 5, 11],
        QuizAnswersError::OutOfRange { question: 10, answer: 11 }
    )]
    fn quiz_answers_reject_invalid_input(
        #[case] answers: Vec<u8>,
        #[case] expected: QuizAnswersError,
    ) {
        assert_eq!(QuizAnswers::new(answers), Err(expected));
    }

    #[rstest]
    fn stored_scores_above_range_fail_to_deserialise() {
        let result: Result<BiophiliaScore, _> = serde_json::from_str("150");
        assert!(result.is_err());
        let score: BiophiliaScore = serde_json::from_str("65").expect("valid score");
        assert_eq!(score.value(), 65);
    }
}
