//! Outcome of comparing a movie's Rotten Tomatoes score with a guess.

use std::cmp::Ordering;
use std::fmt;

/// How a movie's score relates to the score it was compared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreVerdict {
    /// The movie scored strictly higher.
    Higher,
    /// The movie scored strictly lower.
    Lower,
    /// The scores are equal (or unordered).
    Equal,
}

impl ScoreVerdict {
    /// Compares `movie_score` against `score`. Unordered values (NaN) count as equal.
    pub fn of(movie_score: f64, score: f64) -> Self {
        match movie_score.partial_cmp(&score) {
            Some(Ordering::Greater) => ScoreVerdict::Higher,
            Some(Ordering::Less) => ScoreVerdict::Lower,
            Some(Ordering::Equal) | None => ScoreVerdict::Equal,
        }
    }
}

impl fmt::Display for ScoreVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreVerdict::Higher => write!(f, "You are right! Rotten tomatoes score is higher!"),
            ScoreVerdict::Lower => write!(f, "Sorry, but it is not("),
            ScoreVerdict::Equal => write!(f, "Wow! There are equal!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_ordering() {
        assert_eq!(ScoreVerdict::of(96.0, 3.0), ScoreVerdict::Higher);
        assert_eq!(ScoreVerdict::of(96.0, f64::MAX), ScoreVerdict::Lower);
        assert_eq!(ScoreVerdict::of(96.0, f64::MIN), ScoreVerdict::Higher);
        assert_eq!(ScoreVerdict::of(64.9, 64.9), ScoreVerdict::Equal);
        assert_eq!(ScoreVerdict::of(96.0, f64::INFINITY), ScoreVerdict::Lower);
        assert_eq!(ScoreVerdict::of(96.0, f64::NAN), ScoreVerdict::Equal);
    }

    #[test]
    fn verdict_messages() {
        assert!(ScoreVerdict::Lower.to_string().contains("Sorry, but it is not("));
        assert!(ScoreVerdict::Higher.to_string().contains("higher"));
        assert!(ScoreVerdict::Equal.to_string().contains("equal"));
    }
}
