//! Wrapper around the VADER lexicon-based sentiment model.
//!
//! The underlying model is the `vader_sentiment` crate, a Rust port of the
//! VADER (Valence Aware Dictionary and sEntiment Reasoner) analyzer. It is
//! treated as an opaque scoring function: text in, four sub-scores out. No
//! part of the lexicon or its heuristics is reimplemented here.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Four-component polarity score for a single piece of text.
///
/// `negative`, `neutral` and `positive` are proportions that conventionally
/// sum to 1.0; `compound` is a normalized aggregate in [-1.0, 1.0]. The
/// values are passed through from the analyzer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    /// Proportion of the text rated negative.
    pub negative: f64,

    /// Proportion of the text rated neutral.
    pub neutral: f64,

    /// Proportion of the text rated positive.
    pub positive: f64,

    /// Normalized aggregate score in [-1.0, 1.0].
    pub compound: f64,
}

/// Lexicon-based sentiment analyzer.
///
/// Construction loads the static VADER lexicon; scoring is pure, synchronous
/// and side-effect free, so a single instance can be reused for an entire run.
pub struct SentimentAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    /// Create an analyzer backed by the built-in VADER lexicon.
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a single text value.
    pub fn score(&self, text: &str) -> PolarityScores {
        let scores = self.inner.polarity_scores(text);
        let component = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        PolarityScores {
            negative: component("neg"),
            neutral: component("neu"),
            positive: component("pos"),
            compound: component("compound"),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        let scores = analyzer.score("I love this");

        assert!(scores.positive > 0.0);
        assert!(scores.compound > 0.0);
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        let scores = analyzer.score("This is terrible");

        assert!(scores.negative > 0.0);
        assert!(scores.compound < 0.0);
        assert!(scores.negative > scores.positive);
    }

    #[test]
    fn test_neutral_text() {
        let analyzer = SentimentAnalyzer::new();
        let scores = analyzer.score("The table has four legs");

        assert_eq!(scores.compound, 0.0);
        assert!(scores.neutral > scores.positive);
        assert!(scores.neutral > scores.negative);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let first = analyzer.score("Mixed feelings, good and bad");
        let second = analyzer.score("Mixed feelings, good and bad");

        assert_eq!(first, second);
    }
}
