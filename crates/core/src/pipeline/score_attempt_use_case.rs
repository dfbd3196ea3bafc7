use crate::scoring::domain::alignment_scorer::{score, ScoreOutcome};
use crate::scoring::domain::attempt_report::AttemptReport;

/// What a scoring step produced for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The attempt was scored.
    Report(AttemptReport),
    /// No speech was captured; scoring was skipped entirely so a silent
    /// attempt is never conflated with a zero-overlap one.
    NoSpeechDetected,
    /// The expected phrase had no words to score against.
    EmptyReference,
}

/// Scores a captured attempt against the expected phrase.
///
/// Takes the hypothesis as an `Option`: `None` means capture ended with no
/// speech and short-circuits before the scorer runs.
pub struct ScoreAttemptUseCase;

impl ScoreAttemptUseCase {
    pub fn execute(expected_text: &str, spoken_text: Option<&str>) -> AttemptOutcome {
        let Some(spoken_text) = spoken_text else {
            return AttemptOutcome::NoSpeechDetected;
        };

        match score(expected_text, spoken_text) {
            ScoreOutcome::Scored(report) => AttemptOutcome::Report(AttemptReport {
                score: report.score,
                matched_tokens: report.matched_tokens,
                expected_text: expected_text.to_string(),
                spoken_text: spoken_text.to_string(),
            }),
            ScoreOutcome::EmptyReference => AttemptOutcome::EmptyReference,
        }
    }
}
