use std::fmt;

/// User-facing pairing of a score with the original texts.
///
/// Carries the non-normalized texts so the display matches what was
/// translated and what was actually recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptReport {
    pub score: u8,
    pub matched_tokens: usize,
    pub expected_text: String,
    pub spoken_text: String,
}

impl fmt::Display for AttemptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your score: {}/100", self.score)?;
        writeln!(f, "Expected: \"{}\"", self.expected_text)?;
        write!(f, "You said: \"{}\"", self.spoken_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pairs_score_with_texts() {
        let report = AttemptReport {
            score: 67,
            matched_tokens: 2,
            expected_text: "hola como estas".to_string(),
            spoken_text: "hola estas".to_string(),
        };
        let rendered = report.to_string();
        assert!(rendered.contains("67/100"));
        assert!(rendered.contains("Expected: \"hola como estas\""));
        assert!(rendered.contains("You said: \"hola estas\""));
    }
}
