use super::normalizer::tokenize;

/// Breakdown of a completed scoring run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreReport {
    /// Overlap score in `[0, 100]`.
    pub score: u8,
    /// Tokens of the reference recovered, in order, in the hypothesis.
    pub matched_tokens: usize,
    /// Token count of the normalized reference.
    pub reference_len: usize,
}

/// Result of scoring a hypothesis against a reference.
///
/// An empty reference cannot be scored meaningfully; it is flagged rather
/// than raised, since callers display the result directly. An empty
/// hypothesis against a non-empty reference is a valid zero score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreOutcome {
    Scored(ScoreReport),
    EmptyReference,
}

impl ScoreOutcome {
    /// Score value for display; `EmptyReference` reads as zero.
    pub fn score_value(&self) -> u8 {
        match self {
            ScoreOutcome::Scored(report) => report.score,
            ScoreOutcome::EmptyReference => 0,
        }
    }
}

/// Scores a spoken hypothesis against an expected reference.
///
/// Both inputs are normalized (trim, lowercase, whitespace-run split), then
/// aligned token-wise with the classic LCS dynamic program. The score is
/// `round(100 * matches / reference_len)` — order-sensitive overlap, not a
/// bag-of-words match. Pure: same inputs always yield the same outcome.
pub fn score(reference: &str, hypothesis: &str) -> ScoreOutcome {
    let reference_tokens = tokenize(reference);
    let hypothesis_tokens = tokenize(hypothesis);
    score_tokens(&reference_tokens, &hypothesis_tokens)
}

/// Scores already-normalized token sequences.
pub fn score_tokens(reference: &[String], hypothesis: &[String]) -> ScoreOutcome {
    if reference.is_empty() {
        return ScoreOutcome::EmptyReference;
    }

    let matched_tokens = lcs_length(reference, hypothesis);
    let score = (100.0 * matched_tokens as f64 / reference.len() as f64).round() as u8;

    ScoreOutcome::Scored(ScoreReport {
        score,
        matched_tokens,
        reference_len: reference.len(),
    })
}

/// Longest common subsequence length over exact token equality.
///
/// Full `(m+1) x (n+1)` table; row 0 and column 0 stay zero. Only the
/// length is needed, so no traceback. O(m*n) time and space, fine for
/// sentence-length input.
fn lcs_length(reference: &[String], hypothesis: &[String]) -> usize {
    let m = reference.len();
    let n = hypothesis.len();
    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if reference[i - 1] == hypothesis[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
            }
        }
    }

    table[m][n]
}
