/// Outcome of a completed capture session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A final transcript was recognized.
    Completed(String),
    /// The session ended without any speech being recognized. Distinct
    /// from an empty transcript being scored: no-speech short-circuits
    /// before the scorer runs.
    NoSpeech,
}

/// Domain interface for capturing a spoken attempt.
///
/// `capture` blocks until the session ends (recognition finished, the
/// speaker stopped, or the feed was cancelled) and yields the final
/// transcript or a no-speech signal.
pub trait SpeechCapturer: Send {
    fn capture(&mut self) -> Result<CaptureOutcome, Box<dyn std::error::Error>>;
}
