use super::language::LanguageTag;

/// Domain interface for speaking text aloud.
///
/// Playback is fire-and-forget: implementations start audio output and
/// return without waiting for it to finish.
pub trait SpeechSynthesizer: Send {
    fn speak(&self, text: &str, language: &LanguageTag) -> Result<(), Box<dyn std::error::Error>>;
}
