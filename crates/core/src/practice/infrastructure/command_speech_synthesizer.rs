use std::process::{Command, Stdio};

use crate::practice::domain::language::LanguageTag;
use crate::practice::domain::speech_synthesizer::SpeechSynthesizer;
use crate::shared::constants::DEFAULT_TTS_COMMAND;

/// Speech synthesis via an external TTS command with an espeak-style
/// interface (`<program> -v <lang> <text>`).
///
/// The child is spawned detached and never awaited, so playback cannot
/// block the round.
pub struct CommandSpeechSynthesizer {
    program: String,
}

impl CommandSpeechSynthesizer {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_TTS_COMMAND)
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for CommandSpeechSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for CommandSpeechSynthesizer {
    fn speak(&self, text: &str, language: &LanguageTag) -> Result<(), Box<dyn std::error::Error>> {
        Command::new(&self.program)
            .arg("-v")
            .arg(language.primary())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("failed to start TTS command '{}': {e}", self.program))?;
        log::debug!("speaking via '{}' in {}", self.program, language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_reports_error() {
        let synthesizer = CommandSpeechSynthesizer::with_program("definitely-not-a-tts-binary");
        let lang = LanguageTag::new("es-ES").unwrap();
        let err = synthesizer.speak("hola", &lang).unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-tts-binary"));
    }
}
