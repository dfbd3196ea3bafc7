use std::io::BufRead;

use crate::practice::domain::speech_capturer::{CaptureOutcome, SpeechCapturer};

/// Capture provider that reads one transcript line from a reader.
///
/// Stands in for live recognition when attempts arrive as text (piped
/// transcripts, interactive terminal use). A blank line means the speaker
/// said nothing.
pub struct ConsoleSpeechCapturer<R: BufRead + Send> {
    input: R,
}

impl<R: BufRead + Send> ConsoleSpeechCapturer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead + Send> SpeechCapturer for ConsoleSpeechCapturer<R> {
    fn capture(&mut self) -> Result<CaptureOutcome, Box<dyn std::error::Error>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        let transcript = line.trim();
        if bytes == 0 || transcript.is_empty() {
            return Ok(CaptureOutcome::NoSpeech);
        }
        Ok(CaptureOutcome::Completed(transcript.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_trimmed_line() {
        let mut capturer = ConsoleSpeechCapturer::new(Cursor::new("  hola como estas \n"));
        assert_eq!(
            capturer.capture().unwrap(),
            CaptureOutcome::Completed("hola como estas".to_string())
        );
    }

    #[test]
    fn test_blank_line_is_no_speech() {
        let mut capturer = ConsoleSpeechCapturer::new(Cursor::new("   \n"));
        assert_eq!(capturer.capture().unwrap(), CaptureOutcome::NoSpeech);
    }

    #[test]
    fn test_eof_is_no_speech() {
        let mut capturer = ConsoleSpeechCapturer::new(Cursor::new(""));
        assert_eq!(capturer.capture().unwrap(), CaptureOutcome::NoSpeech);
    }
}
