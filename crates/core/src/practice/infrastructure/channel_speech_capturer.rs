use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::practice::domain::capture_session::CaptureSession;
use crate::practice::domain::speech_capturer::{CaptureOutcome, SpeechCapturer};

const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Capture provider fed final transcript fragments over a channel.
///
/// A recognition source (microphone thread, test harness) sends fragments
/// through the sender half; capture drains them until the sender hangs up
/// or the stop flag is raised. A stop still drains fragments recognized
/// before it, so a cancelled session keeps its partial transcript.
pub struct ChannelSpeechCapturer {
    fragments: Receiver<String>,
    stop: Arc<AtomicBool>,
}

impl ChannelSpeechCapturer {
    pub fn new(fragments: Receiver<String>) -> Self {
        Self {
            fragments,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for cancelling an in-progress capture from another thread.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }
}

impl SpeechCapturer for ChannelSpeechCapturer {
    fn capture(&mut self) -> Result<CaptureOutcome, Box<dyn std::error::Error>> {
        let mut session = CaptureSession::new();
        session.start();

        loop {
            if self.stop.load(Ordering::Relaxed) {
                // Keep whatever was recognized before the stop.
                while let Ok(fragment) = self.fragments.try_recv() {
                    session.push_fragment(&fragment);
                }
                break;
            }
            match self.fragments.recv_timeout(STOP_POLL_INTERVAL) {
                Ok(fragment) => session.push_fragment(&fragment),
                Err(RecvTimeoutError::Timeout) => continue,
                // Sender hung up: recognition finished.
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        self.stop.store(false, Ordering::Relaxed);

        Ok(session.stop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_fragments_accumulate_into_transcript() {
        let (tx, rx) = unbounded();
        let mut capturer = ChannelSpeechCapturer::new(rx);

        tx.send("hola".to_string()).unwrap();
        tx.send("como estas".to_string()).unwrap();
        drop(tx);

        assert_eq!(
            capturer.capture().unwrap(),
            CaptureOutcome::Completed("hola como estas".to_string())
        );
    }

    #[test]
    fn test_hangup_without_fragments_is_no_speech() {
        let (tx, rx) = unbounded::<String>();
        drop(tx);
        let mut capturer = ChannelSpeechCapturer::new(rx);
        assert_eq!(capturer.capture().unwrap(), CaptureOutcome::NoSpeech);
    }

    #[test]
    fn test_stop_keeps_partial_transcript() {
        let (tx, rx) = unbounded();
        let mut capturer = ChannelSpeechCapturer::new(rx);

        // A fragment is already recognized when the user hits stop; the
        // sender stays alive, so only the flag can end the session.
        tx.send("hola".to_string()).unwrap();
        capturer.stop_handle().store(true, Ordering::Relaxed);

        assert_eq!(
            capturer.capture().unwrap(),
            CaptureOutcome::Completed("hola".to_string())
        );
    }

    #[test]
    fn test_stop_without_fragments_is_no_speech() {
        let (_tx, rx) = unbounded::<String>();
        let mut capturer = ChannelSpeechCapturer::new(rx);
        capturer.stop_handle().store(true, Ordering::Relaxed);
        assert_eq!(capturer.capture().unwrap(), CaptureOutcome::NoSpeech);
    }

    #[test]
    fn test_stop_flag_resets_for_next_capture() {
        let (tx, rx) = unbounded();
        let mut capturer = ChannelSpeechCapturer::new(rx);
        capturer.stop_handle().store(true, Ordering::Relaxed);
        capturer.capture().unwrap();

        tx.send("segunda vez".to_string()).unwrap();
        drop(tx);
        assert_eq!(
            capturer.capture().unwrap(),
            CaptureOutcome::Completed("segunda vez".to_string())
        );
    }

    #[test]
    fn test_blank_fragments_yield_no_speech() {
        let (tx, rx) = unbounded();
        tx.send("   ".to_string()).unwrap();
        drop(tx);
        let mut capturer = ChannelSpeechCapturer::new(rx);
        assert_eq!(capturer.capture().unwrap(), CaptureOutcome::NoSpeech);
    }
}
