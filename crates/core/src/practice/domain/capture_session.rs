use super::speech_capturer::CaptureOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
}

/// Two-state capture machine: `Idle -> Listening -> Idle`.
///
/// Final transcript fragments accumulate while listening. `stop` always
/// returns to `Idle` immediately and emits whatever was accumulated, so a
/// cancelled session still yields its partial transcript. Only one
/// listening period can be active at a time: `start` while listening is a
/// rejected no-op.
#[derive(Debug)]
pub struct CaptureSession {
    state: CaptureState,
    transcript: String,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            transcript: String::new(),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == CaptureState::Listening
    }

    /// Begins listening. Returns `false` (and changes nothing) if a
    /// session is already in progress.
    pub fn start(&mut self) -> bool {
        if self.is_listening() {
            return false;
        }
        self.transcript.clear();
        self.state = CaptureState::Listening;
        true
    }

    /// Appends a final recognition fragment. Fragments arriving while
    /// idle are ignored.
    pub fn push_fragment(&mut self, text: &str) {
        if !self.is_listening() {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.transcript.is_empty() {
            self.transcript.push(' ');
        }
        self.transcript.push_str(text);
    }

    /// Ends the session, returning to `Idle` and emitting the accumulated
    /// transcript, or `NoSpeech` when nothing was recognized.
    pub fn stop(&mut self) -> CaptureOutcome {
        self.state = CaptureState::Idle;
        let transcript = std::mem::take(&mut self.transcript);
        if transcript.is_empty() {
            CaptureOutcome::NoSpeech
        } else {
            CaptureOutcome::Completed(transcript)
        }
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
