use super::capture_session::CaptureSession;

/// Mutable state of one practice round, owned by the orchestration layer.
///
/// Replaces ambient globals with an explicit value passed into each step:
/// the expected (translated) text, the last captured attempt, and the
/// capture machine.
#[derive(Debug, Default)]
pub struct PracticeSession {
    reference_text: Option<String>,
    hypothesis_text: Option<String>,
    capture: CaptureSession,
}

impl PracticeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_text(&self) -> Option<&str> {
        self.reference_text.as_deref()
    }

    pub fn hypothesis_text(&self) -> Option<&str> {
        self.hypothesis_text.as_deref()
    }

    pub fn capture(&mut self) -> &mut CaptureSession {
        &mut self.capture
    }

    /// Installs a new expected phrase, clearing any previous attempt.
    pub fn set_reference(&mut self, text: String) {
        self.reference_text = Some(text);
        self.hypothesis_text = None;
    }

    pub fn set_hypothesis(&mut self, text: String) {
        self.hypothesis_text = Some(text);
    }

    /// A round can only start recording once a translation exists.
    pub fn ready_to_capture(&self) -> bool {
        self.reference_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}
