pub mod capture_session;
pub mod language;
pub mod media_lookup;
pub mod practice_session;
pub mod speech_capturer;
pub mod speech_synthesizer;
pub mod translator;
