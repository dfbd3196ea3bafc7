use crate::pipeline::score_attempt_use_case::{AttemptOutcome, ScoreAttemptUseCase};
use crate::pipeline::translate_phrase_use_case::{TranslatePhraseUseCase, TranslatedPhrase};
use crate::practice::domain::language::LanguageTag;
use crate::practice::domain::media_lookup::MediaClip;
use crate::practice::domain::practice_session::PracticeSession;
use crate::practice::domain::speech_capturer::{CaptureOutcome, SpeechCapturer};

/// Everything a finished round produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub translation: String,
    pub media: Vec<MediaClip>,
    pub outcome: AttemptOutcome,
}

/// Called with the translated phrase after translation succeeds and
/// before capture starts, so a front-end can show the phrase the user is
/// about to repeat.
pub type PhraseListener = Box<dyn Fn(&TranslatedPhrase)>;

/// One full practice round: translate the phrase, capture the spoken
/// attempt, score it.
///
/// Round state lives in an explicit `PracticeSession` rather than ambient
/// globals; capture only starts once a translation is installed.
pub struct PracticeRoundUseCase {
    translate: TranslatePhraseUseCase,
    capturer: Box<dyn SpeechCapturer>,
    on_phrase: Option<PhraseListener>,
}

impl PracticeRoundUseCase {
    pub fn new(
        translate: TranslatePhraseUseCase,
        capturer: Box<dyn SpeechCapturer>,
        on_phrase: Option<PhraseListener>,
    ) -> Self {
        Self {
            translate,
            capturer,
            on_phrase,
        }
    }

    pub fn execute(
        &mut self,
        session: &mut PracticeSession,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<RoundResult, Box<dyn std::error::Error>> {
        let phrase = self.translate.execute(text, source, target)?;
        session.set_reference(phrase.translation.clone());

        if !session.ready_to_capture() {
            return Err("translation produced no phrase to practice".into());
        }

        if let Some(ref on_phrase) = self.on_phrase {
            on_phrase(&phrase);
        }

        match self.capturer.capture()? {
            CaptureOutcome::Completed(transcript) => session.set_hypothesis(transcript),
            CaptureOutcome::NoSpeech => {}
        }

        let outcome = ScoreAttemptUseCase::execute(
            session.reference_text().unwrap_or_default(),
            session.hypothesis_text(),
        );

        Ok(RoundResult {
            translation: phrase.translation,
            media: phrase.media,
            outcome,
        })
    }
}
