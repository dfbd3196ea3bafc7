use crate::practice::domain::language::LanguageTag;
use crate::practice::domain::media_lookup::{MediaClip, MediaLookup};
use crate::practice::domain::speech_synthesizer::SpeechSynthesizer;
use crate::practice::domain::translator::{TranslationRequest, Translator};

/// Result of a translation round: the translated phrase plus any
/// pronunciation clips that were found for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatedPhrase {
    pub translation: String,
    pub media: Vec<MediaClip>,
}

/// Translates a phrase and runs the best-effort side paths: speaking the
/// translation aloud and looking up pronunciation media.
///
/// Synthesis and media lookup must never fail the round; their errors are
/// logged and the round continues.
pub struct TranslatePhraseUseCase {
    translator: Box<dyn Translator>,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    media_lookup: Option<Box<dyn MediaLookup>>,
}

impl TranslatePhraseUseCase {
    pub fn new(
        translator: Box<dyn Translator>,
        synthesizer: Option<Box<dyn SpeechSynthesizer>>,
        media_lookup: Option<Box<dyn MediaLookup>>,
    ) -> Self {
        Self {
            translator,
            synthesizer,
            media_lookup,
        }
    }

    pub fn execute(
        &self,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<TranslatedPhrase, Box<dyn std::error::Error>> {
        if text.trim().is_empty() {
            return Err("nothing to translate: input text is empty".into());
        }
        if source.same_language(target) {
            return Err(format!(
                "source and target are the same language ({})",
                source.primary()
            )
            .into());
        }

        let translation = self.translator.translate(&TranslationRequest {
            text: text.to_string(),
            source: source.clone(),
            target: target.clone(),
        })?;
        log::info!("translated '{text}' ({source}) -> '{translation}' ({target})");

        if let Some(ref synthesizer) = self.synthesizer {
            if let Err(e) = synthesizer.speak(&translation, target) {
                log::warn!("speech synthesis failed: {e}");
            }
        }

        let media = match self.media_lookup {
            Some(ref lookup) => match lookup.search(&translation, target) {
                Ok(clips) => clips,
                Err(e) => {
                    log::warn!("pronunciation media lookup failed: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(TranslatedPhrase { translation, media })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // ─── Stubs ───

    struct StubTranslator {
        result: Result<String, String>,
    }

    impl Translator for StubTranslator {
        fn translate(&self, _: &TranslationRequest) -> Result<String, Box<dyn std::error::Error>> {
            self.result
                .clone()
                .map_err(|e| -> Box<dyn std::error::Error> { e.into() })
        }
    }

    struct StubSynthesizer {
        spoken: Arc<Mutex<Option<String>>>,
        fail: bool,
    }

    impl SpeechSynthesizer for StubSynthesizer {
        fn speak(&self, text: &str, _: &LanguageTag) -> Result<(), Box<dyn std::error::Error>> {
            if self.fail {
                return Err("audio device missing".into());
            }
            *self.spoken.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct StubLookup {
        result: Result<Vec<MediaClip>, String>,
    }

    impl MediaLookup for StubLookup {
        fn search(
            &self,
            _: &str,
            _: &LanguageTag,
        ) -> Result<Vec<MediaClip>, Box<dyn std::error::Error>> {
            self.result
                .clone()
                .map_err(|e| -> Box<dyn std::error::Error> { e.into() })
        }
    }

    fn en() -> LanguageTag {
        LanguageTag::new("en-US").unwrap()
    }

    fn es() -> LanguageTag {
        LanguageTag::new("es-ES").unwrap()
    }

    fn translator_ok() -> Box<dyn Translator> {
        Box::new(StubTranslator {
            result: Ok("buenos días".to_string()),
        })
    }

    #[test]
    fn test_translates_and_collects_media() {
        let clip = MediaClip {
            title: "pronunciation guide".to_string(),
            url: "https://example.com/v/1".to_string(),
        };
        let uc = TranslatePhraseUseCase::new(
            translator_ok(),
            None,
            Some(Box::new(StubLookup {
                result: Ok(vec![clip.clone()]),
            })),
        );
        let phrase = uc.execute("good morning", &en(), &es()).unwrap();
        assert_eq!(phrase.translation, "buenos días");
        assert_eq!(phrase.media, vec![clip]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let uc = TranslatePhraseUseCase::new(translator_ok(), None, None);
        assert!(uc.execute("   ", &en(), &es()).is_err());
    }

    #[test]
    fn test_same_language_pair_is_rejected() {
        let uc = TranslatePhraseUseCase::new(translator_ok(), None, None);
        let gb = LanguageTag::new("en-GB").unwrap();
        let err = uc.execute("good morning", &en(), &gb).unwrap_err();
        assert!(err.to_string().contains("same language"));
    }

    #[test]
    fn test_translator_failure_propagates() {
        let uc = TranslatePhraseUseCase::new(
            Box::new(StubTranslator {
                result: Err("both providers down".to_string()),
            }),
            None,
            None,
        );
        assert!(uc.execute("good morning", &en(), &es()).is_err());
    }

    #[test]
    fn test_translation_is_spoken() {
        let spoken = Arc::new(Mutex::new(None));
        let uc = TranslatePhraseUseCase::new(
            translator_ok(),
            Some(Box::new(StubSynthesizer {
                spoken: spoken.clone(),
                fail: false,
            })),
            None,
        );
        uc.execute("good morning", &en(), &es()).unwrap();
        assert_eq!(spoken.lock().unwrap().as_deref(), Some("buenos días"));
    }

    #[test]
    fn test_synthesis_failure_does_not_fail_round() {
        let uc = TranslatePhraseUseCase::new(
            translator_ok(),
            Some(Box::new(StubSynthesizer {
                spoken: Arc::new(Mutex::new(None)),
                fail: true,
            })),
            None,
        );
        assert!(uc.execute("good morning", &en(), &es()).is_ok());
    }

    #[test]
    fn test_media_failure_yields_empty_list() {
        let uc = TranslatePhraseUseCase::new(
            translator_ok(),
            None,
            Some(Box::new(StubLookup {
                result: Err("quota exceeded".to_string()),
            })),
        );
        let phrase = uc.execute("good morning", &en(), &es()).unwrap();
        assert!(phrase.media.is_empty());
    }
}
