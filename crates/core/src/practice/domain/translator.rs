use super::language::LanguageTag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: LanguageTag,
    pub target: LanguageTag,
}

/// Domain interface for text translation.
///
/// Implementations call out to a translation service; the returned string
/// is the translated text in the target language.
pub trait Translator: Send {
    fn translate(&self, request: &TranslationRequest) -> Result<String, Box<dyn std::error::Error>>;
}
