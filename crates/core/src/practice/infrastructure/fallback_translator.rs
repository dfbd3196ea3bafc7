use crate::practice::domain::translator::{TranslationRequest, Translator};

/// Decorator that tries a primary translation provider and falls back to a
/// secondary one when the primary fails or returns a low-confidence result.
///
/// Only when both providers fail does the error (the fallback's) propagate.
pub struct FallbackTranslator {
    primary: Box<dyn Translator>,
    fallback: Box<dyn Translator>,
}

impl FallbackTranslator {
    pub fn new(primary: Box<dyn Translator>, fallback: Box<dyn Translator>) -> Self {
        Self { primary, fallback }
    }
}

impl Translator for FallbackTranslator {
    fn translate(&self, request: &TranslationRequest) -> Result<String, Box<dyn std::error::Error>> {
        match self.primary.translate(request) {
            Ok(translated) => Ok(translated),
            Err(primary_err) => {
                log::warn!("primary translation provider failed, trying fallback: {primary_err}");
                self.fallback.translate(request)
            }
        }
    }
}
