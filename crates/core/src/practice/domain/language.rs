use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LanguageTagError {
    #[error("language tag is empty")]
    Empty,
    #[error("invalid language tag '{0}': only ASCII letters, digits and '-' are allowed")]
    InvalidCharacter(String),
}

/// A language tag such as `es-ES` or `fr`.
///
/// Translation providers want only the primary subtag (`es`), while speech
/// synthesis wants the full tag, so both forms are kept accessible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageTag {
    tag: String,
}

impl LanguageTag {
    pub fn new(tag: &str) -> Result<Self, LanguageTagError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LanguageTagError::Empty);
        }
        if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(LanguageTagError::InvalidCharacter(tag.to_string()));
        }
        Ok(Self {
            tag: tag.to_string(),
        })
    }

    /// The full tag, e.g. `es-ES`.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Primary subtag, e.g. `es` for `es-ES`.
    pub fn primary(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Two tags name the same language when their primary subtags match,
    /// regardless of region: `en-US` and `en-GB` are the same language.
    pub fn same_language(&self, other: &LanguageTag) -> bool {
        self.primary().eq_ignore_ascii_case(other.primary())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_subtag_extraction() {
        let tag = LanguageTag::new("es-ES").unwrap();
        assert_eq!(tag.primary(), "es");
        assert_eq!(tag.as_str(), "es-ES");
    }

    #[test]
    fn test_primary_of_bare_tag() {
        assert_eq!(LanguageTag::new("fr").unwrap().primary(), "fr");
    }

    #[test]
    fn test_same_language_ignores_region() {
        let us = LanguageTag::new("en-US").unwrap();
        let gb = LanguageTag::new("en-GB").unwrap();
        let es = LanguageTag::new("es-ES").unwrap();
        assert!(us.same_language(&gb));
        assert!(!us.same_language(&es));
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(LanguageTag::new("  "), Err(LanguageTagError::Empty));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(matches!(
            LanguageTag::new("es_ES"),
            Err(LanguageTagError::InvalidCharacter(_))
        ));
    }
}
