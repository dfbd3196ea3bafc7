use super::language::LanguageTag;

/// A pronunciation clip: display title plus a reference to the media.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaClip {
    pub title: String,
    pub url: String,
}

/// Domain interface for looking up pronunciation media.
///
/// Returns a small ranked list of clips for a phrase in a language;
/// an empty list means nothing suitable was found.
pub trait MediaLookup: Send {
    fn search(
        &self,
        phrase: &str,
        language: &LanguageTag,
    ) -> Result<Vec<MediaClip>, Box<dyn std::error::Error>>;
}
