/// Converts raw utterance text into normalized word tokens.
///
/// Trims outer whitespace, lowercases (Unicode, locale-independent) and
/// splits on whitespace runs. Blank input yields an empty sequence rather
/// than a single empty token, so downstream scoring never sees a phantom
/// word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
