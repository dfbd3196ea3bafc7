pub const MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

pub const LIBRETRANSLATE_ENDPOINT: &str = "https://libretranslate.de/translate";

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// MyMemory embeds this marker in the translated text itself when the
/// daily quota is exhausted; such a response is not a usable translation.
pub const MYMEMORY_WARNING_MARKER: &str = "MYMEMORY";

/// How many pronunciation clips a lookup returns at most.
pub const MAX_MEDIA_RESULTS: usize = 2;

/// Default speech synthesis command (espeak-style `-v <lang>` interface).
pub const DEFAULT_TTS_COMMAND: &str = "espeak-ng";
