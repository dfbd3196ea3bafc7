pub mod channel_speech_capturer;
pub mod command_speech_synthesizer;
pub mod console_speech_capturer;
pub mod fallback_translator;
pub mod libre_translate_translator;
pub mod my_memory_translator;
pub mod youtube_media_lookup;
