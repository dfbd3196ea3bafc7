use std::io::{self, BufReader, Write};
use std::process;

use clap::{Parser, Subcommand};

use echolingo_core::pipeline::practice_round_use_case::{PhraseListener, PracticeRoundUseCase};
use echolingo_core::pipeline::score_attempt_use_case::{AttemptOutcome, ScoreAttemptUseCase};
use echolingo_core::pipeline::translate_phrase_use_case::TranslatePhraseUseCase;
use echolingo_core::practice::domain::language::LanguageTag;
use echolingo_core::practice::domain::media_lookup::{MediaClip, MediaLookup};
use echolingo_core::practice::domain::practice_session::PracticeSession;
use echolingo_core::practice::domain::speech_capturer::SpeechCapturer;
use echolingo_core::practice::domain::speech_synthesizer::SpeechSynthesizer;
use echolingo_core::practice::domain::translator::Translator;
use echolingo_core::practice::infrastructure::command_speech_synthesizer::CommandSpeechSynthesizer;
use echolingo_core::practice::infrastructure::console_speech_capturer::ConsoleSpeechCapturer;
use echolingo_core::practice::infrastructure::fallback_translator::FallbackTranslator;
use echolingo_core::practice::infrastructure::libre_translate_translator::LibreTranslateTranslator;
use echolingo_core::practice::infrastructure::my_memory_translator::MyMemoryTranslator;
use echolingo_core::practice::infrastructure::youtube_media_lookup::YouTubeMediaLookup;
use echolingo_core::shared::constants::DEFAULT_TTS_COMMAND;

/// Translation practice with spoken-attempt scoring.
#[derive(Parser)]
#[command(name = "echolingo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a spoken attempt against an expected phrase.
    Score {
        /// Expected (reference) phrase.
        #[arg(long)]
        reference: String,

        /// Recognized (spoken) phrase.
        #[arg(long)]
        hypothesis: String,
    },

    /// Translate a phrase and list pronunciation clips.
    Translate {
        /// Text to translate.
        text: String,

        #[command(flatten)]
        round: RoundArgs,
    },

    /// Full practice round: translate, capture the spoken attempt from
    /// stdin, score it.
    Practice {
        /// Text to translate and practice.
        text: String,

        #[command(flatten)]
        round: RoundArgs,

        /// Speak the translation aloud through a TTS command.
        #[arg(long)]
        speak: bool,

        /// TTS command to use with --speak (espeak-style interface).
        #[arg(long, default_value = DEFAULT_TTS_COMMAND)]
        tts_command: String,
    },
}

#[derive(clap::Args)]
struct RoundArgs {
    /// Source language tag (e.g. en-US).
    #[arg(long = "from", default_value = "en-US")]
    source: String,

    /// Target language tag (e.g. es-ES).
    #[arg(long = "to")]
    target: String,

    /// YouTube Data API key; enables pronunciation clip lookup.
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: Option<String>,

    /// Override the primary translation endpoint.
    #[arg(long)]
    translate_endpoint: Option<String>,

    /// Override the fallback translation endpoint.
    #[arg(long)]
    fallback_endpoint: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score {
            reference,
            hypothesis,
        } => run_score(&reference, &hypothesis),
        Command::Translate { text, round } => run_translate(&text, &round),
        Command::Practice {
            text,
            round,
            speak,
            tts_command,
        } => run_practice(&text, &round, speak, &tts_command),
    }
}

fn run_score(reference: &str, hypothesis: &str) -> Result<(), Box<dyn std::error::Error>> {
    print_outcome(ScoreAttemptUseCase::execute(reference, Some(hypothesis)));
    Ok(())
}

fn run_translate(text: &str, round: &RoundArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (source, target) = parse_languages(round)?;
    let use_case = TranslatePhraseUseCase::new(build_translator(round), None, build_lookup(round));
    let phrase = use_case.execute(text, &source, &target)?;

    println!("Translation: {}", phrase.translation);
    print_media(&phrase.media);
    Ok(())
}

fn run_practice(
    text: &str,
    round: &RoundArgs,
    speak: bool,
    tts_command: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (source, target) = parse_languages(round)?;

    let synthesizer: Option<Box<dyn SpeechSynthesizer>> = if speak {
        Some(Box::new(CommandSpeechSynthesizer::with_program(tts_command)))
    } else {
        None
    };
    let translate =
        TranslatePhraseUseCase::new(build_translator(round), synthesizer, build_lookup(round));
    let capturer: Box<dyn SpeechCapturer> =
        Box::new(ConsoleSpeechCapturer::new(BufReader::new(io::stdin())));

    // Show the phrase the user is about to repeat before capture blocks
    // on stdin.
    let on_phrase: PhraseListener = Box::new(|phrase| {
        println!("Translation: {}", phrase.translation);
        print_media(&phrase.media);
        eprint!("Repeat the phrase, then press Enter (type what was recognized): ");
        io::stderr().flush().ok();
    });

    let mut use_case = PracticeRoundUseCase::new(translate, capturer, Some(on_phrase));
    let mut session = PracticeSession::new();
    let result = use_case.execute(&mut session, text, &source, &target)?;

    print_outcome(result.outcome);
    Ok(())
}

fn parse_languages(
    round: &RoundArgs,
) -> Result<(LanguageTag, LanguageTag), Box<dyn std::error::Error>> {
    let source = LanguageTag::new(&round.source)?;
    let target = LanguageTag::new(&round.target)?;
    Ok((source, target))
}

fn build_translator(round: &RoundArgs) -> Box<dyn Translator> {
    if let Some(ref endpoint) = round.translate_endpoint {
        log::info!("using translation endpoint {endpoint}");
    }
    let primary = match round.translate_endpoint {
        Some(ref endpoint) => MyMemoryTranslator::with_endpoint(endpoint),
        None => MyMemoryTranslator::new(),
    };
    let fallback = match round.fallback_endpoint {
        Some(ref endpoint) => LibreTranslateTranslator::with_endpoint(endpoint),
        None => LibreTranslateTranslator::new(),
    };
    Box::new(FallbackTranslator::new(
        Box::new(primary),
        Box::new(fallback),
    ))
}

fn build_lookup(round: &RoundArgs) -> Option<Box<dyn MediaLookup>> {
    round
        .youtube_api_key
        .as_deref()
        .map(|key| Box::new(YouTubeMediaLookup::new(key)) as Box<dyn MediaLookup>)
}

fn print_media(media: &[MediaClip]) {
    if media.is_empty() {
        return;
    }
    println!("Pronunciation clips:");
    for clip in media {
        println!("  {} - {}", clip.title, clip.url);
    }
}

fn print_outcome(outcome: AttemptOutcome) {
    match outcome {
        AttemptOutcome::Report(report) => println!("{report}"),
        AttemptOutcome::NoSpeechDetected => println!("No speech was detected."),
        AttemptOutcome::EmptyReference => {
            println!("Score: 0/100 (the expected phrase has no words to score against)");
        }
    }
}
