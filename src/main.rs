use std::{io, path::PathBuf};

use braille_autocorrect::{
    Autocorrector, Suggestion,
    braille::parse_line,
    config::Config,
    dictionary::{load_words, sample_words},
};
use clap::Parser;
use log::info;

/// Suggests dictionary words for braille typed as QWERTY chords.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Word list, one word per line (.bz2 is decompressed)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,
    /// Largest edit distance a suggestion may have
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<i32>,
    /// Run the built-in sample inputs instead of reading stdin
    #[arg(long)]
    samples: bool,
}

const SAMPLE_INPUTS: [&[&str]; 5] = [
    &["DK", "D", "WQKO"],
    &["DK", "D", "DK"],
    &["DK", "D"],
    &["DK", "D", "WQKO", "D"],
    &["DK", "D", "DQKO"],
];

fn init_logging() {
    let env = env_logger::Env::default().filter_or("BRAILLE_LOG", "info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

fn print_suggestion(chords: &[&str], suggestion: &Suggestion) {
    println!("Braille input: {:?} -> {}", chords, suggestion.input);
    match &suggestion.best {
        Some(found) => println!(
            "Suggested word: {} (distance: {})",
            found.word, found.distance
        ),
        None => println!("No suggestion"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dictionary) = cli.dictionary {
        config.dictionary = Some(dictionary);
    }
    if let Some(radius) = cli.radius {
        config.radius = radius;
    }

    let words = match &config.dictionary {
        Some(path) => load_words(path)?,
        None => sample_words(),
    };
    let corrector = Autocorrector::new(words, config.radius).with_key_map(config.key_map()?);
    info!(
        "indexed {} words, radius {}",
        corrector.tree().len(),
        corrector.radius()
    );

    if cli.samples {
        for chords in SAMPLE_INPUTS {
            print_suggestion(chords, &corrector.suggest_chords(chords));
        }
        return Ok(());
    }

    println!("Enter a braille word as space-separated QWERTY chords (e.g. 'DK D WQKO' for 'cat'):");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let chords = parse_line(&line);
    print_suggestion(&chords, &corrector.suggest_chords(&chords));
    Ok(())
}
