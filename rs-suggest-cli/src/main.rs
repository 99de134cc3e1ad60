use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use rs_suggest_core::engine::session::SuggestionSession;

/// Prints the interactive prompt without ending the line.
fn prompt() -> io::Result<()> {
    print!("Next input please:\n >");
    io::stdout().flush()
}

/// Builds the session from a corpus file or a directory of `.txt` corpora.
fn build_session(path: &str) -> Result<SuggestionSession, Box<dyn std::error::Error>> {
    if Path::new(path).is_dir() {
        SuggestionSession::new(path)
    } else {
        let mut session = SuggestionSession::default();
        session.load_corpus(path)?;
        Ok(session)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: rs-suggest-cli [--dump] [corpus file or directory]
    let mut dump = false;
    let mut path = String::from("./data");
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            other => path = other.to_owned(),
        }
    }

    let session = build_session(&path)?;
    log::info!(
        "ready: {} corpora, {} sequences",
        session.corpus_names().len(),
        session.lines_ingested()
    );

    if dump {
        println!("Recorded sentences:");
        for sequence in session.recorded_sequences() {
            println!("{sequence}");
        }
        return Ok(());
    }

    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match session.suggest(&line) {
            Some(suggestions) => {
                println!("Suggestions:");
                for suggestion in &suggestions {
                    println!("{suggestion}");
                }
            }
            None => println!("No suggestions found."),
        }
        println!("----------------");
        prompt()?;
    }

    Ok(())
}
