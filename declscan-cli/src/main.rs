//! declscan CLI
//!
//! Scans a document for `<!...>` declarations and prints what it finds.
//! Input is fed through the tokenizer in chunks, so declarations split across
//! chunk boundaries exercise the same retry path a network reader would.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use declscan_common::warning::clear_warnings;
use declscan_markup::{DeclarationCollector, DeclarationEvent, DeclarationStream};
use owo_colors::OwoColorize;

/// declscan: list the declarations, comments and marked sections in a document
#[derive(Parser, Debug)]
#[command(name = "declscan")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Scan a file
    declscan page.html

    # Scan inline markup
    declscan --html '<!DOCTYPE html><!-- hi -->'

    # Emit JSON, feeding the tokenizer 16 bytes at a time
    declscan --json --chunk-size 16 page.html
"#)]
struct Cli {
    /// Path to the document to scan
    #[arg(value_name = "FILE", conflicts_with = "html")]
    file: Option<PathBuf>,

    /// Scan this markup string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Bytes fed to the tokenizer per chunk
    #[arg(long, default_value_t = 4096)]
    chunk_size: usize,

    /// Print events as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match (&cli.html, &cli.file) {
        (Some(html), _) => html.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("either FILE or --html is required"),
    };

    clear_warnings();
    let chunk_size = cli.chunk_size.max(1);

    if cli.json {
        let mut events = Vec::new();
        scan(&input, chunk_size, |event| events.push(event))?;
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        let mut count = 0;
        scan(&input, chunk_size, |event| {
            print_event(&event);
            count += 1;
        })?;
        println!("{count} declarations");
    }

    Ok(())
}

/// Feed `input` through a stream in chunks of roughly `chunk_size` bytes,
/// passing each event to `emit` as soon as the chunk completing it is scanned.
fn scan(input: &str, chunk_size: usize, mut emit: impl FnMut(DeclarationEvent)) -> Result<()> {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    for chunk in chunks(input, chunk_size) {
        stream.feed(chunk)?;
        stream.handler_mut().take_events().into_iter().for_each(&mut emit);
    }
    stream.finish()?.into_events().into_iter().for_each(emit);
    Ok(())
}

/// Split `input` into pieces of at least `size` bytes, ending on char boundaries.
fn chunks(input: &str, size: usize) -> impl Iterator<Item = &str> {
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= input.len() {
            return None;
        }
        let mut end = (start + size).min(input.len());
        while !input.is_char_boundary(end) {
            end += 1;
        }
        let chunk = &input[start..end];
        start = end;
        Some(chunk)
    })
}

fn print_event(event: &DeclarationEvent) {
    match event {
        DeclarationEvent::Doctype(data) => println!("{} <!{data}>", "doctype".green()),
        DeclarationEvent::Declaration(data) => println!("{}    <!{data}>", "decl".cyan()),
        DeclarationEvent::Comment(data) => println!("{} <!--{data}-->", "comment".dimmed()),
    }
}
