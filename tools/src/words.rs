use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use alnum_radix::{bubble_sort, Distribution};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Radix,
    Counting,
    Bubble,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Sorts the words of a file containing one alphanumeric word per line."
)]
struct Args {
    #[arg(short = 'i', long, help = "Path to an input word file")]
    input_file: String,

    #[arg(short = 'o', long, help = "Path to an output file (stdout if omitted)")]
    output_file: Option<String>,

    #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Radix)]
    algorithm: Algorithm,

    #[arg(short = 'v', long, help = "Log progress to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(level));

    let text = read_text(&args.input_file)?;
    let mut words = alnum_radix::parse_words(&text)
        .with_context(|| format!("Invalid word file {}", args.input_file))?;
    log::info!("Sorting {} words with {:?}", words.len(), args.algorithm);

    let now = Instant::now();
    match args.algorithm {
        Algorithm::Radix => sort_words(&mut words, Distribution::Buckets)?,
        Algorithm::Counting => sort_words(&mut words, Distribution::Counting)?,
        Algorithm::Bubble => bubble_sort(&mut words),
    }
    eprintln!("Elapsed sec: {}", now.elapsed().as_millis() as f64 / 1000.0);

    if let Some(output_file) = args.output_file.as_ref() {
        let file = File::create(output_file)
            .with_context(|| format!("Failed to create {}", output_file))?;
        write_words(BufWriter::new(file), &words)?;
    } else {
        write_words(io::stdout().lock(), &words)?;
    }

    Ok(())
}

fn sort_words(words: &mut [Vec<u8>], distribution: Distribution) -> Result<()> {
    alnum_radix::normalize(words)?;
    alnum_radix::sort_with(words, distribution)?;
    alnum_radix::strip_padding(words);
    Ok(())
}

fn read_text(input_file: &str) -> Result<Vec<u8>> {
    let mut file =
        File::open(input_file).with_context(|| format!("Failed to open {}", input_file))?;
    let mut text = Vec::new();
    file.read_to_end(&mut text)?;
    Ok(text)
}

fn write_words<W: Write>(mut writer: W, words: &[Vec<u8>]) -> Result<()> {
    for word in words {
        writer.write_all(word)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
