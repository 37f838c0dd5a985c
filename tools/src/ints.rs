use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Radix,
    Bubble,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Sorts non-negative integers.")]
struct Args {
    #[arg(required = true, help = "Integers to sort")]
    values: Vec<u64>,

    #[arg(short = 'a', long, value_enum, default_value_t = Algorithm::Radix)]
    algorithm: Algorithm,

    #[arg(short = 'v', long, help = "Log progress to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(level));

    let mut values = args.values;
    match args.algorithm {
        Algorithm::Radix => alnum_radix::radix_sort_u64(&mut values)?,
        Algorithm::Bubble => alnum_radix::bubble_sort(&mut values),
    }

    let line: Vec<String> = values.iter().map(u64::to_string).collect();
    println!("{}", line.join(" "));

    Ok(())
}
