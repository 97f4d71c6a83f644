use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use lomuto::harness::{
    format_list, populate_list, time_sort, Algorithm, DEFAULT_LIST_SIZE, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_VALUE, DEFAULT_SEED,
};

/// Times deterministic and randomized quicksort on the same random list.
#[derive(Parser, Debug)]
#[command(name = "quicksort-bench", version, about)]
struct Cli {
    /// Number of elements to sort
    #[arg(long, default_value_t = DEFAULT_LIST_SIZE)]
    size: usize,

    /// Seed for list population and pivot selection
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Smallest value in the list
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE, allow_negative_numbers = true)]
    min: i64,

    /// Largest value in the list
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE, allow_negative_numbers = true)]
    max: i64,

    /// Algorithms to run, in order (deterministic, randomized)
    #[arg(
        long = "algorithm",
        value_delimiter = ',',
        default_values_t = [Algorithm::Deterministic, Algorithm::Randomized]
    )]
    algorithms: Vec<Algorithm>,

    /// Print the list before and after each sort
    #[arg(long)]
    print: bool,
}

fn main() -> lomuto::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("configuration: {cli:?}");

    let mut rng = ChaCha20Rng::seed_from_u64(cli.seed);
    let original = populate_list(cli.size, cli.min, cli.max, &mut rng)?;

    // Every algorithm sorts its own copy of the same list.
    for algorithm in &cli.algorithms {
        let mut list = original.clone();
        if cli.print {
            println!("{}", format_list(&list));
        }

        let report = time_sort(*algorithm, &mut list, &mut rng)?;
        if cli.print {
            println!("{}", format_list(&list));
        }
        println!("{report}");
    }

    Ok(())
}
