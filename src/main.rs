use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rebuild_bst::{Node, Tree, TreeError};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Builds a tree from random numbers, unbalances it, and rebalances it again.
#[derive(Parser, Debug)]
#[command(name = "rebuild-bst", version, about)]
struct Cli {
    /// How many random numbers to build the tree from.
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Random numbers are drawn from `0..max`.
    #[arg(long, default_value_t = 100)]
    max: u32,

    /// Seed for reproducible input. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Values inserted after building to unbalance the tree.
    #[arg(long, value_delimiter = ',', default_value = "101,150,175,200,250")]
    unbalance: Vec<u32>,

    /// Turn on logging, repeat for more detail (-d info, -dd debug, -ddd trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    run(&cli)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // `RUST_LOG` wins over the `-d` flags when it is set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    anyhow::ensure!(cli.max > 0, "--max must be greater than zero");

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, size = cli.size, max = cli.max, "generating input");
    let values = random_values(cli.size, cli.max, seed);

    let mut tree = Tree::build(values.iter().copied());
    println!("Initial array: {}", join(&values));
    println!("Is tree balanced? {}", tree.is_balanced());

    for value in &cli.unbalance {
        tree.insert(*value);
    }
    debug!(len = tree.len(), "inserted unbalancing values");
    println!("\nAfter unbalancing...");
    println!("Is tree balanced? {}", tree.is_balanced());
    print!("{tree}");

    tree.rebalance();
    println!("\nAfter balancing...");
    print!("{tree}");
    println!("Is tree balanced? {}", tree.is_balanced());

    println!();
    print_traversals(&tree).context("walking the rebalanced tree")?;

    Ok(())
}

fn random_values(size: usize, max: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..max)).collect()
}

fn print_traversals(tree: &Tree<u32>) -> Result<()> {
    println!(
        "Level order: {}",
        walk(|visit| tree.level_order_for_each(Some(visit)))?
    );
    println!(
        "Pre-order:   {}",
        walk(|visit| tree.pre_order_for_each(Some(visit)))?
    );
    println!(
        "In-order:    {}",
        walk(|visit| tree.in_order_for_each(Some(visit)))?
    );
    println!(
        "Post-order:  {}",
        walk(|visit| tree.post_order_for_each(Some(visit)))?
    );

    Ok(())
}

/// Runs one of the callback traversals and joins the values it visited.
fn walk<W>(traversal: W) -> Result<String, TreeError>
where
    W: FnOnce(&mut dyn FnMut(&Node<u32>)) -> Result<(), TreeError>,
{
    let mut values = Vec::new();
    traversal(&mut |node: &Node<u32>| values.push(*node.value()))?;
    Ok(join(&values))
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_unbalance_list() {
        let cli = Cli::parse_from(["rebuild-bst", "--seed", "7", "--unbalance", "1,2,3", "-dd"]);

        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.unbalance, [1, 2, 3]);
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.size, 15);
    }

    #[test]
    fn walk_collects_visited_values() {
        let tree = Tree::build([2_u32, 1, 3]);

        let level = walk(|visit| tree.level_order_for_each(Some(visit))).unwrap();
        assert_eq!(level, "2, 1, 3");
        assert!(walk(|_| tree.in_order_for_each(None::<fn(&Node<u32>)>)).is_err());
    }

    #[test]
    fn random_values_are_reproducible_and_in_range() {
        let first = random_values(50, 10, 42);

        assert_eq!(first, random_values(50, 10, 42));
        assert_eq!(first.len(), 50);
        assert!(first.iter().all(|v| *v < 10));
    }
}
