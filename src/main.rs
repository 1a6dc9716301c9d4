use anyhow::{bail, Context, Result};
use caching::{
    time_traversal, Layout, LayoutConfig, NodePlacement, Traversal, COLS, ROWS,
};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caching", about = "Linked list vs row-major vs column-major traversal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build both structures and print their element counts.
    Init {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Run every counter once and check that they agree.
    Count {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Time counters over repeated runs.
    Time {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Runs per counter.
        #[arg(long, default_value_t = 10)]
        iterations: usize,
        /// Counter to time (list, column, row); all when omitted.
        #[arg(long)]
        traversal: Option<Traversal>,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Grid rows.
    #[arg(long, default_value_t = ROWS)]
    rows: usize,
    /// Grid columns.
    #[arg(long, default_value_t = COLS)]
    cols: usize,
    /// Scatter list nodes across the arena using this seed.
    #[arg(long)]
    shuffle: Option<u64>,
}

impl LayoutArgs {
    fn build(&self) -> Result<Layout> {
        let placement = match self.shuffle {
            Some(seed) => NodePlacement::Shuffled { seed },
            None => NodePlacement::Sequential,
        };
        let config = LayoutConfig::new(self.rows, self.cols)
            .context("invalid grid dimensions")?
            .with_placement(placement);

        info!(rows = config.rows(), cols = config.cols(), ?placement, "initializing");
        let layout = Layout::new(&config);
        let report = layout.report();
        println!("{}", report);
        if !report.is_consistent() {
            bail!("list and matrix element counts differ");
        }
        Ok(layout)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { layout } => {
            layout.build()?;
        }
        Commands::Count { layout } => run_count(&layout.build()?)?,
        Commands::Time {
            layout,
            iterations,
            traversal,
        } => run_time(&layout.build()?, iterations, traversal)?,
    }

    Ok(())
}

fn run_count(layout: &Layout) -> Result<()> {
    let counts: Vec<(Traversal, usize)> = Traversal::ALL
        .into_iter()
        .map(|traversal| (traversal, traversal.count(layout)))
        .collect();

    for (traversal, count) in &counts {
        println!("{:>8}\t{}", traversal, count);
    }

    let expected = layout.config().expected_marked();
    if let Some((traversal, count)) = counts.iter().find(|(_, count)| *count != expected) {
        bail!(
            "{} counted {} marked elements, expected {}",
            traversal,
            count,
            expected
        );
    }
    println!("all counters agree: {}", expected);
    Ok(())
}

fn run_time(layout: &Layout, iterations: usize, traversal: Option<Traversal>) -> Result<()> {
    let selected: Vec<Traversal> = match traversal {
        Some(traversal) => vec![traversal],
        None => Traversal::ALL.to_vec(),
    };

    for traversal in selected {
        let timing = time_traversal(layout, traversal, iterations)
            .with_context(|| format!("timing {} failed", traversal))?;
        println!("{}", timing);
    }

    Ok(())
}
