use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use historytree::{frozen_at, frozen_len, Index, Pos};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "historytree", about = "Inspect history tree node positions")]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the neighbours and frozen rank of a node.
    Pos {
        /// Leftmost leaf index of the node.
        index: u64,
        /// Layer of the node (0 = leaf).
        layer: u8,
    },
    /// Print the nodes visited walking from a node to a leaf.
    Walk {
        /// Leftmost leaf index of the start node.
        index: u64,
        /// Layer of the start node.
        layer: u8,
        /// Target leaf index.
        target: u64,
    },
    /// List the nodes that freeze at a version.
    Frozen {
        /// Tree version (index of the last appended leaf).
        version: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pos { index, layer } => run_pos(index, layer)?,
        Commands::Walk {
            index,
            layer,
            target,
        } => run_walk(index, layer, target)?,
        Commands::Frozen { version } => run_frozen(version)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_pos(index: u64, layer: u8) -> Result<Pos> {
    Pos::try_new(index, layer).with_context(|| format!("invalid node ({},{})", index, layer))
}

fn run_pos(index: u64, layer: u8) -> Result<()> {
    let pos = parse_pos(index, layer)?;
    debug!(%pos, "inspecting node");

    println!("node\t{}", pos);
    match pos.parent() {
        Ok(parent) => println!("parent\t{}", parent),
        Err(err) => println!("parent\tnone ({})", err),
    }
    println!("sibling\t{}", pos.sibling());
    match pos.children() {
        Ok((left, right)) => println!("children\t{}\t{}", left, right),
        Err(err) => println!("children\tnone ({})", err),
    }
    let frozen_by = pos
        .frozen_by()
        .with_context(|| format!("no freeze version for {}", pos))?;
    println!("frozen_by\t{}", frozen_by);
    println!("rank\t{}", pos.frozen_count());
    println!("offset\t{}", pos.offset());

    Ok(())
}

fn run_walk(index: u64, layer: u8, target: u64) -> Result<()> {
    let start = parse_pos(index, layer)?;
    let target =
        Index::new(target).with_context(|| format!("invalid target leaf {}", target))?;

    let path = start
        .walk_path(target)
        .with_context(|| format!("walk from {} to leaf {} failed", start, target))?;
    debug!(%start, %target, steps = path.len(), "walk complete");

    println!("{}", start);
    for pos in path {
        println!("{}", pos);
    }

    Ok(())
}

fn run_frozen(version: u64) -> Result<()> {
    let version =
        Index::new(version).with_context(|| format!("invalid version {}", version))?;

    let nodes = frozen_at(version);
    let first = nodes.first_rank();
    for (n, pos) in nodes.enumerate() {
        println!("{}\trank={}\toffset={}", pos, first + n as u64, pos.offset());
    }
    println!("labels in log: {}", frozen_len(version));

    Ok(())
}
