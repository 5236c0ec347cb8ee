use std::time::Duration;

use anyhow::Context;
use block_symmetry::config::{DEFAULT_HOST, DEFAULT_PORT, POLL_INTERVAL_MS};
use block_symmetry::replication::{Replicator, Session, ThreadSleeper};
use block_symmetry::symmetries::{close_group, parse_symmetry_spec, SymmetrySpec};
use block_symmetry::world::{McpiConnection, World};
use block_symmetry::SymmetryError;
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use nalgebra::Vector3;

#[derive(Parser)]
#[command(name = "block-symmetry")]
#[command(about = "Mirror every block you place or break across a generated symmetry group")]
#[command(
    long_about = "Stand at the center of symmetry and start the tool. Every block you break or \
place is repeated for all transforms generated by the given tokens:\n\n  \
n    north-south flip\n  \
e    east-west flip\n  \
u    up-down flip\n  \
nw   northwest-southeast flip\n  \
ne   northeast-southwest flip\n  \
90   quarter turns in the horizontal plane\n  \
180  half turn in the horizontal plane\n  \
t N x y z   repeat N-1 more times, shifted by k*(x,y,z)\n\n\
Without tokens, north-south and east-west mirroring is used. \
`t 10 1 0 0 t 10 0 1 0 t 10 0 0 1` draws a 10x10x10 cube for every block."
)]
#[command(version)]
struct Cli {
    /// Game server host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Game server port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Milliseconds to sleep between two hit polls
    #[arg(long, default_value_t = POLL_INTERVAL_MS)]
    poll_interval_ms: u64,

    /// Print the group and copy count without connecting
    #[arg(long)]
    preview: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Generator tokens: n e u nw ne 90 180, t <count> <dx> <dy> <dz>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| anyhow::anyhow!("Failed to set thread pool size: {}", e))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting block-symmetry v{}", block_symmetry::VERSION);

    let spec = match parse_symmetry_spec(&cli.tokens) {
        Ok(spec) => spec,
        Err(e) => {
            error!("{}", e);
            report_invalid_specification(&cli, &e);
            return Err(e.into());
        }
    };

    if cli.preview {
        preview(&spec);
        return Ok(());
    }

    let world = McpiConnection::connect(&cli.host, cli.port)
        .context("Failed to reach the game server")?;
    let mut session = Session::start(
        world,
        &spec,
        ThreadSleeper,
        Duration::from_millis(cli.poll_interval_ms),
    )
    .context("Failed to read the player position")?;

    session.run().context("Replication session ended")?;
    Ok(())
}

/// Tell the player about a rejected token list, if the server is reachable
fn report_invalid_specification(cli: &Cli, e: &SymmetryError) {
    match McpiConnection::connect(&cli.host, cli.port) {
        Ok(mut world) => {
            if let Err(chat_error) = world.post_to_chat(&e.to_string()) {
                warn!("Could not post error to chat: {}", chat_error);
            }
        }
        Err(connect_error) => warn!("Could not post error to chat: {}", connect_error),
    }
}

fn preview(spec: &SymmetrySpec) {
    let group_order = close_group(&spec.generator_matrices()).len();
    let replicator = Replicator::new(Vector3::zeros(), spec);

    let tokens: Vec<&str> = spec.generators.iter().map(|g| g.token()).collect();
    println!("Generators:      [{}]", tokens.join(" "));
    println!("Group order:     {}", group_order);
    for translation in &spec.translations {
        println!(
            "Translation:     x{} by ({}, {}, {})",
            translation.count, translation.delta.x, translation.delta.y, translation.delta.z
        );
    }
    println!("Copies per edit: {}", replicator.copy_count());
}
