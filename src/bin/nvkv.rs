//! nvkv console binary
//!
//! Opens the backing store and runs one interactive session over
//! stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use nvkv::storage::FileStore;
use nvkv::{Config, Engine, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// nvkv console
#[derive(Parser, Debug)]
#[command(name = "nvkv")]
#[command(about = "Persistent key-value store over a line protocol")]
#[command(version)]
struct Args {
    /// Backing store file
    #[arg(short, long, default_value = "./nvkv.img")]
    file: PathBuf,

    /// Store capacity in bytes
    #[arg(short, long, default_value = "1024")]
    capacity: usize,

    /// Prompt shown after every line
    #[arg(short, long, default_value = "nvkv> ")]
    prompt: String,

    /// Reset every cell to empty and exit
    #[arg(long)]
    wipe: bool,
}

fn main() {
    // Logs go to stderr; the protocol owns stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    let wipe = args.wipe;

    let config = Config::builder()
        .store_path(args.file)
        .capacity(args.capacity)
        .prompt(args.prompt)
        .build();

    if let Err(e) = run(config, wipe) {
        tracing::error!("fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, wipe: bool) -> nvkv::Result<()> {
    config.validate()?;

    tracing::info!("nvkv v{}", nvkv::VERSION);
    tracing::info!(
        "store: {} ({} bytes)",
        config.store_path.display(),
        config.capacity
    );

    let store = FileStore::open(&config.store_path, config.capacity)?;
    let mut engine = Engine::new(store);

    if wipe {
        engine.wipe()?;
        tracing::info!("store wiped");
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), engine, &config);
    session.run()
}
