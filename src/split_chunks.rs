/*
cargo run --bin split_chunks

cargo run --bin split_chunks -- \
    --input recipes_all.json \
    --chunks-dir chunks \
    --chunk-size 500
*/

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use recipe_chunks::{combine, split};

// Split one combined JSON array file into numbered part<N>.json chunks.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Combined JSON file to split (top-level array)
    #[arg(short, long, default_value = "recipes_all.json")]
    input: PathBuf,

    // Directory the part<N>.json files are written to (created if missing)
    #[arg(short, long, default_value = "chunks")]
    chunks_dir: PathBuf,

    // Maximum number of records per chunk
    #[arg(short = 's', long, default_value_t = 500)]
    chunk_size: usize,

    // Directory for the run log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging setup
    fs::create_dir_all(&args.log_dir)
        .with_context(|| format!("creating {}", args.log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = args.log_dir.join(format!("split_chunks_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path).with_context(|| format!("creating {}", log_path.display()))?,
    )?;
    info!(
        "splitting {} into chunks of {}",
        args.input.display(),
        args.chunk_size
    );

    let records = combine::read_records(&args.input)?;
    println!(
        "Read {} recipes from {}",
        records.len(),
        args.input.display()
    );

    let written = split::write_chunks(&records, &args.chunks_dir, args.chunk_size)?;
    info!("{} chunk file(s) written", written.len());
    println!(
        "Wrote {} chunk file(s) to {}",
        written.len(),
        args.chunks_dir.display()
    );

    Ok(())
}
