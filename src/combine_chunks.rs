/*
cargo run --bin combine_chunks

cargo run --bin combine_chunks -- \
    --chunks-dir chunks \
    --output recipes_all.json
*/

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde_json::Value;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use recipe_chunks::{chunks, combine};

// Combine every part<N>.json in the chunks directory into one JSON file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Directory holding the part<N>.json chunk files
    #[arg(short, long, default_value = "chunks")]
    chunks_dir: PathBuf,

    // Output file (created or overwritten)
    #[arg(short, long, default_value = "recipes_all.json")]
    output: PathBuf,

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
    let log_path = args.log_dir.join(format!("combine_chunks_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path).with_context(|| format!("creating {}", log_path.display()))?,
    )?;
    info!("combining chunks from {}", args.chunks_dir.display());

    println!("Loading chunks from {}...", args.chunks_dir.display());
    let chunk_files = chunks::list_chunks(&args.chunks_dir)?;
    info!("{} chunk file(s) found", chunk_files.len());

    let bar = ProgressBar::new(chunk_files.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        "{spinner:.green} {pos}/{len} {wide_bar:.cyan/blue} {msg}",
    )?);

    let mut all_recipes = Vec::<Value>::new();
    for chunk in &chunk_files {
        let name = chunks::chunk_name(chunk.index);
        bar.set_message(name);
        let mut records = combine::read_records(&chunk.path)?;
        info!("loaded {} records from {}", records.len(), chunk.path.display());
        all_recipes.append(&mut records);
        bar.inc(1);
    }
    bar.finish_and_clear();
    println!(
        "Loaded {} recipes from {} chunk file(s)",
        all_recipes.len(),
        chunk_files.len()
    );

    println!("Saving to {}...", args.output.display());
    combine::write_records(&all_recipes, &args.output)?;

    let size_bytes = fs::metadata(&args.output)
        .with_context(|| format!("stat {}", args.output.display()))?
        .len();
    let size_mb = size_bytes as f64 / 1024.0 / 1024.0;
    info!(
        "wrote {} records ({size_mb:.2} MB) to {}",
        all_recipes.len(),
        args.output.display()
    );
    println!("Done. File size: {size_mb:.2} MB");

    Ok(())
}
