//! Splitting a combined payload back into numbered chunk files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::info;
use serde_json::Value;

use crate::chunks::chunk_name;
use crate::combine::write_records;

/// Write `records` into `dir` as `part0.json`, `part1.json`, ... holding
/// at most `chunk_size` records each. Every chunk except possibly the
/// last is full; an empty input writes no files. Returns the paths
/// written, in index order.
///
/// Stale `part<N>.json` files already in `dir` beyond the last new index
/// are left alone.
pub fn write_chunks(records: &[Value], dir: &Path, chunk_size: usize) -> Result<Vec<PathBuf>> {
    ensure!(chunk_size > 0, "chunk size must be at least 1");
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))?;

    let mut written = Vec::new();
    for (index, slice) in records.chunks(chunk_size).enumerate() {
        let path = dir.join(chunk_name(index as u64));
        write_records(slice, &path)?;
        info!("wrote {} records to {}", slice.len(), path.display());
        written.push(path);
    }
    Ok(written)
}
