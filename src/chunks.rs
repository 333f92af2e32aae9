//! Chunk file naming and discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

pub const CHUNK_PREFIX: &str = "part";
pub const CHUNK_SUFFIX: &str = ".json";

/// One chunk file found on disk, keyed by the index embedded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub index: u64,
    pub path: PathBuf,
}

/// File name for the chunk at `index`, e.g. `part3.json`.
pub fn chunk_name(index: u64) -> String {
    format!("{CHUNK_PREFIX}{index}{CHUNK_SUFFIX}")
}

/// List the chunk files in `dir`, sorted by ascending embedded index.
///
/// Only names of the form `part<middle>.json` are considered; everything
/// else in the directory is ignored. A considered name whose middle
/// segment does not parse as a non-negative integer is an error, not a
/// skip. Two files carrying the same index (e.g. `part1.json` and
/// `part01.json`) keep an unspecified relative order.
pub fn list_chunks(dir: &Path) -> Result<Vec<ChunkFile>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            // non-UTF-8 names cannot match the pattern
            Err(_) => continue,
        };
        let middle = name
            .strip_prefix(CHUNK_PREFIX)
            .and_then(|rest| rest.strip_suffix(CHUNK_SUFFIX));
        if let Some(middle) = middle {
            let index: u64 = middle
                .parse()
                .with_context(|| format!("chunk index in file name {name:?}"))?;
            found.push(ChunkFile {
                index,
                path: entry.path(),
            });
        }
    }

    // stable sort, so equal indices stay in directory enumeration order
    found.sort_by_key(|chunk| chunk.index);
    for pair in found.windows(2) {
        if pair[0].index == pair[1].index {
            warn!(
                "duplicate chunk index {} ({} and {})",
                pair[0].index,
                pair[0].path.display(),
                pair[1].path.display()
            );
        }
    }
    Ok(found)
}
