//! Reading chunk arrays and writing the combined payload.
//!
//! Records are opaque `serde_json::Value`s throughout; the combiner never
//! looks inside them. serde_json writes non-ASCII text unescaped, so
//! recipe titles round-trip byte-for-byte.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Read a JSON file whose top-level value must be an array of records.
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let json: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    match json {
        Value::Array(records) => Ok(records),
        other => bail!(
            "File {} is not a JSON array (found {:?})",
            path.display(),
            other
        ),
    }
}

/// Write `records` to `path` as a single compact JSON array.
pub fn write_records(records: &[Value], path: &Path) -> Result<()> {
    let payload = serde_json::to_string(records).context("serializing records")?;
    fs::write(path, payload).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
