//! Interact with the filesystem, read sequences from it and write reports to it.
use std::{collections::BTreeMap, fs::File, io::prelude::*, path::Path};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::generate::BitSequence;

/// Reads labelled sequences of bits from a JSON file.
///
/// The file is expected to hold a single object mapping labels to strings of
/// `0`s and `1`s, e.g.
/// ```json
/// { "cpp": "0110...", "java": "1011..." }
/// ```
/// Labels are returned in lexicographic order.
pub fn read_sequences(path: &Path) -> Result<BTreeMap<String, BitSequence>> {
    info!("reading sequences from `{:?}`", path);
    let contents = std::fs::read_to_string(path)
        .inspect_err(|e| error!("incorrect path `{:?}`: {}", path, e))
        .with_context(|| format!("could not read `{:?}`", path))?;

    let raw: BTreeMap<String, String> = serde_json::from_str(&contents)
        .with_context(|| format!("`{:?}` is not a JSON object of strings", path))?;

    raw.into_iter()
        .map(|(label, bits)| -> Result<(String, BitSequence)> {
            let sequence = bits
                .parse::<BitSequence>()
                .with_context(|| format!("sequence `{}` is not binary", label))?;
            Ok((label, sequence))
        })
        .collect()
}

/// Writes a string to a text file, replacing its contents if it exists.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    info!("writing report into `{:?}`", path);
    let mut file = File::create(path)
        .inspect_err(|e| error!("incorrect path `{:?}`: {}", path, e))
        .with_context(|| format!("could not create `{:?}`", path))?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}
