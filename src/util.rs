use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use crate::types::{Path, TokenPair};

// read the pair list from a json file
pub fn read_pairs_from_file(filename: &str) -> Result<Vec<TokenPair>> {
    let file = File::open(filename).with_context(|| format!("Failed to open pairs file {}", filename))?;
    let reader = BufReader::new(file);
    let pairs: Vec<TokenPair> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse pairs file {}", filename))?;
    Ok(pairs)
}

// write found paths to a json file
pub fn write_paths_to_file(paths: &[Path], filename: &str) -> Result<()> {
    let file = File::create(filename).with_context(|| format!("Failed to create output file {}", filename))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, paths)?;
    writer.flush()?;
    Ok(())
}
