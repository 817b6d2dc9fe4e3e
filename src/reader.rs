use bank::Result;

use std::{fs::File, path::PathBuf};

use anyhow::Context;
use csv::{Reader, ReaderBuilder, Trim};

/// Reader over a command file: headers required, fields trimmed, `#` lines skipped
pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(&filepath)
        .with_context(|| format!("Couldn't open command file {filepath:?}"))?;

    return Ok(reader);
}
