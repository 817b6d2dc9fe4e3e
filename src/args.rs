use bank::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Usage: bank-ledger <commands.csv> ({0})")]
    Usage(&'static str),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments, requiring the first and only argument to be a valid filepath
pub fn parse_input_arg() -> Result<PathBuf> {
    let filename = single_arg(env::args().skip(1))?;

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}

fn single_arg(mut args: impl Iterator<Item = String>) -> Result<String> {
    let filename = args
        .next()
        .ok_or(InputArgsError::Usage("missing command file"))?;

    if args.next().is_some() {
        Err(InputArgsError::Usage("unexpected extra arguments"))?
    }

    Ok(filename)
}
