// src/engine.rs
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::InputMode;
use crate::presentation::write_unit;

/// Score every input according to `config.mode`, writing lines to `out`
/// in input order.
///
/// Stops at the first failing file; lines already written stay written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let units = match config.mode {
        InputMode::Words => by_word(config, out),
        InputMode::Lines => by_line(config, out),
        InputMode::File => by_file(config, out),
    }?;
    info!(mode = ?config.mode, inputs = config.inputs.len(), units, "evaluation finished");
    Ok(())
}

fn by_word<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    for word in &config.inputs {
        emit(out, word, config)?;
    }
    Ok(config.inputs.len())
}

fn by_line<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let mut units = 0;
    for input in &config.inputs {
        debug!(segments = input.matches('\n').count() + 1, "splitting argument into lines");
        for line in input.split('\n').filter(|l| !l.is_empty()) {
            emit(out, line, config)?;
            units += 1;
        }
    }
    Ok(units)
}

fn by_file<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let mut units = 0;
    for name in &config.inputs {
        let path = Path::new(name);
        let file = File::open(path).map_err(|source| AppError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading file");
        let lines = process_reader(BufReader::new(file), path, config, out)?;
        info!(path = %path.display(), lines, "file scored");
        units += lines;
    }
    Ok(units)
}

/// `"\n"`・`"\r\n"`・単独の `"\r"` をすべて行末として扱い、各行を評価する
fn process_reader<R: BufRead, W: Write>(
    mut reader: R,
    path: &Path,
    config: &Config,
    out: &mut W,
) -> Result<usize> {
    let mut line_buf = String::new();
    let mut line_no = 0;
    let mut units = 0;
    loop {
        line_buf.clear();
        line_no += 1;
        let read = reader.read_line(&mut line_buf).map_err(|source| AppError::FileRead {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;
        if read == 0 {
            break;
        }
        for line in line_units(&line_buf) {
            emit(out, line, config)?;
            units += 1;
        }
    }
    Ok(units)
}

/// Split one `'\n'`-terminated chunk into lines.
///
/// The final terminator (`"\n"`, `"\r\n"`, or a `'\r'` at end of input) is
/// dropped; every remaining `'\r'` ends a line of its own.
fn line_units(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    body.strip_suffix('\r').unwrap_or(body).split('\r')
}

fn emit<W: Write>(out: &mut W, unit: &str, config: &Config) -> Result<()> {
    trace!(unit, "scoring unit");
    write_unit(out, unit, config)?;
    Ok(())
}
