//! Flat-file persistence for process lists.
//!
//! # Format
//!
//! ```text
//! 3
//! 1 0 5 2
//! 2 1 3 1
//! 3 2 8 4
//! ```
//!
//! The first token is the record count `n`, followed by `n` records of four
//! integers: `id arrival burst priority`. Tokens may be separated by any
//! whitespace; one record per line is what [`save`] writes. Tokens after
//! the last record are ignored.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::Process;
use crate::validation::{validate_processes, ValidationError};

/// Persistence failure.
#[derive(Debug)]
pub enum StoreError {
    /// The file to load does not exist.
    NotFound(PathBuf),
    /// The file to save could not be created.
    Unwritable {
        /// Target path.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// Any other I/O failure while reading or writing.
    Io(io::Error),
    /// A token is missing or is not an integer.
    Malformed {
        /// 1-based line of the offending token.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// The records parsed but violate registry rules.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Unwritable { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed { line, message } => write!(f, "line {line}: {message}"),
            Self::Invalid(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid process records: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unwritable { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Writes records in the persisted format.
pub fn write_records<W: Write>(mut writer: W, processes: &[Process]) -> io::Result<()> {
    writeln!(writer, "{}", processes.len())?;
    for p in processes {
        writeln!(
            writer,
            "{} {} {} {}",
            p.id, p.arrival_time, p.burst_time, p.priority
        )?;
    }
    writer.flush()
}

/// Parses records from the persisted format and validates them.
pub fn parse_records(text: &str) -> Result<Vec<Process>, StoreError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
    let last_line = text.lines().count().max(1);

    let mut next_int = |what: &str| -> Result<i64, StoreError> {
        match tokens.next() {
            Some((line, tok)) => tok.parse::<i64>().map_err(|_| StoreError::Malformed {
                line,
                message: format!("expected integer {what}, found '{tok}'"),
            }),
            None => Err(StoreError::Malformed {
                line: last_line,
                message: format!("unexpected end of file, expected {what}"),
            }),
        }
    };

    let count = next_int("record count")?;
    let count = usize::try_from(count).map_err(|_| StoreError::Malformed {
        line: 1,
        message: format!("record count must be non-negative, found {count}"),
    })?;

    let mut processes = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let id = next_int("process id")?;
        let arrival = next_int("arrival time")?;
        let burst = next_int("burst time")?;
        let priority = next_int("priority")?;
        processes.push(
            Process::new(id, burst)
                .with_arrival(arrival)
                .with_priority(priority),
        );
    }

    validate_processes(&processes).map_err(StoreError::Invalid)?;
    Ok(processes)
}

/// Saves records to `path`, creating or truncating the file.
pub fn save(path: impl AsRef<Path>, processes: &[Process]) -> Result<(), StoreError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StoreError::Unwritable {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(BufWriter::new(file), processes)?;
    log::info!("saved {} process(es) to {}", processes.len(), path.display());
    Ok(())
}

/// Loads and validates records from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Process>, StoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io(e),
    })?;
    let processes = parse_records(&text)?;
    log::info!("loaded {} process(es) from {}", processes.len(), path.display());
    Ok(processes)
}
