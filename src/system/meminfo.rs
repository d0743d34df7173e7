use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_SOURCE: &str = "/proc/meminfo";

pub const MEM_TOTAL: &str = "MemTotal";
pub const MEM_AVAILABLE: &str = "MemAvailable";
pub const SWAP_TOTAL: &str = "SwapTotal";
pub const SWAP_FREE: &str = "SwapFree";

/// Every field the utilization computations consume.
pub const TRACKED_FIELDS: [&str; 4] = [MEM_TOTAL, MEM_AVAILABLE, SWAP_TOTAL, SWAP_FREE];

/// Field name to value, as found in one read of the source (units as given, kB for meminfo).
pub type RawStats = HashMap<String, u64>;

#[derive(Debug, Error)]
pub enum MeminfoError {
    #[error("statistics source {path} is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads `fields` from the source at `path`, logging and returning an empty
/// map if the source cannot be read.
pub fn read(path: &Path, fields: &[&str]) -> RawStats {
    match try_read(path, fields) {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(error = %err, "meminfo read failed");
            RawStats::new()
        }
    }
}

pub fn try_read(path: &Path, fields: &[&str]) -> Result<RawStats, MeminfoError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| MeminfoError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse(&contents, fields))
}

/// Parses `NAME: VALUE unit` records, keeping only `fields`.
///
/// Lines yielding fewer than two tokens are skipped, as are values that do
/// not parse as integers. The first occurrence of a field wins, and scanning
/// stops once every requested field has been seen.
pub fn parse(contents: &str, fields: &[&str]) -> RawStats {
    let mut stats = RawStats::with_capacity(fields.len());

    for line in contents.lines() {
        let mut tokens = line.trim().split(is_separator).filter(|t| !t.is_empty());
        let (Some(name), Some(value)) = (tokens.next(), tokens.next()) else {
            continue;
        };

        if !fields.contains(&name) || stats.contains_key(name) {
            continue;
        }
        if let Ok(value) = value.parse::<u64>() {
            stats.insert(name.to_string(), value);
        }

        if stats.len() == fields.len() {
            break;
        }
    }

    stats
}

fn is_separator(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}
