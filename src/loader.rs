//! Turns text inputs into a [`VectorSet`].
//!
//! Two formats are supported:
//!
//! - **Stream** — one point per line, comma-separated coordinates.
//! - **Joined** — two files of `key,values...` lines. Keys are read as
//!   reals and truncated to integers (`48.0000` is key 48). Only keys
//!   present in both files survive; each joined point is the left values
//!   followed by the right values, ordered by ascending key.
use crate::*;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

impl Source {
    /// Reads the configured input.
    pub fn load(&self) -> Result<VectorSet, Error> {
        let points = match self {
            Self::Stream => stream(std::io::stdin().lock())?,
            Self::File(path) => stream(open(path)?)?,
            Self::Join(left, right) => join(open(left)?, open(right)?)?,
        };
        log::info!("{:<32}{:<32}", "loaded points", points.n());
        Ok(points)
    }
}

fn open(path: &Path) -> Result<BufReader<std::fs::File>, Error> {
    log::debug!("{:<32}{:<32}", "opening", path.display());
    Ok(BufReader::new(std::fs::File::open(path)?))
}

/// Parses one real-valued field.
fn real(field: &str, line: usize) -> Result<Energy, Error> {
    field
        .trim()
        .parse::<Energy>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| Error::Malformed(format!("line {}: `{}` is not a number", line, field)))
}

/// Parses a key column, truncating toward zero.
fn parse_key(field: &str, line: usize) -> Result<i64, Error> {
    real(field, line).map(|x| x.trunc() as i64)
}

/// Reads one point per non-blank line.
pub fn stream<R>(reader: R) -> Result<VectorSet, Error>
where
    R: BufRead,
{
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .map(|field| real(field, i + 1))
            .collect::<Result<Vec<Energy>, Error>>()?;
        rows.push(row);
    }
    VectorSet::try_from(rows)
}

/// Reads `key,values...` lines, skipping blank lines and lines with an empty key.
fn keyed<R>(reader: R) -> Result<Vec<(i64, Vec<Energy>)>, Error>
where
    R: BufRead,
{
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.trim().split(',');
        let head = fields.next().unwrap_or_default();
        if head.trim().is_empty() {
            continue;
        }
        let key = parse_key(head, i + 1)?;
        let values = fields
            .map(|field| real(field, i + 1))
            .collect::<Result<Vec<Energy>, Error>>()?;
        records.push((key, values));
    }
    Ok(records)
}

/// Inner-joins two keyed inputs.
///
/// A key repeated on the left keeps its last record; a key repeated on
/// the right yields one joined point per right record.
pub fn join<L, R>(left: L, right: R) -> Result<VectorSet, Error>
where
    L: BufRead,
    R: BufRead,
{
    let left = keyed(left)?
        .into_iter()
        .collect::<BTreeMap<i64, Vec<Energy>>>();
    let mut joined = keyed(right)?
        .into_iter()
        .filter_map(|(k, values)| {
            left.get(&k)
                .map(|prefix| (k, prefix.iter().chain(values.iter()).copied().collect()))
        })
        .collect::<Vec<(i64, Vec<Energy>)>>();
    joined.sort_by_key(|(k, _)| *k);
    log::debug!("{:<32}{:<32}", "joined records", joined.len());
    VectorSet::try_from(
        joined
            .into_iter()
            .map(|(_, values)| values)
            .collect::<Vec<Vec<Energy>>>(),
    )
}
