//! CSV loading for the song and band tables
//!
//! Both files are semicolon-delimited with a header row. Columns are located
//! by name so extra columns are ignored; a missing required column or an
//! unparseable value aborts the load.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord};

use super::{BandRecord, SongRecord};

/// Band table dates come day-first from the upstream export
const DAY_FIRST_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d-%m-%Y"];
/// Song table dates are ISO-ish
const YEAR_FIRST_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Resolved column indices for a set of required headers
struct Columns {
    indices: Vec<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, required: &[&str]) -> Result<Self> {
        let indices = required
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .position(|h| h == *name)
                    .ok_or_else(|| anyhow!("Missing required column '{}'", name))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    fn get<'a>(&self, record: &'a StringRecord, col: usize, row: usize) -> Result<&'a str> {
        record
            .get(self.indices[col])
            .ok_or_else(|| anyhow!("Row {} is too short", row + 1))
    }
}

fn parse_date(value: &str, formats: &[&str]) -> Result<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
        .ok_or_else(|| anyhow!("Unparseable date '{}'", value))
}

fn parse_count(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| anyhow!("Unparseable count '{}'", value))
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Load the per-band aggregate table
pub fn load_band_table(path: &Path) -> Result<Vec<BandRecord>> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().context("Failed to read headers")?.clone();
    let cols = Columns::resolve(
        &headers,
        &["band_name", "song_title", "smallest_date", "biggest_date"],
    )
    .with_context(|| format!("Bad schema in {}", path.display()))?;

    let mut bands = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Bad record at row {}", row + 1))?;
        let band_name = cols.get(&record, 0, row)?.to_string();
        let parsed = (|| -> Result<BandRecord> {
            Ok(BandRecord {
                song_count: parse_count(cols.get(&record, 1, row)?)?,
                smallest_date: parse_date(cols.get(&record, 2, row)?, &DAY_FIRST_FORMATS)?,
                biggest_date: parse_date(cols.get(&record, 3, row)?, &DAY_FIRST_FORMATS)?,
                band_name,
                colour: String::new(),
            })
        })()
        .with_context(|| format!("Bad band record at row {}", row + 1))?;
        bands.push(parsed);
    }
    Ok(bands)
}

/// Load the per-song table and drop ambiguous titles.
///
/// Any (song_title, band_name) pair occurring more than once is removed
/// entirely, originals included; surviving rows keep their file order.
/// Returns the table and the number of rows dropped.
pub fn load_song_table(path: &Path) -> Result<(Vec<SongRecord>, usize)> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().context("Failed to read headers")?.clone();
    let cols = Columns::resolve(
        &headers,
        &["song_title", "band_name", "release_date", "lyrics_view"],
    )
    .with_context(|| format!("Bad schema in {}", path.display()))?;

    let mut songs = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Bad record at row {}", row + 1))?;
        let parsed = (|| -> Result<SongRecord> {
            let release_date = parse_date(cols.get(&record, 2, row)?, &YEAR_FIRST_FORMATS)?;
            Ok(SongRecord {
                song_title: cols.get(&record, 0, row)?.to_string(),
                band_name: cols.get(&record, 1, row)?.to_string(),
                year: release_date.year(),
                release_date,
                lyrics_view: parse_count(cols.get(&record, 3, row)?)?,
                colour: String::new(),
            })
        })()
        .with_context(|| format!("Bad song record at row {}", row + 1))?;
        songs.push(parsed);
    }

    if songs.is_empty() {
        bail!("No song rows in {}", path.display());
    }

    let mut pair_counts: HashMap<(String, String), usize> = HashMap::new();
    for song in &songs {
        *pair_counts
            .entry((song.song_title.clone(), song.band_name.clone()))
            .or_insert(0) += 1;
    }

    let before = songs.len();
    songs.retain(|s| pair_counts[&(s.song_title.clone(), s.band_name.clone())] == 1);
    let dropped = before - songs.len();
    Ok((songs, dropped))
}
