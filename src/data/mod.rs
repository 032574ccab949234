//! Tabular dataset model and loading

mod filter;
mod load;

pub use filter::filter_by;
pub use load::{load_band_table, load_song_table};

use chrono::NaiveDate;

/// One row of the song table (one song of one band)
#[derive(Debug, Clone, PartialEq)]
pub struct SongRecord {
    pub song_title: String,
    pub band_name: String,
    pub release_date: NaiveDate,
    /// Release year, derived from `release_date` at load time
    pub year: i32,
    pub lyrics_view: u64,
    /// Hex color of the song's band, stamped after the color map is built
    pub colour: String,
}

/// One row of the band table (per-band summary computed upstream)
#[derive(Debug, Clone, PartialEq)]
pub struct BandRecord {
    pub band_name: String,
    /// Number of songs; the CSV header is `song_title`, a misnomer
    /// inherited from the upstream export
    pub song_count: u64,
    pub smallest_date: NaiveDate,
    pub biggest_date: NaiveDate,
    pub colour: String,
}

#[cfg(test)]
mod tests;
