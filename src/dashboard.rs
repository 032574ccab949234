//! Dashboard state and the per-interaction recompute
//!
//! The two tables and the color map are loaded once at startup and never
//! mutated afterwards; every interaction is an independent synchronous
//! recompute against them.

use std::path::Path;

use anyhow::{Context, Result};
use charming::Chart;
use chrono::NaiveDate;

use crate::chart::{Theme, colour_map, compose_figure};
use crate::data::{BandRecord, SongRecord, filter_by, load_band_table, load_song_table};

/// Immutable shared state for the lifetime of the process
pub struct Dataset {
    pub bands: Vec<BandRecord>,
    pub songs: Vec<SongRecord>,
    /// Rows dropped by the ambiguous-title rule, for operator reporting
    pub duplicates_dropped: usize,
}

impl Dataset {
    /// Load both tables from `dir` and stamp every row with its band color.
    ///
    /// The color map is generated from the band table's encounter order, so
    /// loading the same files always yields the same colors.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut bands = load_band_table(&dir.join("bands.csv"))
            .with_context(|| format!("Failed to load band table from {}", dir.display()))?;
        let (mut songs, duplicates_dropped) = load_song_table(&dir.join("songs.csv"))
            .with_context(|| format!("Failed to load song table from {}", dir.display()))?;

        let colours = colour_map(bands.iter().map(|b| b.band_name.as_str()));
        for band in &mut bands {
            if let Some(colour) = colours.get(&band.band_name) {
                band.colour = colour.clone();
            }
        }
        for song in &mut songs {
            if let Some(colour) = colours.get(&song.band_name) {
                song.colour = colour.clone();
            }
        }

        Ok(Self {
            bands,
            songs,
            duplicates_dropped,
        })
    }

    /// Band names in table order, for selection UIs
    pub fn band_names(&self) -> Vec<String> {
        self.bands.iter().map(|b| b.band_name.clone()).collect()
    }
}

/// A click on the composite figure: which series, which category value
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub series_index: usize,
    pub value: String,
}

/// Which boundary input fired for this interaction
#[derive(Debug, Clone)]
pub enum Trigger {
    SelectionChanged,
    ThemeToggled,
    ChartClicked(ClickEvent),
}

/// One interaction: the current boundary state plus the input that fired
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub selection: Vec<String>,
    pub dark_mode: bool,
    pub trigger: Trigger,
}

/// The recomputed figure and the display values that go with it
pub struct ViewUpdate {
    pub chart: Chart,
    pub selection: Vec<String>,
    pub smallest_date: Option<NaiveDate>,
    pub biggest_date: Option<NaiveDate>,
}

/// Recompute the composite figure for one interaction.
///
/// A click on series 0 (the bands bar chart) replaces the selection with the
/// clicked band; clicks elsewhere change nothing. An empty selection means
/// "show everything". A selected band missing from one table simply
/// contributes nothing to the panels built from that table.
pub fn update_view(dataset: &Dataset, request: &ViewRequest) -> ViewUpdate {
    let selection = match &request.trigger {
        Trigger::ChartClicked(click) if click.series_index == 0 => vec![click.value.clone()],
        _ => request.selection.clone(),
    };

    let bands = filter_by(&dataset.bands, |b: &BandRecord| &b.band_name, &selection);
    let songs = filter_by(&dataset.songs, |s: &SongRecord| &s.band_name, &selection);

    let chart = compose_figure(&bands, &songs, Theme::preset(request.dark_mode));

    ViewUpdate {
        chart,
        selection,
        smallest_date: bands.iter().map(|b| b.smallest_date).min(),
        biggest_date: bands.iter().map(|b| b.biggest_date).max(),
    }
}
