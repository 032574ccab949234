//! The three chart panels and their composite layout
//!
//! Panel layout is fixed: the two ranked bar charts stack in the left column
//! and the per-band yearly output lines fill the remaining area. The bands
//! bar chart is always series 0; the click-to-filter rule keys on it.

use std::collections::HashMap;

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        Symbol, TextStyle},
    series::{Bar, Line},
};

use super::TOP_LIMIT;
use super::colors::Theme;
use crate::data::{BandRecord, SongRecord};

/// Songs-per-year line for one band, gap-filled over its active year range
pub struct YearlySeries {
    pub band_name: String,
    pub colour: String,
    pub points: Vec<(i32, u64)>,
}

/// Rank bands by song count descending, truncated to `limit`.
/// The sort is stable so ties keep their original row order.
pub fn top_bands(bands: &[BandRecord], limit: usize) -> Vec<&BandRecord> {
    let mut ranked: Vec<&BandRecord> = bands.iter().collect();
    ranked.sort_by(|a, b| b.song_count.cmp(&a.song_count));
    ranked.truncate(limit);
    ranked
}

/// Rank songs by view count descending, truncated to `limit` (stable ties)
pub fn top_songs(songs: &[SongRecord], limit: usize) -> Vec<&SongRecord> {
    let mut ranked: Vec<&SongRecord> = songs.iter().collect();
    ranked.sort_by(|a, b| b.lyrics_view.cmp(&a.lyrics_view));
    ranked.truncate(limit);
    ranked
}

/// Count songs per (band, year) and build one gap-filled series per band.
///
/// Each band covers its own continuous [min year, max year] range with
/// missing years at zero, so the line shows a real zero instead of a
/// misleading interpolated gap. Bands keep song-table encounter order.
pub fn yearly_output(songs: &[SongRecord]) -> Vec<YearlySeries> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<(&str, i32), u64> = HashMap::new();
    for song in songs {
        if !order.contains(&song.band_name.as_str()) {
            order.push(&song.band_name);
        }
        *counts.entry((song.band_name.as_str(), song.year)).or_insert(0) += 1;
    }

    order
        .iter()
        .map(|band| {
            let years = songs
                .iter()
                .filter(|s| s.band_name == *band)
                .map(|s| s.year);
            let first = years.clone().min().unwrap_or(0);
            let last = years.max().unwrap_or(0);
            let colour = songs
                .iter()
                .find(|s| s.band_name == *band)
                .map(|s| s.colour.clone())
                .unwrap_or_default();
            YearlySeries {
                band_name: band.to_string(),
                colour,
                points: (first..=last)
                    .map(|y| (y, counts.get(&(*band, y)).copied().unwrap_or(0)))
                    .collect(),
            }
        })
        .collect()
}

/// Compose the three panels into the fixed 2x3 layout for the given
/// (already filtered) tables. Empty inputs yield empty panels, never errors.
pub fn compose_figure(bands: &[BandRecord], songs: &[SongRecord], theme: &Theme) -> Chart {
    let band_ranking = top_bands(bands, TOP_LIMIT);
    let song_ranking = top_songs(songs, TOP_LIMIT);
    let lines = yearly_output(songs);

    let title_style = || TextStyle::new().color(theme.text).font_size(22);
    let axis_label = || AxisLabel::new().color(theme.text).font_size(14);
    let grid_lines = || SplitLine::new().line_style(LineStyle::new().width(0.5).color(theme.grid));

    let mut chart = Chart::new()
        .background_color(Color::Value(theme.background.to_string()))
        .title(
            Title::new()
                .text("Number of songs per band")
                .left("6%")
                .top("2%")
                .text_style(title_style()),
        )
        .title(
            Title::new()
                .text("Songs with max views")
                .left("6%")
                .top("52%")
                .text_style(title_style()),
        )
        .title(
            Title::new()
                .text("Number of songs written per year")
                .left("55%")
                .top("2%")
                .text_style(title_style()),
        )
        // Left column, top: bands bar
        .grid(
            Grid::new()
                .left("4%")
                .right("72%")
                .top("8%")
                .bottom("56%")
                .contain_label(true),
        )
        // Left column, bottom: songs bar
        .grid(
            Grid::new()
                .left("4%")
                .right("72%")
                .top("58%")
                .bottom("6%")
                .contain_label(true),
        )
        // Remaining area: yearly output lines
        .grid(
            Grid::new()
                .left("34%")
                .right("3%")
                .top("8%")
                .bottom("6%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .grid_index(0)
                .data(
                    band_ranking
                        .iter()
                        .map(|b| b.band_name.clone())
                        .collect::<Vec<String>>(),
                )
                .axis_label(axis_label().rotate(30)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(0)
                .axis_label(axis_label())
                .split_line(grid_lines()),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .grid_index(1)
                .data(
                    song_ranking
                        .iter()
                        .map(|s| s.song_title.clone())
                        .collect::<Vec<String>>(),
                )
                .axis_label(axis_label().rotate(30)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(1)
                .axis_label(axis_label())
                .split_line(grid_lines()),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(2)
                .axis_label(axis_label()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(2)
                .axis_label(axis_label())
                .split_line(grid_lines()),
        );

    // Series 0: bands bar, one self-colored bar per band with its count label
    chart = chart.series(
        Bar::new()
            .name("Songs per band")
            .x_axis_index(0)
            .y_axis_index(0)
            .data(bar_items(
                band_ranking.iter().map(|b| (b.song_count, b.colour.clone())),
            ))
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .color(theme.text)
                    .font_size(14)
                    .formatter("{c}"),
            ),
    );

    // Series 1: songs bar, colored by the song's band
    chart = chart.series(
        Bar::new()
            .name("Lyrics views")
            .x_axis_index(1)
            .y_axis_index(1)
            .data(bar_items(
                song_ranking.iter().map(|s| (s.lyrics_view, s.colour.clone())),
            )),
    );

    // Series 2..: one line per band
    for series in &lines {
        chart = chart.series(
            Line::new()
                .name(&series.band_name)
                .x_axis_index(2)
                .y_axis_index(2)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(2).color(series.colour.as_str()))
                .item_style(ItemStyle::new().color(series.colour.as_str()))
                .data(
                    series
                        .points
                        .iter()
                        .map(|&(year, count)| vec![year as f64, count as f64])
                        .collect::<Vec<_>>(),
                ),
        );
    }

    chart
}

fn bar_items(
    values: impl Iterator<Item = (u64, String)>,
) -> Vec<charming::datatype::DataPointItem> {
    values
        .map(|(value, colour)| {
            charming::datatype::DataPointItem::new(value as f64)
                .item_style(ItemStyle::new().color(colour.as_str()))
        })
        .collect()
}
