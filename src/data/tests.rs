//! Unit tests for table loading and filtering

use std::path::PathBuf;

use tempfile::TempDir;

use super::{filter_by, load_band_table, load_song_table};

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const SONGS_CSV: &str = "\
song_title;band_name;release_date;lyrics_view
Animals;Architects;2020-10-07;900
My Demons;STARSET;2014-05-27;1200
Animals;Architects;2020-10-07;901
Doomsday;Architects;2017-09-06;700
My Demons;CHVRCHES;2014-05-27;100
";

#[test]
fn duplicate_title_band_pairs_are_removed_entirely() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "songs.csv", SONGS_CSV);

    let (songs, dropped) = load_song_table(&path).unwrap();
    // Both "Animals"/Architects rows go away, originals included
    assert_eq!(dropped, 2);
    let titles: Vec<&str> = songs.iter().map(|s| s.song_title.as_str()).collect();
    assert_eq!(titles, vec!["My Demons", "Doomsday", "My Demons"]);
    // Same title under a different band survives
    assert!(songs.iter().any(|s| s.band_name == "CHVRCHES"));
}

#[test]
fn no_two_songs_share_title_and_band_after_load() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "songs.csv", SONGS_CSV);

    let (songs, _) = load_song_table(&path).unwrap();
    for (i, a) in songs.iter().enumerate() {
        for b in &songs[i + 1..] {
            assert!(!(a.song_title == b.song_title && a.band_name == b.band_name));
        }
    }
}

#[test]
fn year_is_derived_from_release_date() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "songs.csv",
        "song_title;band_name;release_date;lyrics_view\nGone;STARSET;2017/01/20;50\n",
    );

    let (songs, _) = load_song_table(&path).unwrap();
    assert_eq!(
        songs[0].release_date,
        chrono::NaiveDate::from_ymd_opt(2017, 1, 20).unwrap()
    );
    assert_eq!(songs[0].year, 2017);
    assert_eq!(songs[0].lyrics_view, 50);
}

#[test]
fn song_table_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "songs.csv",
        "song_title;band_name;release_date;lyrics_view\nGone;STARSET;not-a-date;50\n",
    );

    let err = load_song_table(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("row 1"));
}

#[test]
fn song_table_rejects_missing_column() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "songs.csv",
        "song_title;band_name;release_date\nGone;STARSET;2017-01-20\n",
    );

    let err = load_song_table(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("lyrics_view"));
}

#[test]
fn band_table_parses_day_first_dates() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "bands.csv",
        "band_name;song_title;smallest_date;biggest_date\nArchitects;40;14/01/2006;21-10-2022\n",
    );

    let bands = load_band_table(&path).unwrap();
    assert_eq!(bands[0].song_count, 40);
    assert_eq!(
        bands[0].smallest_date,
        chrono::NaiveDate::from_ymd_opt(2006, 1, 14).unwrap()
    );
    assert_eq!(
        bands[0].biggest_date,
        chrono::NaiveDate::from_ymd_opt(2022, 10, 21).unwrap()
    );
}

#[test]
fn band_table_ignores_extra_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "bands.csv",
        "genre;band_name;song_title;smallest_date;biggest_date\nmetal;Architects;40;14/01/2006;21/10/2022\n",
    );

    let bands = load_band_table(&path).unwrap();
    assert_eq!(bands[0].band_name, "Architects");
}

#[test]
fn band_table_rejects_bad_count() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "bands.csv",
        "band_name;song_title;smallest_date;biggest_date\nArchitects;many;14/01/2006;21/10/2022\n",
    );

    assert!(load_band_table(&path).is_err());
}

// filter_by laws

#[test]
fn empty_keep_set_returns_all_rows_in_order() {
    let rows = vec!["a", "b", "c", "d", "e"];
    let kept = filter_by(&rows, |r| *r, &[]);
    assert_eq!(kept, rows);
}

#[test]
fn filter_keeps_only_members_in_original_order() {
    let rows = vec!["a", "b", "a", "c", "b"];
    let keep = vec!["b".to_string(), "a".to_string()];
    let kept = filter_by(&rows, |r| *r, &keep);
    assert_eq!(kept, vec!["a", "b", "a", "b"]);
}

#[test]
fn unmatched_keep_set_yields_empty_not_error() {
    let rows = vec!["a", "b"];
    let keep = vec!["z".to_string()];
    assert!(filter_by(&rows, |r| *r, &keep).is_empty());
}
