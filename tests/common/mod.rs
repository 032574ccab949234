//! Common test utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Write a band/song CSV pair into `dir`, returning the data directory
pub fn write_fixture_data(dir: &TempDir, bands_csv: &str, songs_csv: &str) -> PathBuf {
    let data_dir = dir.path().join("data");
    std::fs::create_dir(&data_dir).unwrap();
    std::fs::write(data_dir.join("bands.csv"), bands_csv).unwrap();
    std::fs::write(data_dir.join("songs.csv"), songs_csv).unwrap();
    data_dir
}

/// A small consistent dataset: four bands, a handful of songs,
/// one duplicated (song_title, band_name) pair
pub fn default_fixture(dir: &TempDir) -> PathBuf {
    write_fixture_data(dir, DEFAULT_BANDS_CSV, DEFAULT_SONGS_CSV)
}

pub const DEFAULT_BANDS_CSV: &str = "\
band_name;song_title;smallest_date;biggest_date
Architects;4;14/01/2006;21/10/2022
STARSET;3;08/07/2014;29/01/2021
Poets of the Fall;2;19/01/2005;17/04/2020
CHVRCHES;2;04/03/2013;27/08/2021
";

pub const DEFAULT_SONGS_CSV: &str = "\
song_title;band_name;release_date;lyrics_view
Animals;Architects;2020-10-07;912
Doomsday;Architects;2017-09-06;734
Gone With the Wind;Architects;2016-05-27;501
Gravebound;Architects;2016-05-27;502
My Demons;STARSET;2014-05-27;1234
Monster;STARSET;2016-01-22;987
Trials;STARSET;2019-01-25;456
Carnival of Rust;Poets of the Fall;2006-04-12;876
Lift;Poets of the Fall;2005-01-19;321
The Mother We Share;CHVRCHES;2013-03-04;654
Clearest Blue;CHVRCHES;2015-09-25;543
Duplicate Song;CHVRCHES;2018-01-01;100
Duplicate Song;CHVRCHES;2018-01-02;101
";
