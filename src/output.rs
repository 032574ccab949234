use colored::*;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Startup summary so the operator can sanity-check the loaded tables
pub(crate) fn print_load_summary(bands: usize, songs: usize, duplicates_dropped: usize) {
    eprintln!(
        "Loaded {} bands, {} songs ({} ambiguous rows dropped)",
        bands.to_string().bold(),
        songs.to_string().bold(),
        duplicates_dropped
    );
}
