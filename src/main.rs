mod chart;
mod dashboard;
mod data;
mod output;
mod serve;

use std::path::{Path, PathBuf};

use charming::{ImageRenderer, renderer::ImageFormat};
use clap::Parser;

use chart::{CHART_HEIGHT, CHART_WIDTH};
use dashboard::{Dataset, Trigger, ViewRequest, update_view};
use output::{print_error, print_load_summary};

#[derive(Parser)]
#[command(
    name = "lyricstat",
    version,
    about = "Interactive dashboard for song lyrics view statistics per band",
    after_help = "Examples:
  lyricstat                                    Serve the dashboard from ./data
  lyricstat -d ./mydata -p 9000                Custom data directory and port
  lyricstat --image chart.png                  Render a snapshot PNG and exit
  lyricstat --image chart.png -b Architects    Snapshot restricted to one band
  lyricstat --no-color                         Disable colored output"
)]
struct Args {
    /// Directory containing bands.csv and songs.csv
    #[arg(short, long, default_value = "data", value_name = "DIR")]
    data_dir: PathBuf,

    /// Port for the dashboard server
    #[arg(short, long, default_value = "8050")]
    port: u16,

    /// Render a snapshot of the composite figure as PNG instead of serving
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Band to pre-select (repeatable; none selects everything)
    #[arg(short, long, value_name = "NAME")]
    band: Vec<String>,

    /// Use the dark theme preset
    #[arg(long)]
    dark: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

// Mode: render one composite figure for a fixed selection and exit
fn run_snapshot(dataset: &Dataset, selection: Vec<String>, dark: bool, path: &str) {
    let update = update_view(
        dataset,
        &ViewRequest {
            selection,
            dark_mode: dark,
            trigger: Trigger::SelectionChanged,
        },
    );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    if let Err(e) = renderer.save_format(ImageFormat::Png, &update.chart, path) {
        print_error(&format!("Failed to save chart: {}", e));
        std::process::exit(1);
    }
    eprintln!("Chart saved to: {}", path);
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.data_dir.is_dir() {
        print_error(&format!(
            "Data directory does not exist: {}",
            args.data_dir.display()
        ));
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let dataset = Dataset::load(&args.data_dir).unwrap_or_else(|e| {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    });
    print_load_summary(
        dataset.bands.len(),
        dataset.songs.len(),
        dataset.duplicates_dropped,
    );

    for band in &args.band {
        if !dataset.bands.iter().any(|b| &b.band_name == band) {
            print_error(&format!("Unknown band: {}", band));
            std::process::exit(1);
        }
    }

    // Dispatch to appropriate mode
    if let Some(ref path) = args.image {
        run_snapshot(&dataset, args.band.clone(), args.dark, path);
    } else if let Err(e) = serve::start(args.port, dataset) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
