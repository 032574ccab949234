//! Composite figure construction for the dashboard

mod colors;
mod compose;

pub use colors::{Theme, colour_map};
pub use compose::compose_figure;

/// Bars shown in each ranked chart
pub(crate) const TOP_LIMIT: usize = 10;

/// Snapshot dimensions (2x for Retina quality)
pub const CHART_WIDTH: u32 = 2400;
pub const CHART_HEIGHT: u32 = 1200;
