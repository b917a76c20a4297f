#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod counts;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod palette;
pub mod scatter;
pub mod subsets;

pub use geometry::polygon;
pub use geometry::r2;

// Re-export key types for external use
pub use counts::{scatter_pie_from_counts, Counts, FromCounts, FromCountsConfig};
pub use error::{LogLevelError, MarkerError, ScatterError, SubsetError};
pub use marker::{pie_marker, Direction, MarkerConfig, PieMarker, Slice};
pub use palette::{Color, Colors, LegendEntry, Palette};
pub use polygon::Polygon;
pub use r2::R2;
pub use scatter::{scatter_pie, Layer, ScatterConfig, ScatterPie};
pub use subsets::{Size, Subsets, SubsetsMap};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, LogLevelError> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(LogLevelError(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("")), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("debug")), Ok(log::LevelFilter::Debug));
        assert_eq!(parse_log_level(Some("loud")), Err(LogLevelError("loud".to_string())));
    }
}
