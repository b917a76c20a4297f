#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MarkerError {
    #[error("Unrecognized direction {0:?}, expected \"+\" (counterclockwise) or \"-\" (clockwise)")]
    InvalidDirection(String),

    #[error("Ratio {idx} is {ratio}, expected a finite non-negative number")]
    InvalidRatio { idx: usize, ratio: f64 },

    #[error("Ratio {idx} ({ratio}) needs {points} arc points, maximum {max}", max = crate::marker::MAX_POINTS)]
    TooManyPoints { idx: usize, ratio: f64, points: f64 },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubsetError {
    #[error("{provided} labels provided for {expected} groups")]
    GroupCountMismatch { expected: usize, provided: usize },

    #[error("{0} groups would produce 2^{0} subsets, maximum {max} groups supported", max = crate::subsets::MAX_GROUPS)]
    TooManyGroups(usize),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScatterError {
    #[error(transparent)]
    Marker(#[from] MarkerError),

    #[error("{points} points but {ratios} ratio vectors")]
    LengthMismatch { points: usize, ratios: usize },

    #[error("{colors} colors provided for {slices} slices")]
    NotEnoughColors { colors: usize, slices: usize },

    #[error("Unknown colormap {0:?}")]
    UnknownColormap(String),

    #[error("Number of categories ({categories}) more than number of colors in {cmap} ({colors})")]
    TooManyCategories { cmap: String, categories: usize, colors: usize },

    #[error("No color for legend label {0:?}")]
    MissingColor(String),

    #[error("Expected at least 2 columns to plot, got {0}")]
    ColumnSelection(usize),

    #[error("Unknown column {0:?}")]
    UnknownColumn(String),

    #[error("Row {row} has {found} counts, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid log level: {0}")]
pub struct LogLevelError(pub String);
