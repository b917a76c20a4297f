//! Pie-chart markers: each slice of a pie becomes its own polygon marker, so a scatter renderer
//! can draw one slice (in one color) per call.

mod direction;

pub use direction::Direction;

use std::f64::consts::TAU;

use derive_more::Deref;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{error::MarkerError, polygon::Polygon, r2::R2};

/// Ratios whose sum is further than this from 1 trigger a warning.
pub const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Most arc points a single slice may be sampled with.
pub const MAX_POINTS: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerConfig {
    /// Number of points around the full circle; a slice gets `round(ratio * resolution)` of them
    pub resolution: usize,
    pub direction: Direction,
    /// Starting angle of the first slice, in radians
    pub start: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            direction: Direction::default(),
            start: 0.,
        }
    }
}

impl MarkerConfig {
    pub const DEFAULT_RESOLUTION: usize = 50;
}

/// One pie slice: the origin followed by points sampled along its arc from `theta0` to `theta1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Slice {
    pub polygon: Polygon<f64>,
    /// Largest absolute coordinate in `polygon`; markers are sized by it.
    pub scale: f64,
    pub theta0: f64,
    pub theta1: f64,
}

impl Slice {
    /// Number of points sampled along the arc (excludes the origin).
    pub fn num_points(&self) -> usize {
        self.polygon.num_vertices().saturating_sub(1)
    }

    /// Zero-size slices have nothing to draw; callers skip them.
    pub fn is_degenerate(&self) -> bool {
        self.scale == 0.
    }

    pub fn sweep(&self) -> f64 {
        self.theta1 - self.theta0
    }
}

#[derive(Debug, Clone, PartialEq, Deref, Serialize, Deserialize, Tsify)]
pub struct PieMarker(pub Vec<Slice>);

impl PieMarker {
    pub fn polygons(&self) -> Vec<&Polygon<f64>> {
        self.iter().map(|s| &s.polygon).collect()
    }

    pub fn scales(&self) -> Vec<f64> {
        self.iter().map(|s| s.scale).collect()
    }

    pub fn into_parts(self) -> (Vec<Polygon<f64>>, Vec<f64>) {
        self.0.into_iter().map(|s| (s.polygon, s.scale)).unzip()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive; the last value is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut thetas: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            thetas[n - 1] = end;
            thetas
        }
    }
}

/// Arc points for a slice: `ratio * resolution`, rounded half-to-even.
pub fn arc_points(idx: usize, ratio: f64, resolution: usize) -> Result<usize, MarkerError> {
    if !ratio.is_finite() || ratio < 0. {
        return Err(MarkerError::InvalidRatio { idx, ratio });
    }
    let points = (ratio * resolution as f64).round_ties_even();
    if points > MAX_POINTS as f64 {
        return Err(MarkerError::TooManyPoints { idx, ratio, points });
    }
    Ok(points as usize)
}

pub fn ratio_sum_ok(ratios: &[f64]) -> bool {
    (ratios.iter().sum::<f64>() - 1.).abs() <= RATIO_SUM_TOLERANCE
}

/// Build one polygon marker per ratio, sweeping `2π * ratio` radians per slice.
///
/// A ratio sum outside [`RATIO_SUM_TOLERANCE`] of 1 is only warned about. Negative or non-finite
/// ratios, and slices needing more than [`MAX_POINTS`] arc points, are rejected before anything is
/// built.
pub fn pie_marker(ratios: &[f64], config: &MarkerConfig) -> Result<PieMarker, MarkerError> {
    let MarkerConfig { resolution, direction, start } = *config;
    let counts = ratios
        .iter()
        .enumerate()
        .map(|(idx, &ratio)| arc_points(idx, ratio, resolution))
        .collect::<Result<Vec<_>, _>>()?;
    if !ratio_sum_ok(ratios) {
        warn!("Ratios do not add up to 1: {:?} (sum {})", ratios, ratios.iter().sum::<f64>());
    }

    let mut theta0 = start;
    let mut slices = Vec::with_capacity(ratios.len());
    for (&ratio, n) in ratios.iter().zip(counts) {
        let theta1 = direction.advance(theta0, TAU * ratio);
        let mut vertices = Vec::with_capacity(n + 1);
        vertices.push(R2::origin());
        vertices.extend(linspace(theta0, theta1, n).into_iter().map(R2::unit));
        let polygon = Polygon::new(vertices);
        let scale = polygon.abs_max();
        slices.push(Slice { polygon, scale, theta0, theta1 });
        theta0 = theta1;
    }
    debug!(
        "pie_marker {:?}: {} slices, points {:?}",
        ratios,
        slices.len(),
        slices.iter().map(Slice::num_points).collect::<Vec<_>>(),
    );
    Ok(PieMarker(slices))
}
