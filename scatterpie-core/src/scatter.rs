//! Scatter-pie layer planning: points sharing a ratio vector share one pie marker, and each
//! non-degenerate slice of that marker becomes one draw call ("layer").

use std::collections::BTreeMap;

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    error::ScatterError,
    marker::{pie_marker, MarkerConfig},
    palette::{Color, Colors},
    polygon::Polygon,
    r2::R2,
};

/// Hashable, ordered encoding of a ratio vector.
pub type RatioKey = Vec<OrderedFloat<f64>>;

pub fn ratio_key(ratios: &[f64]) -> RatioKey {
    // Fold -0.0 into 0.0 so rows rebuilt from keys carry no negative zeros
    ratios.iter().map(|&r| OrderedFloat(if r == 0. { 0. } else { r })).collect()
}

/// Group point indices by ratio vector, in one pass; indices keep input order.
pub fn group_by_ratios(ratios: &[Vec<f64>]) -> BTreeMap<RatioKey, Vec<usize>> {
    let mut groups: BTreeMap<RatioKey, Vec<usize>> = BTreeMap::new();
    for (idx, row) in ratios.iter().enumerate() {
        groups.entry(ratio_key(row)).or_default().push(idx);
    }
    groups
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterConfig {
    pub marker: MarkerConfig,
    /// Marker area for a full-radius slice; a slice with scale `s` is drawn at `s² * size`
    pub size: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            marker: MarkerConfig::default(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl ScatterConfig {
    pub const DEFAULT_SIZE: f64 = 100.;
}

/// One slice of one pie marker, drawn at every point sharing `ratios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub ratios: Vec<f64>,
    pub slice_idx: usize,
    pub marker: Polygon<f64>,
    pub size: f64,
    pub color: Color,
    pub points: Vec<R2<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Tsify)]
pub struct ScatterPie {
    pub layers: Vec<Layer>,
}

impl ScatterPie {
    /// Number of distinct ratio vectors (i.e. pie markers) among the layers.
    pub fn num_markers(&self) -> usize {
        let mut keys: Vec<RatioKey> = self.layers.iter().map(|l| ratio_key(&l.ratios)).collect();
        keys.dedup();
        keys.len()
    }
}

/// Plan a scatter pie: one pie marker per distinct ratio vector, one layer per non-degenerate
/// slice. Any invalid ratio row fails the whole call; no partial plan is returned.
pub fn scatter_pie(
    points: &[R2<f64>],
    ratios: &[Vec<f64>],
    colors: &Colors,
    config: &ScatterConfig,
) -> Result<ScatterPie, ScatterError> {
    if points.len() != ratios.len() {
        return Err(ScatterError::LengthMismatch { points: points.len(), ratios: ratios.len() });
    }
    let groups = group_by_ratios(ratios);
    let max_slices = groups.keys().map(Vec::len).max().unwrap_or(0);
    let colors = colors.resolve(max_slices)?;

    let mut layers = Vec::new();
    for (key, idxs) in &groups {
        let row: Vec<f64> = key.iter().map(|r| r.0).collect();
        let marker = pie_marker(&row, &config.marker)?;
        let group_points: Vec<R2<f64>> = idxs.iter().map(|&idx| points[idx]).collect();
        for (slice_idx, (slice, color)) in marker.0.into_iter().zip(&colors).enumerate() {
            if slice.is_degenerate() {
                continue;
            }
            layers.push(Layer {
                ratios: row.clone(),
                slice_idx,
                size: slice.scale * slice.scale * config.size,
                marker: slice.polygon,
                color: color.clone(),
                points: group_points.clone(),
            });
        }
    }
    debug!("scatter_pie: {} points, {} markers, {} layers", points.len(), groups.len(), layers.len());
    Ok(ScatterPie { layers })
}
