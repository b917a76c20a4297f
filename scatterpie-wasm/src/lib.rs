//! WASM bindings for scatter pie charts.
//!
//! This crate exposes the scatterpie-core library to JavaScript, so a browser-side plotting layer
//! can request pie markers, scatter-pie layers and subset partitions.

use std::{collections::BTreeMap, fmt::Display};

use log::{debug, error, info};
use scatterpie_core::{
    palette::Palette, pie_marker as make_pie_marker, scatter_pie as make_scatter_pie,
    scatter_pie_from_counts as make_scatter_pie_from_counts, Colors, Counts, Direction,
    FromCountsConfig, MarkerConfig, ScatterConfig, Subsets, R2,
};
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

/// A subset element: JavaScript groups may hold integers or strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Tsify)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Str(String),
}

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&format!("Failed to parse {}: {}", what, e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        // No logger of ours is installed, so report straight to the console
        Err(e) => web_sys::console::error_1(&format!("failed to set console.logger: {}", e).into()),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsValue> {
    let level: Option<String> = from_js(level, "log level")?;
    let level = scatterpie_core::parse_log_level(level.as_deref()).map_err(js_err)?;
    log::set_max_level(level);
    Ok(())
}

/// Builds a pie marker: one polygon and one scale factor per slice.
///
/// # Arguments
/// * `ratios` - Slice ratios, nominally summing to 1 (a warning is logged otherwise).
/// * `resolution` - Points around the full circle (default 50).
/// * `direction` - "+" (counterclockwise, default) or "-" (clockwise); anything else is an error.
/// * `start` - Starting angle in radians (default 0).
///
/// # Returns
/// A [`scatterpie_core::PieMarker`]: an array of slices, each with its polygon, scale, and start/end angles.
#[wasm_bindgen]
pub fn pie_marker(
    ratios: Vec<f64>,
    resolution: Option<usize>,
    direction: Option<String>,
    start: Option<f64>,
) -> Result<JsValue, JsValue> {
    let direction = match direction {
        Some(direction) => direction.parse::<Direction>().map_err(js_err)?,
        None => Direction::default(),
    };
    let config = MarkerConfig {
        resolution: resolution.unwrap_or(MarkerConfig::DEFAULT_RESOLUTION),
        direction,
        start: start.unwrap_or(0.),
    };
    let marker = make_pie_marker(&ratios, &config).map_err(js_err)?;
    to_js(&marker)
}

/// Plans a scatter pie: one layer per (distinct ratio vector, non-degenerate slice).
///
/// # Arguments
/// * `points` - Array of `{ x, y }` points.
/// * `ratios` - One ratio array per point.
/// * `colors` - Array of colors, or a colormap name ("tab10", "Set1", "Set2", "Dark2").
/// * `config` - Partial [`ScatterConfig`] (`marker`, `size`); omitted fields take defaults.
///
/// # Returns
/// A [`scatterpie_core::ScatterPie`] whose layers each name a marker polygon, size, color and
/// the points to draw it at.
#[wasm_bindgen]
pub fn scatter_pie(points: JsValue, ratios: JsValue, colors: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let points: Vec<R2<f64>> = from_js(points, "points")?;
    let ratios: Vec<Vec<f64>> = from_js(ratios, "ratios")?;
    let colors: Option<Colors> = from_js(colors, "colors")?;
    let config: Option<ScatterConfig> = from_js(config, "config")?;
    let pie = make_scatter_pie(
        &points,
        &ratios,
        &colors.unwrap_or_default(),
        &config.unwrap_or_default(),
    ).map_err(js_err)?;
    debug!("scatter_pie: {} layers", pie.layers.len());
    to_js(&pie)
}

/// Plans a scatter pie from per-category counts, normalizing each row to ratios.
///
/// # Arguments
/// * `counts` - `{ points, categories, rows }`, one row of counts per point.
/// * `config` - Partial [`FromCountsConfig`] (`cols`, `palette`, `cmap`, `scatter`).
///
/// # Returns
/// A [`scatterpie_core::FromCounts`]: the layers, the normalized ratios and the palette used.
#[wasm_bindgen]
pub fn scatter_pie_from_counts(counts: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let counts: Counts = from_js(counts, "counts")?;
    let config: Option<FromCountsConfig> = from_js(config, "config")?;
    let result = make_scatter_pie_from_counts(&counts, &config.unwrap_or_default()).map_err(js_err)?;
    to_js(&result)
}

fn subsets(groups: JsValue) -> Result<Subsets<Element>, JsValue> {
    let groups: Vec<Vec<Element>> = from_js(groups, "groups")?;
    Subsets::new(groups).map_err(js_err)
}

/// Partitions overlapping groups by exact membership.
///
/// # Arguments
/// * `groups` - Array of N arrays of integers or strings.
///
/// # Returns
/// Map from each of the 2^N - 1 membership keys (e.g. "101" = in groups 0 and 2, not 1) to the
/// elements with exactly that membership.
#[wasm_bindgen]
pub fn get_subsets(groups: JsValue) -> Result<JsValue, JsValue> {
    to_js(&subsets(groups)?.all)
}

/// Computes the size of each membership subset.
///
/// # Arguments
/// * `groups` - Array of N arrays of integers or strings.
/// * `normalize` - Divide sizes by the size of the union, so they sum to 1.
#[wasm_bindgen]
pub fn get_subset_sizes(groups: JsValue, normalize: bool) -> Result<JsValue, JsValue> {
    to_js(&subsets(groups)?.sizes(normalize))
}

/// Computes a display label for each membership subset.
///
/// # Arguments
/// * `groups` - Array of N arrays of integers or strings.
/// * `names` - Optional array of N group names, prefixed (with a line break) to single-group labels.
/// * `normalize` - Label with fractions of the union instead of counts.
///
/// # Errors
/// If `names` doesn't have exactly N entries.
#[wasm_bindgen]
pub fn get_subset_labels(groups: JsValue, names: JsValue, normalize: bool) -> Result<JsValue, JsValue> {
    let names: Option<Vec<String>> = from_js(names, "names")?;
    let labels: BTreeMap<String, String> = subsets(groups)?
        .labels(names.as_deref(), normalize)
        .map_err(js_err)?;
    to_js(&labels)
}

/// Maps categories to colors from a named colormap.
///
/// # Arguments
/// * `categories` - Category names, colored in order.
/// * `cmap` - Colormap name (default "tab10").
///
/// # Errors
/// If the colormap is unknown or has fewer colors than there are categories.
#[wasm_bindgen]
pub fn get_palette(categories: JsValue, cmap: Option<String>) -> Result<JsValue, JsValue> {
    let categories: Vec<String> = from_js(categories, "categories")?;
    let cmap = cmap.unwrap_or_else(|| scatterpie_core::palette::DEFAULT_COLORMAP.to_string());
    let palette = Palette::from_colormap(&categories, &cmap).map_err(|e| {
        error!("get_palette: {}", e);
        js_err(e)
    })?;
    to_js(&palette)
}
