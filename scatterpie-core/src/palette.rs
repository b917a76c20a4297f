//! Qualitative colormaps and category → color palettes.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tsify::{declare, Tsify};

use crate::error::ScatterError;

#[declare]
pub type Color = String;

pub const TAB10: &[&str] = &[
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
];

pub const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00",
    "#ffff33", "#a65628", "#f781bf", "#999999",
];

pub const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3",
    "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

pub const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a",
    "#66a61e", "#e6ab02", "#a6761d", "#666666",
];

pub const DEFAULT_COLORMAP: &str = "tab10";

pub fn colormap(name: &str) -> Result<&'static [&'static str], ScatterError> {
    match name {
        "tab10" => Ok(TAB10),
        "Set1" => Ok(SET1),
        "Set2" => Ok(SET2),
        "Dark2" => Ok(DARK2),
        _ => Err(ScatterError::UnknownColormap(name.to_string())),
    }
}

/// Slice colors: an explicit list, or the name of a colormap whose first colors are used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(untagged)]
pub enum Colors {
    List(Vec<Color>),
    Colormap(String),
}

impl Default for Colors {
    fn default() -> Self {
        Colors::Colormap(DEFAULT_COLORMAP.to_string())
    }
}

impl Colors {
    /// Colors for `slices` slices, in slice order.
    pub fn resolve(&self, slices: usize) -> Result<Vec<Color>, ScatterError> {
        let colors: Vec<Color> = match self {
            Colors::List(colors) => colors.clone(),
            Colors::Colormap(name) => colormap(name)?.iter().map(|c| c.to_string()).collect(),
        };
        if colors.len() < slices {
            return Err(ScatterError::NotEnoughColors { colors: colors.len(), slices });
        }
        Ok(colors.into_iter().take(slices).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Category → color mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Palette(pub BTreeMap<String, Color>);

impl Palette {
    /// Assign the `i`-th color of colormap `cmap` to the `i`-th category.
    pub fn from_colormap<S: AsRef<str>>(categories: &[S], cmap: &str) -> Result<Self, ScatterError> {
        let colors = colormap(cmap)?;
        if categories.len() > colors.len() {
            return Err(ScatterError::TooManyCategories {
                cmap: cmap.to_string(),
                categories: categories.len(),
                colors: colors.len(),
            });
        }
        Ok(Palette(
            categories
                .iter()
                .zip(colors)
                .map(|(category, color)| (category.as_ref().to_string(), color.to_string()))
                .collect()
        ))
    }

    pub fn get(&self, category: &str) -> Result<&Color, ScatterError> {
        self.0.get(category).ok_or_else(|| ScatterError::MissingColor(category.to_string()))
    }

    /// Colors for `categories`, in order.
    pub fn colors<S: AsRef<str>>(&self, categories: &[S]) -> Result<Vec<Color>, ScatterError> {
        categories.iter().map(|c| self.get(c.as_ref()).cloned()).collect()
    }

    pub fn legend<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<LegendEntry>, ScatterError> {
        labels.iter().map(|label| {
            let label = label.as_ref();
            Ok(LegendEntry { label: label.to_string(), color: self.get(label)?.clone() })
        }).collect()
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colormap_lookup() {
        assert_eq!(colormap("tab10").unwrap().len(), 10);
        assert_eq!(colormap("Set1").unwrap()[0], "#e41a1c");
        assert_eq!(colormap("viridis"), Err(ScatterError::UnknownColormap("viridis".to_string())));
    }

    #[test]
    fn resolve_colormap() {
        let colors = Colors::default().resolve(3).unwrap();
        assert_eq!(colors, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);
        assert_eq!(
            Colors::Colormap("Dark2".to_string()).resolve(9),
            Err(ScatterError::NotEnoughColors { colors: 8, slices: 9 }),
        );
    }

    #[test]
    fn resolve_list() {
        let colors = Colors::List(vec!["red".to_string(), "blue".to_string()]);
        assert_eq!(colors.resolve(1).unwrap(), vec!["red"]);
        assert_eq!(colors.resolve(2).unwrap(), vec!["red", "blue"]);
        assert_eq!(colors.resolve(3), Err(ScatterError::NotEnoughColors { colors: 2, slices: 3 }));
    }

    #[test]
    fn colors_deserialize_untagged() {
        let colors: Colors = serde_json::from_str(r#""Set2""#).unwrap();
        assert_eq!(colors, Colors::Colormap("Set2".to_string()));
        let colors: Colors = serde_json::from_str(r##"["#000", "#fff"]"##).unwrap();
        assert_eq!(colors, Colors::List(vec!["#000".to_string(), "#fff".to_string()]));
    }

    #[test]
    fn palette_from_colormap() {
        let palette = Palette::from_colormap(&["a", "b"], "Set1").unwrap();
        assert_eq!(palette.get("b").unwrap(), "#377eb8");
        assert_eq!(palette.to_string(), "a: #e41a1c, b: #377eb8");
        assert_eq!(palette.colors(&["b", "a"]).unwrap(), vec!["#377eb8", "#e41a1c"]);
    }

    #[test]
    fn palette_too_many_categories() {
        let categories: Vec<String> = (0..11).map(|i| format!("c{}", i)).collect();
        assert_eq!(
            Palette::from_colormap(&categories, "tab10"),
            Err(ScatterError::TooManyCategories { cmap: "tab10".to_string(), categories: 11, colors: 10 }),
        );
    }

    #[test]
    fn legend() {
        let palette = Palette::from_colormap(&["x", "y", "z"], "tab10").unwrap();
        let entries = palette.legend(&["z", "x"]).unwrap();
        assert_eq!(entries, vec![
            LegendEntry { label: "z".to_string(), color: "#2ca02c".to_string() },
            LegendEntry { label: "x".to_string(), color: "#1f77b4".to_string() },
        ]);
        assert_eq!(palette.legend(&["w"]), Err(ScatterError::MissingColor("w".to_string())));
    }
}
