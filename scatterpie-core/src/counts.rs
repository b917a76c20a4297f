//! Scatter pies from tables of per-category counts: rows are normalized to ratios and categories
//! are colored from a palette.

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    error::ScatterError,
    palette::{Colors, Palette, DEFAULT_COLORMAP},
    r2::R2,
    scatter::{scatter_pie, ScatterConfig, ScatterPie},
};

/// Points plus one count column per category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Counts {
    pub points: Vec<R2<f64>>,
    pub categories: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Counts {
    pub fn new(points: Vec<R2<f64>>, categories: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, ScatterError> {
        let counts = Counts { points, categories, rows };
        counts.validate()?;
        Ok(counts)
    }

    pub fn validate(&self) -> Result<(), ScatterError> {
        if self.points.len() != self.rows.len() {
            return Err(ScatterError::LengthMismatch { points: self.points.len(), ratios: self.rows.len() });
        }
        let expected = self.categories.len();
        match self.rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(ScatterError::RowLength { row, expected, found: self.rows[row].len() }),
            None => Ok(()),
        }
    }

    /// Keep only the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, cols: &[S]) -> Result<Counts, ScatterError> {
        if cols.len() < 2 {
            return Err(ScatterError::ColumnSelection(cols.len()));
        }
        let idxs = cols.iter().map(|col| {
            let col = col.as_ref();
            self.categories
                .iter()
                .position(|c| c == col)
                .ok_or_else(|| ScatterError::UnknownColumn(col.to_string()))
        }).collect::<Result<Vec<_>, _>>()?;
        Ok(Counts {
            points: self.points.clone(),
            categories: idxs.iter().map(|&i| self.categories[i].clone()).collect(),
            rows: self.rows.iter().map(|row| idxs.iter().map(|&i| row[i]).collect()).collect(),
        })
    }

    /// Divide each row by its sum; rows summing to 0 become all zeros.
    pub fn normalize(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| {
            let total: f64 = row.iter().sum();
            row.iter().map(|&v| {
                let ratio = v / total;
                if ratio.is_nan() { 0. } else { ratio }
            }).collect()
        }).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(default, rename_all = "camelCase")]
pub struct FromCountsConfig {
    /// Columns to plot (at least 2); all columns when `None`
    pub cols: Option<Vec<String>>,
    /// Category colors; built from `cmap` when `None`
    pub palette: Option<Palette>,
    pub cmap: String,
    pub scatter: ScatterConfig,
}

impl Default for FromCountsConfig {
    fn default() -> Self {
        Self {
            cols: None,
            palette: None,
            cmap: DEFAULT_COLORMAP.to_string(),
            scatter: ScatterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct FromCounts {
    pub pie: ScatterPie,
    pub categories: Vec<String>,
    /// Row-normalized ratios, one row per point
    pub ratios: Vec<Vec<f64>>,
    pub palette: Palette,
}

pub fn scatter_pie_from_counts(counts: &Counts, config: &FromCountsConfig) -> Result<FromCounts, ScatterError> {
    counts.validate()?;
    let selected = match &config.cols {
        Some(cols) => counts.select(cols)?,
        None => counts.clone(),
    };
    let ratios = selected.normalize();
    let palette = match &config.palette {
        Some(palette) => palette.clone(),
        None => Palette::from_colormap(&selected.categories, &config.cmap)?,
    };
    let colors = Colors::List(palette.colors(&selected.categories)?);
    let pie = scatter_pie(&selected.points, &ratios, &colors, &config.scatter)?;
    Ok(FromCounts { pie, categories: selected.categories, ratios, palette })
}


// CSV fixtures are read with polars, which is a dev-dependency
#[cfg(test)]
mod csv_io {
    use anyhow::Result;
    use polars::prelude::*;
    use AnyValue::Float64;
    use test_log::test;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    pub enum LoadErr {
        #[error("Expected columns \"x\", \"y\" and at least one category, found {0:?}")]
        MissingCols(Vec<String>),
        #[error("Expected Float64 in col {0}, got {1}")]
        InvalidVal(String, String),
    }

    impl Counts {
        pub fn load(path: &str) -> Result<Counts> {
            let mut df = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.into()))?
                .finish()?;
            df.as_single_chunk_par();
            let mut cols: Vec<(String, Vec<f64>)> = Vec::new();
            for series in df.iter() {
                let name = series.name().to_string();
                let vals = series.iter().map(|v| match v {
                    Float64(f) => Ok(f),
                    v => Err(LoadErr::InvalidVal(name.clone(), format!("{:?}", v))),
                }).collect::<Result<Vec<f64>, _>>()?;
                cols.push((name, vals));
            }
            let names: Vec<String> = cols.iter().map(|(name, _)| name.clone()).collect();
            if cols.len() < 3 || names[0] != "x" || names[1] != "y" {
                return Err(LoadErr::MissingCols(names).into());
            }
            let mut cols = cols.into_iter();
            let (_, xs) = cols.next().ok_or_else(|| LoadErr::MissingCols(names.clone()))?;
            let (_, ys) = cols.next().ok_or_else(|| LoadErr::MissingCols(names.clone()))?;
            let (categories, values): (Vec<String>, Vec<Vec<f64>>) = cols.unzip();
            let points = xs.into_iter().zip(ys).map(|xy| xy.into()).collect();
            let rows = (0..df.height()).map(|i| values.iter().map(|col| col[i]).collect()).collect();
            Ok(Counts::new(points, categories, rows)?)
        }
    }

    #[test]
    fn load_and_plot() -> Result<()> {
        let counts = Counts::load("testdata/counts.csv")?;
        assert_eq!(counts.categories, vec!["a", "b", "c"]);
        assert_eq!(counts.points.len(), 4);

        let result = scatter_pie_from_counts(&counts, &FromCountsConfig::default())?;
        assert_eq!(result.ratios[0], result.ratios[2]);
        assert_eq!(result.ratios[3], vec![0., 0., 0.]);
        assert_eq!(result.pie.num_markers(), 2);

        let halves = result.pie.layers.iter().find(|l| l.ratios == vec![0.25, 0.25, 0.5] && l.slice_idx == 2).unwrap();
        assert_eq!(halves.points, vec![R2 { x: 0., y: 0. }, R2 { x: 2., y: 1. }]);
        assert_eq!(halves.color, "#2ca02c");
        Ok(())
    }
}
