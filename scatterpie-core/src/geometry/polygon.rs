use std::fmt::Display;

use approx::{AbsDiffEq, RelativeEq};
use derive_more::From;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use super::r2::R2;

/// Ordered vertex list. Unlike a filled shape, a marker path may have fewer than 3 vertices (a
/// degenerate pie slice is just the origin); the outline is closed implicitly by the renderer.
#[derive(Debug, Clone, From, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Polygon<D> {
    pub vertices: Vec<R2<D>>,
}

impl<D> Polygon<D> {
    pub fn new(vertices: Vec<R2<D>>) -> Self {
        Polygon { vertices }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}

impl Polygon<f64> {
    /// Largest absolute coordinate over all vertices; 0 for an empty polygon.
    pub fn abs_max(&self) -> f64 {
        self.vertices.iter().map(R2::abs_max).fold(0., f64::max)
    }

    pub fn xs(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.y).collect()
    }
}

impl<D: Display> Display for Polygon<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verts: Vec<String> = self
            .vertices
            .iter()
            .map(|v| format!("({:.3}, {:.3})", v.x, v.y))
            .collect();
        write!(f, "Polygon[{}]", verts.join(", "))
    }
}

impl AbsDiffEq for Polygon<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.vertices.iter().zip(&other.vertices).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Polygon<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.vertices.iter().zip(&other.vertices).all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge() -> Polygon<f64> {
        Polygon::new(vec![
            R2 { x: 0., y: 0. },
            R2 { x: 1., y: 0. },
            R2 { x: 0.5, y: -0.9 },
        ])
    }

    #[test]
    fn abs_max() {
        assert_eq!(wedge().abs_max(), 1.);
        assert_eq!(Polygon::new(vec![R2::origin()]).abs_max(), 0.);
        assert_eq!(Polygon::<f64>::new(vec![]).abs_max(), 0.);
    }

    #[test]
    fn coords() {
        let p = wedge();
        assert_eq!(p.num_vertices(), 3);
        assert_eq!(p.xs(), vec![0., 1., 0.5]);
        assert_eq!(p.ys(), vec![0., 0., -0.9]);
    }

    #[test]
    fn display() {
        assert_eq!(wedge().to_string(), "Polygon[(0.000, 0.000), (1.000, 0.000), (0.500, -0.900)]");
    }

    #[test]
    fn approx_eq() {
        let mut other = wedge();
        other.vertices[2].y += 1e-12;
        assert_relative_eq!(wedge(), other, epsilon = 1e-10);
        other.vertices.pop();
        assert!(!wedge().abs_diff_eq(&other, 1e-10));
    }
}
