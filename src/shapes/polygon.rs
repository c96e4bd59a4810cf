//! Polygons - closed chains of sampled edges

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling::DEFAULT_MIN_DENSITY;

/// Options for polygons
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    /// Colors cycled over the edges in traversal order
    ///
    /// When unset or empty every edge uses the cloud color.
    pub edge_colors: Option<Vec<Color>>,
    /// Largest allowed step in each edge's parameter
    pub min_density: f32,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            edge_colors: None,
            min_density: DEFAULT_MIN_DENSITY,
        }
    }
}

/// A polygon defined by a list of vertices
///
/// Vertices are connected in order, with the last vertex connecting back
/// to the first. The offset of each vertex in the generated cloud is kept
/// so the corners can be recovered after sampling.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point3<f32>>,
    edge_colors: Vec<Color>,
    min_density: f32,
    indices_of_vertices: Vec<usize>,
    cloud: PointCloud,
}

impl Polygon {
    /// Create a new polygon from vertices
    ///
    /// Fails with `TooFewVertices` if fewer than 2 vertices are given.
    pub fn new(vertices: Vec<Point3<f32>>, config: &PolygonConfig) -> Result<Self, ShapeError> {
        if vertices.len() < 2 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }

        Ok(Self {
            vertices,
            edge_colors: config.edge_colors.clone().unwrap_or_default(),
            min_density: config.min_density,
            indices_of_vertices: Vec::new(),
            cloud: PointCloud::new(&config.cloud, Color::GREEN_D),
        })
    }

    /// The vertices the polygon was built from
    pub fn input_vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Offset of each vertex in the generated cloud
    pub fn indices_of_vertices(&self) -> &[usize] {
        &self.indices_of_vertices
    }

    /// The generated points at the vertex offsets, in input order
    ///
    /// Empty until `generate_points` has run.
    pub fn get_vertices(&self) -> Vec<Point3<f32>> {
        let points = self.cloud.positions();
        self.indices_of_vertices
            .iter()
            .filter_map(|&i| points.get(i).copied())
            .collect()
    }

    /// Color of the edge starting at vertex `index`
    fn edge_color(&self, index: usize) -> Color {
        if self.edge_colors.is_empty() {
            self.cloud.color()
        } else {
            self.edge_colors[index % self.edge_colors.len()]
        }
    }
}

impl Shape for Polygon {
    fn name(&self) -> &str {
        "Polygon"
    }

    fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        &mut self.cloud
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        check_positive("epsilon", self.cloud.epsilon())?;

        let n = self.vertices.len();
        self.cloud.clear();
        self.indices_of_vertices.clear();

        for i in 0..n {
            let start = self.vertices[i];
            let end = self.vertices[(i + 1) % n];
            let color = self.edge_color(i);
            self.indices_of_vertices.push(self.cloud.point_count());
            self.cloud
                .append_segment(&start, &end, self.min_density, Some(color));
        }

        log::debug!(
            "Generated {} points for {} ({} edges)",
            self.cloud.point_count(),
            self.name(),
            n
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_too_few_vertices() {
        let result = Polygon::new(vec![Point3::origin()], &PolygonConfig::default());
        assert_eq!(result.err(), Some(ShapeError::TooFewVertices { count: 1 }));
    }

    #[test]
    fn test_get_vertices() {
        for epsilon in [0.5, 0.05, 0.001] {
            let config = PolygonConfig {
                cloud: CloudConfig {
                    epsilon,
                    ..PolygonConfig::default().cloud
                },
                ..PolygonConfig::default()
            };
            let mut polygon = Polygon::new(unit_square(), &config).unwrap();
            polygon.generate_points().unwrap();

            assert_eq!(polygon.get_vertices(), unit_square());
            assert_eq!(polygon.points().len(), polygon.colors().len());
        }
    }

    #[test]
    fn test_vertex_indices_increase() {
        let mut polygon = Polygon::new(unit_square(), &PolygonConfig::default()).unwrap();
        polygon.generate_points().unwrap();

        let indices = polygon.indices_of_vertices();
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], 0);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_edge_colors_cycle() {
        let config = PolygonConfig {
            edge_colors: Some(vec![Color::RED, Color::BLUE]),
            ..PolygonConfig::default()
        };
        let mut polygon = Polygon::new(unit_square(), &config).unwrap();
        polygon.generate_points().unwrap();

        let indices = polygon.indices_of_vertices().to_vec();
        let colors = polygon.colors();
        let expected = [Color::RED, Color::BLUE, Color::RED, Color::BLUE];
        for (edge, &start) in indices.iter().enumerate() {
            let end = indices.get(edge + 1).copied().unwrap_or(colors.len());
            assert!(colors[start..end].iter().all(|c| *c == expected[edge]));
        }
    }

    #[test]
    fn test_uniform_color() {
        let mut polygon = Polygon::new(unit_square(), &PolygonConfig::default()).unwrap();
        polygon.generate_points().unwrap();
        assert!(polygon.colors().iter().all(|c| *c == Color::GREEN_D));
    }

    #[test]
    fn test_two_vertices() {
        // A 2-gon is the segment traced there and back
        let mut polygon = Polygon::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            &PolygonConfig::default(),
        )
        .unwrap();
        polygon.generate_points().unwrap();
        assert_eq!(polygon.point_count(), 400);
    }

    #[test]
    fn test_regenerate_is_stable() {
        let mut polygon = Polygon::new(unit_square(), &PolygonConfig::default()).unwrap();
        polygon.generate_points().unwrap();
        let first = polygon.points().to_vec();
        polygon.generate_points().unwrap();
        assert_eq!(polygon.points(), first.as_slice());
        assert_eq!(polygon.indices_of_vertices().len(), 4);
    }
}
