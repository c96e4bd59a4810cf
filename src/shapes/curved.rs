//! Curved lines bowed through a control point

use std::f32::consts::FRAC_PI_3;

use nalgebra::{Point3, Vector3};

use super::error::{check_positive, ShapeError};
use super::line::{Endpoint, Line, LineConfig};
use super::traits::Shape;
use crate::cloud::PointCloud;
use crate::sampling::{arange, interpolate, rotate_vector};

/// A line bowed toward a control point
///
/// Each sample is `lerp(lerp(start, end, t), via, t * (1 - t))` for `t`
/// stepped by epsilon over `[0, 1)`. The pull toward `via` vanishes at
/// both ends, so points bunch up near the endpoints and thin out mid-curve.
#[derive(Clone, Debug)]
pub struct CurvedLine {
    line: Line,
    via: Point3<f32>,
}

impl CurvedLine {
    /// Create a curved line
    ///
    /// Without a control point the curve bows to the left of the
    /// start -> end direction: `via` is the start -> end vector rotated 60°
    /// about Z, offset from the start.
    pub fn new<'a>(
        start: impl Into<Endpoint<'a>>,
        end: impl Into<Endpoint<'a>>,
        via: Option<Endpoint<'a>>,
        config: &LineConfig,
    ) -> Self {
        let line = Line::new(start, end, config);
        let via = match via {
            Some(via) => via.anchor(),
            None => {
                let start_to_end = line.end() - line.start();
                line.start() + rotate_vector(&start_to_end, FRAC_PI_3, &Vector3::z_axis())
            }
        };
        Self { line, via }
    }

    /// The straight line between the endpoints
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// The control point
    pub fn via(&self) -> Point3<f32> {
        self.via
    }
}

impl Shape for CurvedLine {
    fn name(&self) -> &str {
        "CurvedLine"
    }

    fn cloud(&self) -> &PointCloud {
        self.line.cloud()
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        self.line.cloud_mut()
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        let start = self.line.start();
        let end = self.line.end();
        let via = self.via;

        let cloud = self.line.cloud_mut();
        check_positive("epsilon", cloud.epsilon())?;
        cloud.clear();

        let points: Vec<_> = arange(0.0, 1.0, cloud.epsilon())
            .map(|t| interpolate(&interpolate(&start, &end, t), &via, t * (1.0 - t)))
            .collect();
        cloud.append_points(points, None);

        log::debug!("Generated {} points for {}", self.point_count(), self.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Dot, DotConfig};

    fn pt(x: f32, y: f32) -> Point3<f32> {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn test_default_via() {
        let curve = CurvedLine::new(pt(0.0, 0.0), pt(1.0, 0.0), None, &LineConfig::default());
        let via = curve.via();
        assert!((via.x - 0.5).abs() < 0.0001);
        assert!((via.y - 3.0_f32.sqrt() / 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_curve_bows_toward_via() {
        let mut curve =
            CurvedLine::new(pt(0.0, 0.0), pt(1.0, 0.0), None, &LineConfig::default());
        curve.generate_points().unwrap();

        assert_eq!(curve.point_count(), 200);
        assert_eq!(curve.points().len(), curve.colors().len());
        assert_eq!(curve.points()[0], Point3::origin());

        // Peak pull is t(1 - t) = 1/4 at the middle
        let peak = curve.points().iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((peak - 3.0_f32.sqrt() / 8.0).abs() < 0.001);
    }

    #[test]
    fn test_via_at_endpoints() {
        for via in [pt(0.0, 0.0), pt(1.0, 1.0)] {
            let mut curve = CurvedLine::new(
                pt(0.0, 0.0),
                pt(1.0, 1.0),
                Some(via.into()),
                &LineConfig::default(),
            );
            curve.generate_points().unwrap();
            assert!(curve.point_count() > 0);
            assert!(curve.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn test_via_midpoint_is_straight() {
        let mut curve = CurvedLine::new(
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            Some(pt(1.0, 0.0).into()),
            &LineConfig::default(),
        );
        curve.generate_points().unwrap();
        assert!(curve.points().iter().all(|p| p.y.abs() < 0.0001));
    }

    #[test]
    fn test_via_shape_center() {
        let mut dot = Dot::new(Point3::new(0.5, 2.0, 0.0), &DotConfig::default());
        dot.generate_points().unwrap();

        let curve = CurvedLine::new(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            Some(Endpoint::Shape(&dot)),
            &LineConfig::default(),
        );
        assert!((curve.via().x - 0.5).abs() < 0.01);
        assert!((curve.via().y - 2.0).abs() < 0.01);
    }
}
