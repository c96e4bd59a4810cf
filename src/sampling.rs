//! Sampler primitives
//!
//! Every shape is built from three walks over a 1D parameter range:
//! - `segment` steps `t` across `[0, 1)` between two endpoints
//! - `arc` steps an angle at constant arc length
//! - `disc` fills a disc with concentric rings whose point counts grow
//!   with their circumference
//!
//! All walks are half-open (the end of the range is not emitted), matching
//! how closed shapes stitch their pieces together without duplicate points.

use std::f32::consts::TAU;

use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// Default minimum density for segments (upper bound on the `t` step)
pub const DEFAULT_MIN_DENSITY: f32 = 0.1;

/// Slack applied when counting steps so that spans which are exact multiples
/// of the step don't pick up an extra sample from rounding error.
const STEP_TOLERANCE: f32 = 1e-4;

/// Number of values in the half-open walk `[0, span)` at `step`
///
/// Always at least 1 for a positive span. Returns 0 for empty spans and for
/// non-positive or non-finite steps, so callers can never loop forever.
pub fn step_count(span: f32, step: f32) -> usize {
    if !(span > 0.0) || !(step > 0.0) || !span.is_finite() || !step.is_finite() {
        return 0;
    }
    let n = (span / step - STEP_TOLERANCE).ceil();
    (n as usize).max(1)
}

/// Walk `start, start + step, ...` up to (not including) `stop`
///
/// `step` may be negative when `stop < start`. A step pointing away from
/// `stop` yields nothing.
pub fn arange(start: f32, stop: f32, step: f32) -> impl Iterator<Item = f32> {
    let span = stop - start;
    let n = if span * step > 0.0 {
        step_count(span.abs(), step.abs())
    } else {
        0
    };
    (0..n).map(move |i| start + i as f32 * step)
}

/// Linear interpolation between two points
pub fn interpolate(a: &Point3<f32>, b: &Point3<f32>, t: f32) -> Point3<f32> {
    a + (b - a) * t
}

/// Rotate a vector by `angle` radians about `axis`
pub fn rotate_vector(v: &Vector3<f32>, angle: f32, axis: &Unit<Vector3<f32>>) -> Vector3<f32> {
    Rotation3::from_axis_angle(axis, angle) * v
}

/// Sample the segment `p0 -> p1`
///
/// `epsilon` is the target arc-length spacing. It is converted into a step in
/// `t` by dividing by the segment length, then capped at `min_density` so
/// short segments still get at least `ceil(1 / min_density)` points.
///
/// A zero-length segment yields exactly `p0`.
pub fn segment(
    p0: &Point3<f32>,
    p1: &Point3<f32>,
    epsilon: f32,
    min_density: f32,
) -> Vec<Point3<f32>> {
    let length = (p1 - p0).norm();
    if length == 0.0 {
        return vec![*p0];
    }

    let mut step = epsilon / length;
    if min_density > 0.0 {
        step = step.min(min_density);
    }

    let mut points: Vec<Point3<f32>> = arange(0.0, 1.0, step)
        .map(|t| interpolate(p0, p1, t))
        .collect();
    if points.is_empty() {
        points.push(*p0);
    }
    points
}

/// Sample an arc of the circle of `radius` centered at the origin in the XY plane
///
/// Walks from `start_angle` to `start_angle + angle` (signed) with an angular
/// step of `epsilon / radius`, so the spacing along the arc is `epsilon` for
/// every radius.
pub fn arc(radius: f32, start_angle: f32, angle: f32, epsilon: f32) -> Vec<Point3<f32>> {
    let step = angle.signum() * epsilon / radius;
    arange(start_angle, start_angle + angle, step)
        .map(|theta| Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0))
        .collect()
}

/// One full ring of radius `t` at the given angular step
pub fn ring(t: f32, angular_step: f32) -> impl Iterator<Item = Point3<f32>> {
    arange(0.0, TAU, angular_step).map(move |theta| Point3::new(t * theta.cos(), t * theta.sin(), 0.0))
}

/// Fill a disc of `radius` centered at the origin with concentric rings
///
/// Rings sit at `epsilon, 2 * epsilon, ...` below `radius`. The angular step
/// on the ring at distance `t` is `TAU * epsilon * radius / t`, which keeps the
/// number of points on a ring proportional to its circumference.
pub fn disc(radius: f32, epsilon: f32) -> Vec<Point3<f32>> {
    arange(epsilon, radius, epsilon)
        .flat_map(|t| ring(t, TAU * epsilon * radius / t))
        .collect()
}
