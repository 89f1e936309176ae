//! Freehand stroke outlines.
//!
//! Turns the raw pointer samples of a pencil stroke into a filled shape whose
//! width follows a simulated pen pressure: fast movement thins the line, slow
//! movement thickens it. The outline is kept as two rails (left and right of
//! the centerline) so it can be filled as a triangle strip.

use serde::Deserialize;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::geometry::{Point, distance};

const RATE_OF_PRESSURE_CHANGE: f32 = 0.275;
const DEFAULT_PRESSURE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    /// Diameter at half pressure.
    pub size: f32,
    /// How much pressure changes the width, 0 to 1.
    pub thinning: f32,
    /// How strongly each sample is pulled towards the previous one, 0 to 1.
    pub streamline: f32,
    pub simulate_pressure: bool,
    /// Points per quarter circle in the round caps.
    pub cap_segments: u32,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: 8.0,
            thinning: 0.5,
            streamline: 0.5,
            simulate_pressure: true,
            cap_segments: 6,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

impl Outline {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

struct Sample {
    point: Point,
    pressure: f32,
    direction: Point,
}

fn stroke_radius(options: &StrokeOptions, pressure: f32) -> f32 {
    options.size * (0.5 - options.thinning * (0.5 - pressure))
}

fn samples(points: &[Point], options: &StrokeOptions) -> Vec<Sample> {
    let t = 0.15 + (1.0 - options.streamline.clamp(0.0, 1.0)) * 0.85;

    let mut smoothed = vec![points[0]];
    for &point in &points[1..] {
        let prev = smoothed[smoothed.len() - 1];
        let next = prev.lerp(point, t);
        if next != prev {
            smoothed.push(next);
        }
    }
    // Streamlining lags behind the pointer; the stroke still ends where it did.
    let last_input = points[points.len() - 1];
    if smoothed[smoothed.len() - 1] != last_input {
        smoothed.push(last_input);
    }

    let mut result: Vec<Sample> = Vec::with_capacity(smoothed.len());
    let mut pressure = DEFAULT_PRESSURE;
    for (i, &point) in smoothed.iter().enumerate() {
        if options.simulate_pressure && i > 0 {
            let travelled = distance(smoothed[i - 1], point);
            let speed = (travelled / options.size.max(f32::EPSILON)).min(1.0);
            let target = 1.0 - speed;
            pressure = (pressure + (target - pressure) * (speed * RATE_OF_PRESSURE_CHANGE)).min(1.0);
        }

        let direction = match smoothed.get(i + 1) {
            Some(&next) => (next - point).normalized(),
            None => result
                .last()
                .map(|sample| sample.direction)
                .unwrap_or_default(),
        };

        result.push(Sample {
            point,
            pressure,
            direction,
        });
    }

    result
}

fn dot(center: Point, radius: f32, segments: u32) -> Outline {
    let steps = (segments * 2).max(2);
    let mut outline = Outline::default();
    for k in 0..=steps {
        let theta = PI * (1.0 - k as f32 / steps as f32);
        let (sin, cos) = theta.sin_cos();
        outline.left.push(Point::new(center.x + radius * cos, center.y - radius * sin));
        outline.right.push(Point::new(center.x + radius * cos, center.y + radius * sin));
    }
    outline
}

/// Outline of the stroke through `points`. Empty input gives an empty outline
/// and a single point gives a round dot.
pub fn outline(points: &[Point], options: &StrokeOptions) -> Outline {
    if points.is_empty() {
        return Outline::default();
    }

    let samples = samples(points, options);
    if samples.len() == 1 {
        return dot(
            samples[0].point,
            stroke_radius(options, DEFAULT_PRESSURE),
            options.cap_segments,
        );
    }

    let caps = options.cap_segments;
    let mut outline = Outline::default();

    let first = &samples[0];
    let radius = stroke_radius(options, first.pressure);
    let normal = first.direction.perpendicular();
    for k in 0..caps {
        let phi = FRAC_PI_2 * (1.0 - k as f32 / caps as f32);
        let (sin, cos) = phi.sin_cos();
        let back = first.direction.scale(-radius * sin);
        outline.left.push(first.point + normal.scale(radius * cos) + back);
        outline.right.push(first.point + normal.scale(-radius * cos) + back);
    }

    for sample in &samples {
        let radius = stroke_radius(options, sample.pressure);
        let normal = sample.direction.perpendicular().scale(radius);
        outline.left.push(sample.point + normal);
        outline.right.push(sample.point - normal);
    }

    let last = &samples[samples.len() - 1];
    let radius = stroke_radius(options, last.pressure);
    let normal = last.direction.perpendicular();
    for k in 1..=caps {
        let phi = FRAC_PI_2 * (k as f32 / caps as f32);
        let (sin, cos) = phi.sin_cos();
        let ahead = last.direction.scale(radius * sin);
        outline.left.push(last.point + normal.scale(radius * cos) + ahead);
        outline.right.push(last.point + normal.scale(-radius * cos) + ahead);
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(n: usize) -> Vec<Point> {
        (0..n).map(|i| Point::new(i as f32 * 3.0, 0.0)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(outline(&[], &StrokeOptions::default()).is_empty());
    }

    #[test]
    fn test_single_point_is_a_dot() {
        let options = StrokeOptions::default();
        let center = Point::new(10.0, 20.0);
        let dot = outline(&[center], &options);

        assert!(!dot.is_empty());
        assert_eq!(dot.left.len(), dot.right.len());
        for &point in dot.left.iter().chain(&dot.right) {
            assert!((distance(point, center) - 4.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rails_match_and_include_caps() {
        let options = StrokeOptions {
            streamline: 0.0,
            ..StrokeOptions::default()
        };
        let points = horizontal(10);
        let shape = outline(&points, &options);

        assert_eq!(shape.left.len(), shape.right.len());
        assert_eq!(shape.left.len(), points.len() + 2 * options.cap_segments as usize);
    }

    #[test]
    fn test_left_rail_is_on_the_left() {
        let shape = outline(&horizontal(8), &StrokeOptions::default());
        assert!(shape.left.iter().all(|p| p.y >= -1e-4));
        assert!(shape.right.iter().all(|p| p.y <= 1e-4));
    }

    #[test]
    fn test_no_thinning_keeps_constant_width() {
        let options = StrokeOptions {
            thinning: 0.0,
            streamline: 0.0,
            ..StrokeOptions::default()
        };
        let points = horizontal(6);
        let shape = outline(&points, &options);
        let caps = options.cap_segments as usize;

        for i in caps..caps + points.len() {
            assert!((distance(shape.left[i], shape.right[i]) - options.size).abs() < 1e-4);
        }
    }

    #[test]
    fn test_fast_strokes_are_thinner() {
        let options = StrokeOptions {
            streamline: 0.0,
            ..StrokeOptions::default()
        };
        let slow: Vec<Point> = (0..20).map(|i| Point::new(i as f32, 0.0)).collect();
        let fast: Vec<Point> = (0..20).map(|i| Point::new(i as f32 * 20.0, 0.0)).collect();

        let mid = options.cap_segments as usize + 10;
        let slow_shape = outline(&slow, &options);
        let fast_shape = outline(&fast, &options);
        let slow_width = distance(slow_shape.left[mid], slow_shape.right[mid]);
        let fast_width = distance(fast_shape.left[mid], fast_shape.right[mid]);
        assert!(fast_width < slow_width);
    }

    #[test]
    fn test_stroke_ends_at_last_input() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)];
        let shape = outline(&points, &StrokeOptions::default());
        let caps = StrokeOptions::default().cap_segments as usize;
        let last_left = shape.left[shape.left.len() - caps - 1];
        let last_right = shape.right[shape.right.len() - caps - 1];
        let center = last_left.lerp(last_right, 0.5);
        assert!(distance(center, Point::new(20.0, 10.0)) < 1e-4);
    }
}
