use crate::vertex::Vertex;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoughOptions {
    pub roughness: f32,
    pub bowing: f32,
    pub stroke_width: f32,
    pub max_randomness_offset: f32,
    pub disable_multi_stroke: bool,
    pub seed: Option<u64>,
    pub preserve_vertices: bool,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            stroke_width: 1.0,
            max_randomness_offset: 2.0,
            disable_multi_stroke: false,
            seed: None,
            preserve_vertices: false,
        }
    }
}

/// Hand-drawn render primitive: the polylines that make up one shape, plus the
/// options they were generated with so the shape can be regenerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub options: RoughOptions,
    pub sets: Vec<Vec<[f32; 2]>>,
}

pub struct RoughGenerator {
    rng: StdRng,
}

impl RoughGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::seed_from_u64(42)
        };
        Self { rng }
    }

    /// Generator whose output only depends on the element it draws, so
    /// regenerating the same element gives the same strokes.
    pub fn for_element(id: usize, options: &RoughOptions) -> Self {
        let base = options.seed.unwrap_or(0x5eed);
        Self::new(Some(base ^ (id as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)))
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, options: &RoughOptions) -> Drawable {
        let mut sets = vec![self.rough_line([x1, y1], [x2, y2], options)];
        if !options.disable_multi_stroke {
            sets.push(self.rough_line([x1, y1], [x2, y2], options));
        }
        Drawable {
            options: options.clone(),
            sets,
        }
    }

    pub fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, options: &RoughOptions) -> Drawable {
        Drawable {
            options: options.clone(),
            sets: self.rough_rectangle([x, y], [width, height], options),
        }
    }

    fn random(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn offset(&mut self, min: f32, max: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        options.roughness * roughness_gain * ((self.random() * (max - min)) + min)
    }

    fn offset_opt(&mut self, x: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        self.offset(-x, x, options, roughness_gain)
    }

    pub fn rough_line(&mut self, start: [f32; 2], end: [f32; 2], options: &RoughOptions) -> Vec<[f32; 2]> {
        let length_sq = (start[0] - end[0]).powi(2) + (start[1] - end[1]).powi(2);
        let length = length_sq.sqrt();

        // Long lines wobble less, otherwise they look scribbled.
        let roughness_gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            (-0.0016668) * length + 1.233334
        };

        let mut offset = options.max_randomness_offset;
        if (offset * offset * 100.0) > length_sq {
            offset = length / 10.0;
        }

        let diverge_point = 0.2 + self.random() * 0.2;
        let mid_disp_x = options.bowing * options.max_randomness_offset * (end[1] - start[1]) / 200.0;
        let mid_disp_y = options.bowing * options.max_randomness_offset * (start[0] - end[0]) / 200.0;

        let mid_disp_x = mid_disp_x + self.offset_opt(mid_disp_x, options, roughness_gain);
        let mid_disp_y = mid_disp_y + self.offset_opt(mid_disp_y, options, roughness_gain);

        let jitter = |generator: &mut Self| {
            if options.preserve_vertices {
                0.0
            } else {
                generator.offset_opt(offset, options, roughness_gain)
            }
        };

        let first = [start[0] + jitter(self), start[1] + jitter(self)];

        let cp1 = [
            mid_disp_x + start[0] + (end[0] - start[0]) * diverge_point + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y + start[1] + (end[1] - start[1]) * diverge_point + self.offset_opt(offset, options, roughness_gain),
        ];
        let cp2 = [
            mid_disp_x + start[0] + 2.0 * (end[0] - start[0]) * diverge_point + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y + start[1] + 2.0 * (end[1] - start[1]) * diverge_point + self.offset_opt(offset, options, roughness_gain),
        ];

        let last = [end[0] + jitter(self), end[1] + jitter(self)];

        let mut points = vec![first];
        points.extend(bezier_curve(first, cp1, cp2, last, 10));
        points
    }

    pub fn rough_rectangle(&mut self, position: [f32; 2], size: [f32; 2], options: &RoughOptions) -> Vec<Vec<[f32; 2]>> {
        let corners = [
            position,
            [position[0] + size[0], position[1]],
            [position[0] + size[0], position[1] + size[1]],
            [position[0], position[1] + size[1]],
        ];

        let mut lines = Vec::new();

        for i in 0..4 {
            let start = corners[i];
            let end = corners[(i + 1) % 4];

            lines.push(self.rough_line(start, end, options));

            if !options.disable_multi_stroke {
                lines.push(self.rough_line(start, end, options));
            }
        }

        lines
    }
}

fn bezier_curve(p0: [f32; 2], p1: [f32; 2], p2: [f32; 2], p3: [f32; 2], segments: u32) -> Vec<[f32; 2]> {
    let mut points = Vec::with_capacity(segments as usize);

    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        let uuu = uu * u;
        let ttt = tt * t;

        let x = uuu * p0[0] + 3.0 * uu * t * p1[0] + 3.0 * u * tt * p2[0] + ttt * p3[0];
        let y = uuu * p0[1] + 3.0 * uu * t * p1[1] + 3.0 * u * tt * p2[1] + ttt * p3[1];

        points.push([x, y]);
    }

    points
}

/// Appends one quad per polyline segment, `width` thick, to the buffers.
pub fn points_to_vertices(
    points: &[[f32; 2]],
    color: [f32; 4],
    width: f32,
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
) {
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        let dx = p2[0] - p1[0];
        let dy = p2[1] - p1[1];
        let len = (dx * dx + dy * dy).sqrt();

        if len > 0.0 {
            let nx = -dy / len * width * 0.5;
            let ny = dx / len * width * 0.5;
            let base = vertices.len() as u32;

            vertices.extend_from_slice(&[
                Vertex { position: [p1[0] - nx, p1[1] - ny], color },
                Vertex { position: [p1[0] + nx, p1[1] + ny], color },
                Vertex { position: [p2[0] + nx, p2[1] + ny], color },
                Vertex { position: [p2[0] - nx, p2[1] - ny], color },
            ]);

            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_element_regenerates_identically() {
        let options = RoughOptions::default();
        let a = RoughGenerator::for_element(3, &options).line(0.0, 0.0, 50.0, 20.0, &options);
        let b = RoughGenerator::for_element(3, &options).line(0.0, 0.0, 50.0, 20.0, &options);
        assert_eq!(a, b);

        let other = RoughGenerator::for_element(4, &options).line(0.0, 0.0, 50.0, 20.0, &options);
        assert_ne!(a, other);
    }

    #[test]
    fn test_multi_stroke_doubles_sets() {
        let options = RoughOptions::default();
        let mut generator = RoughGenerator::new(None);
        assert_eq!(generator.line(0.0, 0.0, 10.0, 0.0, &options).sets.len(), 2);
        assert_eq!(generator.rectangle(0.0, 0.0, 10.0, 10.0, &options).sets.len(), 8);

        let single = RoughOptions {
            disable_multi_stroke: true,
            ..options
        };
        assert_eq!(generator.line(0.0, 0.0, 10.0, 0.0, &single).sets.len(), 1);
        assert_eq!(generator.rectangle(0.0, 0.0, 10.0, 10.0, &single).sets.len(), 4);
    }

    #[test]
    fn test_rough_line_stays_close_to_endpoints() {
        let options = RoughOptions::default();
        let mut generator = RoughGenerator::new(Some(7));
        let points = generator.rough_line([0.0, 0.0], [100.0, 0.0], &options);

        assert_eq!(points.len(), 11);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!(first[0].abs() <= 2.0 && first[1].abs() <= 2.0);
        assert!((last[0] - 100.0).abs() <= 2.0 && last[1].abs() <= 2.0);
    }

    #[test]
    fn test_preserve_vertices_pins_endpoints() {
        let options = RoughOptions {
            preserve_vertices: true,
            ..RoughOptions::default()
        };
        let mut generator = RoughGenerator::new(Some(1));
        let points = generator.rough_line([10.0, 10.0], [60.0, 30.0], &options);
        assert_eq!(points[0], [10.0, 10.0]);
        let last = points[points.len() - 1];
        assert!((last[0] - 60.0).abs() < 1e-4 && (last[1] - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_points_to_vertices_skips_zero_length_segments() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        points_to_vertices(
            &[[0.0, 0.0], [0.0, 0.0], [10.0, 0.0]],
            [0.0, 0.0, 0.0, 1.0],
            2.0,
            &mut vertices,
            &mut indices,
        );
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(vertices[0].position, [0.0, -1.0]);
    }
}
