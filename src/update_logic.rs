use crate::app_state::State;
use crate::config::Config;
use crate::drawing::Element;
use crate::rough::points_to_vertices;
use crate::stroke::{Outline, outline};
use crate::vertex::Vertex;
use wgpu::util::DeviceExt;

impl State {
    pub fn update(&mut self) {
        if !self.geometry.dirty {
            return;
        }
        self.geometry.dirty = false;

        let (vertices, indices) = tessellate(self.controller.elements(), &self.config);

        if indices.is_empty() {
            self.geometry.vertex = None;
            self.geometry.index = None;
            self.geometry.count = 0;
            return;
        }

        self.geometry.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        self.geometry.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));

        self.geometry.count = indices.len() as u32;
    }
}

/// Triangles for every element, in collection order so later elements paint
/// over earlier ones.
pub fn tessellate(elements: &[Element], config: &Config) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let color = config.style.stroke_color;

    for element in elements {
        match element {
            Element::Line { rough, .. } | Element::Rectangle { rough, .. } => {
                for set in &rough.sets {
                    points_to_vertices(set, color, rough.options.stroke_width, &mut vertices, &mut indices);
                }
            }
            Element::Freehand { points, .. } => {
                fill_outline(&outline(points, &config.stroke), color, &mut vertices, &mut indices);
            }
        }
    }

    (vertices, indices)
}

/// Fills the band between the two rails, one quad per step along the stroke.
fn fill_outline(outline: &Outline, color: [f32; 4], vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>) {
    if outline.left.len() < 2 {
        return;
    }

    let base = vertices.len() as u32;
    for (left, right) in outline.left.iter().zip(&outline.right) {
        vertices.push(Vertex { position: (*left).into(), color });
        vertices.push(Vertex { position: (*right).into(), color });
    }

    for i in 0..outline.left.len() as u32 - 1 {
        let l0 = base + i * 2;
        let r0 = l0 + 1;
        let l1 = l0 + 2;
        let r1 = l0 + 3;
        indices.extend_from_slice(&[l0, r0, r1, l0, r1, l1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Tool, create_element};
    use crate::geometry::Point;

    #[test]
    fn test_empty_canvas_has_no_geometry() {
        let (vertices, indices) = tessellate(&[], &Config::default());
        assert!(vertices.is_empty());
        assert!(indices.is_empty());
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let config = Config::default();
        let elements = vec![
            create_element(0, 0.0, 0.0, 100.0, 50.0, Tool::Rectangle, &config.rough).unwrap(),
            create_element(1, 10.0, 10.0, 90.0, 90.0, Tool::Line, &config.rough).unwrap(),
            Element::Freehand {
                id: 2,
                points: vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
            },
        ];

        let (vertices, indices) = tessellate(&elements, &config);
        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        assert!(vertices.iter().all(|v| v.color == config.style.stroke_color));
    }

    #[test]
    fn test_single_point_stroke_is_painted() {
        let config = Config::default();
        let dot = create_element(0, 20.0, 20.0, 20.0, 20.0, Tool::Pencil, &config.rough).unwrap();
        let (vertices, indices) = tessellate(&[dot], &config);
        assert!(!vertices.is_empty());
        assert!(!indices.is_empty());
    }
}
