#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    transform: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new(canvas_size: (f32, f32)) -> Self {
        let mut uniforms = Self {
            transform: [[0.0; 4]; 4],
        };
        uniforms.update_projection(canvas_size);
        uniforms
    }

    /// Maps canvas pixels (origin top-left, y down) onto clip space.
    pub fn update_projection(&mut self, canvas_size: (f32, f32)) {
        self.transform = ortho(0.0, canvas_size.0, canvas_size.1, 0.0, -1.0, 1.0);
    }
}

/// Column-major orthographic projection.
fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    [
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -2.0 / d, 0.0],
        [-(right + left) / w, -(top + bottom) / h, -(far + near) / d, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(m: &[[f32; 4]; 4], x: f32, y: f32) -> (f32, f32) {
        (
            m[0][0] * x + m[1][0] * y + m[3][0],
            m[0][1] * x + m[1][1] * y + m[3][1],
        )
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let uniforms = Uniforms::new((800.0, 600.0));
        let m = &uniforms.transform;

        let (x, y) = project(m, 0.0, 0.0);
        assert!((x + 1.0).abs() < 1e-6 && (y - 1.0).abs() < 1e-6);

        let (x, y) = project(m, 800.0, 600.0);
        assert!((x - 1.0).abs() < 1e-6 && (y + 1.0).abs() < 1e-6);

        let (x, y) = project(m, 400.0, 300.0);
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    }
}
