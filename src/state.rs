use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};
use winit::keyboard::ModifiersState;

use crate::canvas::Uniforms;
use crate::geometry::Point;

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
}

pub struct Canvas {
    pub uniform: Uniforms,
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
}

pub struct GeometryBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
    /// Set when the element list changed since the buffers were built.
    pub dirty: bool,
}

pub struct InputState {
    /// Cursor in canvas (logical) pixels.
    pub mouse_pos: Point,
    pub modifiers: ModifiersState,
}
