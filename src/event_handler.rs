use crate::app_state::{State, canvas_size};
use crate::drawing::Tool;
use crate::geometry::Point;
use crate::interaction::{Action, command_for_key};

use winit::event::*;
use winit::keyboard::{Key, KeyCode, PhysicalKey};

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            self.canvas
                .uniform
                .update_projection(canvas_size(new_size, self.window.scale_factor()));
            self.gpu.queue.write_buffer(
                &self.canvas.uniform_buffer,
                0,
                bytemuck::cast_slice(&[self.canvas.uniform]),
            );
        }
    }

    /// Feeds a window event to the drawing surface. Returns true when the
    /// event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.input.modifiers = modifiers.state();
                false
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let changed = match state {
                    ElementState::Pressed => self.controller.pointer_down(self.input.mouse_pos),
                    ElementState::Released => self.controller.pointer_up(),
                };
                self.geometry.dirty |= changed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.window.scale_factor());
                self.input.mouse_pos = Point::new(logical.x, logical.y);

                if self.controller.action() == Action::Idle {
                    self.window
                        .set_cursor(self.controller.hover_cursor(self.input.mouse_pos));
                } else {
                    self.geometry.dirty |= self.controller.pointer_move(self.input.mouse_pos);
                }
                true
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state != ElementState::Pressed {
                    return false;
                }

                let is_ctrl_or_cmd =
                    self.input.modifiers.control_key() || self.input.modifiers.super_key();

                if let Key::Character(text) = &key_event.logical_key {
                    if let Some(command) =
                        command_for_key(text, is_ctrl_or_cmd, self.input.modifiers.shift_key())
                    {
                        self.geometry.dirty |= self.controller.execute(command);
                        return true;
                    }
                }

                let tool = match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Digit1) => Tool::Selection,
                    PhysicalKey::Code(KeyCode::Digit2) => Tool::Line,
                    PhysicalKey::Code(KeyCode::Digit3) => Tool::Rectangle,
                    PhysicalKey::Code(KeyCode::Digit4) => Tool::Pencil,
                    PhysicalKey::Code(KeyCode::Digit5) => Tool::Text,
                    _ => return false,
                };
                if is_ctrl_or_cmd {
                    return false;
                }
                self.controller.set_tool(tool);
                self.window
                    .set_cursor(self.controller.hover_cursor(self.input.mouse_pos));
                true
            }
            _ => false,
        }
    }
}
