use crate::app_state::State;
use crate::config::Config;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

#[cfg(target_os = "macos")]
use winit::platform::macos::WindowAttributesExtMacOS;

struct App {
    state: Option<State>,
    config: Config,
}

impl App {
    fn create_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<State> {
        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        #[cfg(target_os = "macos")]
        {
            window_attributes = window_attributes
                .with_titlebar_transparent(true)
                .with_title_hidden(false)
                .with_fullsize_content_view(true);
        }

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        #[cfg(target_arch = "wasm32")]
        attach_canvas(&window)?;

        pollster::block_on(State::new(window, self.config.clone()))
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_canvas(window: &Window) -> anyhow::Result<()> {
    use anyhow::Context;
    use winit::platform::web::WindowExtWebSys;

    let canvas = window.canvas().context("window has no canvas")?;
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| {
            let dst = doc.get_element_by_id("wasm-example")?;
            dst.append_child(&web_sys::Element::from(canvas.clone())).ok()?;
            Some(())
        })
        .context("couldn't append canvas to document body")?;

    let style = canvas.style();
    for (property, value) in [("width", "100vw"), ("height", "100vh"), ("display", "block")] {
        style
            .set_property(property, value)
            .map_err(|err| anyhow::anyhow!("failed to style canvas: {:?}", err))?;
    }
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            match self.create_state(event_loop) {
                Ok(state) => {
                    log::info!("Window created");
                    self.state = Some(state);
                }
                Err(err) => {
                    log::error!("Failed to start: {:#}", err);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if window_id == state.window().id() {
                if !state.input(&event) {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    state: ElementState::Pressed,
                                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                                    ..
                                },
                            ..
                        } => event_loop.exit(),
                        WindowEvent::Resized(physical_size) => {
                            log::info!("WindowEvent::Resized: {}x{}", physical_size.width, physical_size.height);
                            state.resize(physical_size);
                        }
                        WindowEvent::ScaleFactorChanged { .. } => {
                            let size = state.window().inner_size();
                            state.resize(size);
                        }
                        WindowEvent::RedrawRequested => {
                            state.update();
                            match state.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    state.resize(state.size)
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    log::error!("Out of GPU memory, exiting");
                                    event_loop.exit()
                                }
                                Err(e) => log::warn!("Surface error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window().request_redraw();
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info)?;
        } else {
            env_logger::init();
        }
    }

    let config = Config::load()?;
    let event_loop = EventLoop::new()?;
    let mut app = App {
        state: None,
        config,
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}
