pub mod config;
pub mod drawing;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod normalize;
pub mod resize;
pub mod rough;
pub mod selection;
pub mod stroke;

mod app;
mod app_state;
mod canvas;
mod event_handler;
mod renderer;
mod state;
mod update_logic;
mod vertex;

pub use app::run;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn start() {
    if let Err(err) = run().await {
        log::error!("roughboard exited with error: {:#}", err);
    }
}
