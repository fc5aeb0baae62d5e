use std::sync::OnceLock;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use ellipsoid::prelude::*;
use log::warn;

mod app;
pub use app::camera::Camera;
pub use app::scene::StarfieldScene;
pub use app::starfield;
pub use app::theme::{request_mode, HexColor, Palette, ThemeMode};
pub use app::{BackdropApp, Txts};

mod config;
pub use config::{command, BackdropConfig, CliArgs};

mod error;
pub use error::BackdropError;

mod logging;

static CONFIG: OnceLock<BackdropConfig> = OnceLock::new();

pub(crate) fn config() -> BackdropConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    logging::init(&config().log_level);
    ellipsoid::run::<Txts, BackdropApp>().await;
}

pub async fn run_with(config: BackdropConfig) {
    if CONFIG.set(config).is_err() {
        warn!("Backdrop already configured, keeping the first configuration");
    }
    run().await;
}

/// Theme hook for the host page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_theme_mode(mode: &str) {
    match ThemeMode::from_name(mode) {
        Ok(mode) => request_mode(mode),
        Err(err) => warn!("{}", err),
    }
}
