//! Focus-through microscope viewer.
//!
//! Scroll the wheel to move the focal plane, ArrowUp/ArrowDown to change the
//! scroll step, Space to log the current depth, Escape to quit.

mod app;
mod config;
mod controls;

use winit::dpi::LogicalSize;

use microscope_engine::device::GpuInit;
use microscope_engine::logging::{init_logging, LoggingConfig};
use microscope_engine::window::{Runtime, RuntimeConfig};

use app::ViewerApp;
use config::ViewerConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::from_env();
    log::info!("asset directory: {}", config.asset_dir.display());

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.window_size.0, config.window_size.1),
        resizable: true,
    };

    // Slices and the clear colour are display values; blend them unconverted.
    let gpu = GpuInit { prefer_srgb: false, ..GpuInit::default() };

    if let Err(err) = Runtime::run(runtime, gpu, ViewerApp::new(config)) {
        log::error!("microscope viewer failed: {err:#}");
        std::process::exit(1);
    }
}
