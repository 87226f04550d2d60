use std::path::{Path, PathBuf};

use microscope_engine::paint::Color;
use microscope_focus::FocusBounds;

use crate::controls::DEFAULT_PIXELS_PER_NOTCH;

/// Environment variable that overrides the asset directory.
pub const ASSETS_ENV: &str = "MICROSCOPE_ASSETS";

const DEFAULT_ASSET_DIR: &str = "assets";

/// Slice images in the demo stack, shallow to deep.
const DEMO_SLICE_COUNT: usize = 21;

/// One specimen in the scene. Slice names are relative to the asset dir.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenConfig {
    pub center: [f32; 2],
    pub depth_top: f32,
    pub depth_height: f32,
    pub radius: f32,
    pub slices: Vec<String>,
}

impl SpecimenConfig {
    pub fn new(center: [f32; 2], depth_top: f32, depth_height: f32, radius: f32) -> Self {
        Self { center, depth_top, depth_height, radius, slices: demo_slices() }
    }
}

/// Startup configuration for the viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    /// Logical window size.
    pub window_size: (f64, f64),
    pub clear_color: Color,

    pub focus: FocusBounds,
    pub initial_depth: f32,
    pub initial_step: f32,
    /// Touchpad travel per scroll notch.
    pub pixels_per_notch: f32,

    pub asset_dir: PathBuf,
    /// Drawn in order; later specimens composite over earlier ones.
    pub specimens: Vec<SpecimenConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Microscope".to_string(),
            window_size: (512.0, 512.0),
            clear_color: Color::rgb(0.41, 0.40, 0.45),
            focus: FocusBounds::default(),
            initial_depth: 150.0,
            initial_step: 1.0,
            pixels_per_notch: DEFAULT_PIXELS_PER_NOTCH,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            specimens: vec![
                SpecimenConfig::new([0.5, 0.5], 150.0, 50.0, 0.3),
                SpecimenConfig::new([-0.5, -0.5], 175.0, 50.0, 0.3),
                SpecimenConfig::new([0.0, 0.5], 136.0, 50.0, 0.1),
                SpecimenConfig::new([-0.75, 0.5], 165.0, 50.0, 0.3),
            ],
        }
    }
}

impl ViewerConfig {
    /// Default scene with the asset directory taken from the first argument,
    /// then [`ASSETS_ENV`], then `./assets`.
    pub fn from_env() -> Self {
        let arg = std::env::args_os().nth(1).map(PathBuf::from);
        let env = std::env::var_os(ASSETS_ENV).map(PathBuf::from);
        Self { asset_dir: resolve_asset_dir(arg, env), ..Self::default() }
    }

    /// Full paths of a specimen's slices.
    pub fn slice_paths(&self, specimen: &SpecimenConfig) -> Vec<PathBuf> {
        specimen.slices.iter().map(|name| self.asset_dir.join(name)).collect()
    }
}

fn resolve_asset_dir(arg: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    arg.into_iter()
        .chain(env)
        .find(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new(DEFAULT_ASSET_DIR).to_path_buf())
}

fn demo_slices() -> Vec<String> {
    (1..=DEMO_SLICE_COUNT).map(|n| format!("n{n}.png")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_demo() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.window_size, (512.0, 512.0));
        assert_eq!(cfg.initial_depth, 150.0);
        assert_eq!(cfg.initial_step, 1.0);
        assert_eq!(cfg.focus, FocusBounds::default());
        assert_eq!(cfg.specimens.len(), 4);

        let first = &cfg.specimens[0];
        assert_eq!(first.center, [0.5, 0.5]);
        assert_eq!(first.depth_top, 150.0);
        assert_eq!(first.depth_height, 50.0);
        assert_eq!(first.radius, 0.3);
        assert_eq!(cfg.specimens[2].radius, 0.1);
    }

    #[test]
    fn demo_stack_is_n1_to_n21() {
        let slices = demo_slices();
        assert_eq!(slices.len(), 21);
        assert_eq!(slices[0], "n1.png");
        assert_eq!(slices[20], "n21.png");
    }

    #[test]
    fn slice_paths_are_joined_to_asset_dir() {
        let cfg = ViewerConfig { asset_dir: PathBuf::from("/data/algae"), ..ViewerConfig::default() };
        let paths = cfg.slice_paths(&cfg.specimens[1]);
        assert_eq!(paths[4], PathBuf::from("/data/algae/n5.png"));
    }

    #[test]
    fn argument_beats_env_beats_default() {
        let arg = Some(PathBuf::from("from-arg"));
        let env = Some(PathBuf::from("from-env"));

        assert_eq!(resolve_asset_dir(arg.clone(), env.clone()), PathBuf::from("from-arg"));
        assert_eq!(resolve_asset_dir(None, env), PathBuf::from("from-env"));
        assert_eq!(resolve_asset_dir(None, None), PathBuf::from("assets"));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let empty = Some(PathBuf::new());
        assert_eq!(resolve_asset_dir(empty.clone(), Some(PathBuf::from("env"))), PathBuf::from("env"));
        assert_eq!(resolve_asset_dir(empty.clone(), empty), PathBuf::from("assets"));
    }
}
