use anyhow::Context;

use microscope_engine::core::{App, AppControl, FrameCtx};
use microscope_engine::input::InputEvent;
use microscope_engine::render::specimen::SpecimenRenderer;
use microscope_engine::render::RenderCtx;
use microscope_engine::texture::{TextureId, TextureStore};
use microscope_focus::{plan_draws_into, DrawCall, FocusChange, FocusCommand, FocusState, Specimen};

use crate::config::ViewerConfig;
use crate::controls::Controls;

/// GPU-side scene, built once the device exists.
struct Scene {
    textures: TextureStore,
    specimens: Vec<Specimen<TextureId>>,
    renderer: SpecimenRenderer,
}

pub struct ViewerApp {
    config: ViewerConfig,
    focus: FocusState,
    controls: Controls,
    scene: Option<Scene>,
    /// Reused per-frame buffers.
    commands: Vec<FocusCommand>,
    calls: Vec<DrawCall<TextureId>>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        let focus = FocusState::new(config.focus, config.initial_depth, config.initial_step);
        let controls = Controls::new(config.pixels_per_notch);
        Self {
            config,
            focus,
            controls,
            scene: None,
            commands: Vec::new(),
            calls: Vec::new(),
        }
    }

    fn title(&self) -> String {
        format!(
            "{} | depth {} | step {}",
            self.config.title,
            self.focus.depth(),
            self.focus.step()
        )
    }

    /// Applies this frame's commands. Returns `None` on quit, otherwise
    /// whether the title needs refreshing.
    fn apply_input(&mut self, events: &[InputEvent]) -> Option<bool> {
        let mut changed = false;

        self.commands.clear();
        self.controls.commands(events, &mut self.commands);

        for &cmd in &self.commands {
            match self.focus.apply(cmd) {
                FocusChange::Quit => {
                    log::info!("quit requested");
                    return None;
                }
                FocusChange::Depth { depth, clamped } => {
                    if clamped {
                        log::debug!("depth clamped to {depth}");
                    } else {
                        log::debug!("depth {depth}");
                    }
                    changed = true;
                }
                FocusChange::Step { step, clamped } => {
                    if clamped {
                        log::debug!("step clamped to {step}");
                    }
                    log::info!("current scroll speed: {step}");
                    changed = true;
                }
                FocusChange::Report { depth } => log::info!("current depth: {depth}"),
            }
        }

        Some(changed)
    }
}

impl App for ViewerApp {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> anyhow::Result<()> {
        let mut textures = TextureStore::new(ctx.device);
        let mut specimens = Vec::with_capacity(self.config.specimens.len());

        for (i, sc) in self.config.specimens.iter().enumerate() {
            let paths = self.config.slice_paths(sc);
            let ids = textures
                .load_all(ctx.device, ctx.queue, &paths)
                .with_context(|| format!("loading slices for specimen {i}"))?;

            let specimen = Specimen::new(sc.center, sc.depth_top, sc.depth_height, sc.radius, ids)
                .with_context(|| format!("invalid specimen {i}"))?;
            specimens.push(specimen);
        }

        let renderer = SpecimenRenderer::new(ctx, &textures, &specimens)
            .context("building specimen renderer")?;

        log::info!(
            "scene ready: {} specimens, {} slice textures from {}",
            specimens.len(),
            textures.len(),
            self.config.asset_dir.display()
        );
        log::info!(
            "depth {} in [{}, {}], step {}",
            self.focus.depth(),
            self.focus.bounds().depth_min,
            self.focus.bounds().depth_max,
            self.focus.step()
        );

        self.scene = Some(Scene { textures, specimens, renderer });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(changed) = self.apply_input(&ctx.input_frame.events) else {
            return AppControl::Exit;
        };
        if changed || ctx.frame_index == 0 {
            ctx.runtime.set_title(self.title());
        }

        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        let depth = self.focus.depth();
        plan_draws_into(&scene.specimens, depth, &mut self.calls);
        if log::log_enabled!(log::Level::Trace) {
            let visible = scene
                .specimens
                .iter()
                .filter(|s| !s.blend_at(depth).is_invisible())
                .count();
            log::trace!(
                "frame {}: {} draw calls, {visible} specimens visible at depth {depth}",
                ctx.frame_index,
                self.calls.len()
            );
        }

        let calls = &self.calls;
        ctx.render(self.config.clear_color, |rctx, target| {
            scene.renderer.render(rctx, target, calls, &scene.textures);
        })
    }
}
