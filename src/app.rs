use crate::config::PaintConfig;
use crate::panels::{central_panel, text_prompt_window, tools_panel};
use crate::scene::Scene;
use crate::state::Project;
use crate::surface::CanvasSurface;

/// Config file looked up in the working directory at start-up
pub const CONFIG_FILE: &str = "paint_config.json";

/// The egui host around a [`Scene`] drawn on a [`CanvasSurface`]
pub struct PaintApp {
    pub(crate) scene: Scene<CanvasSurface>,
    pub(crate) project: Project,
    /// Edit buffer of the open text prompt
    pub(crate) prompt_buffer: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(PaintConfig::load_or_default(CONFIG_FILE))
    }

    /// Open the configured project, or start an empty drawing
    pub fn with_config(config: PaintConfig) -> Self {
        let project = Project::from_config(&config);
        let surface = CanvasSurface::new(config.canvas_color.clone());
        let scene = match project.open() {
            Ok(Some(saved)) => Scene::from_saved(&saved, surface, config),
            Ok(None) => Scene::new(surface, config),
            Err(err) => {
                log::error!("Could not open {}: {err}", project.path().display());
                Scene::new(surface, config)
            }
        };
        Self {
            scene,
            project,
            prompt_buffer: None,
        }
    }

    pub fn scene(&self) -> &Scene<CanvasSurface> {
        &self.scene
    }

    pub fn save_project(&mut self) {
        self.scene.finish_gesture();
        if let Err(err) = self.project.save(&self.scene.save()) {
            log::error!("Could not save {}: {err}", self.project.path().display());
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_project();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        text_prompt_window(self, ctx);
    }
}
