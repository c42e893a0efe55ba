//! Application shell: one window, one map, one pinned overlay.

pub(crate) mod overlay;
pub(crate) mod settings;
pub(crate) mod sources;

use crate::app::overlay::ImageOverlay;
use crate::app::settings::Settings;
use eframe::egui;
use walkers::{HttpTiles, Map, MapMemory};

/// Map state built exactly once at startup.
///
/// The GTK original builds its UI on the "startup" signal and only shows the
/// window on "activate"; here the same guarantee is an explicit `built` flag
/// checked every frame.
pub struct ViewState {
    map_memory: MapMemory,
    overlay: Option<ImageOverlay>,
    built: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            map_memory: MapMemory::default(),
            overlay: None,
            built: false,
        }
    }
}

impl ViewState {
    /// Run the startup configuration sequence: attach the overlay, center the
    /// map on the home coordinate and set the initial zoom. Idempotent.
    pub fn ensure_built(&mut self, settings: &Settings, ctx: &egui::Context) {
        if self.built {
            return;
        }
        self.built = true;

        let home = settings.home();

        // A missing or broken overlay file downgrades to a map without the
        // pin rather than aborting the demo.
        match ImageOverlay::from_file(&settings.overlay, home, ctx) {
            Ok(overlay) => {
                tracing::info!(
                    path = %settings.overlay.display(),
                    size = ?overlay.size(),
                    "attached overlay image"
                );
                self.overlay = Some(overlay);
            }
            Err(e) => {
                tracing::warn!("continuing without overlay: {e}");
            }
        }

        self.map_memory.center_at(home);
        if let Err(e) = self.map_memory.set_zoom(settings.zoom as f64) {
            tracing::warn!("initial zoom {} rejected: {e:?}", settings.zoom);
        }
    }

    pub fn overlay(&self) -> Option<&ImageOverlay> {
        self.overlay.as_ref()
    }

    /// Current map center while the camera is detached from any position
    /// tracking, which `ensure_built` leaves it in.
    pub fn center(&self) -> Option<walkers::Position> {
        self.map_memory.detached()
    }

    pub fn zoom(&self) -> f64 {
        self.map_memory.zoom()
    }
}

/// Main application structure
pub struct MapnessDemoApp {
    settings: Settings,

    /// Map tiles provider
    tiles: HttpTiles,

    /// Camera position, zoom and the built-once overlay
    view: ViewState,
}

impl MapnessDemoApp {
    pub fn new(settings: Settings, cc: &eframe::CreationContext<'_>) -> Self {
        let tiles = settings.source.tiles(cc.egui_ctx.clone());

        Self {
            settings,
            tiles,
            view: ViewState::default(),
        }
    }
}

impl eframe::App for MapnessDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.ensure_built(&self.settings, ctx);

        let attribution_text = self.settings.source.attribution_text();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut map = Map::new(
                    Some(&mut self.tiles),
                    &mut self.view.map_memory,
                    self.settings.home(),
                );
                if let Some(overlay) = &self.view.overlay {
                    map = map.with_plugin(overlay.clone());
                }
                ui.add(map);

                let painter = ui.painter();
                let screen_rect = ui.max_rect();
                painter.text(
                    screen_rect.center_bottom() + egui::vec2(0.0, -5.0),
                    egui::Align2::CENTER_BOTTOM,
                    attribution_text,
                    egui::FontId::proportional(10.0),
                    egui::Color32::from_black_alpha(180),
                );
            });
    }
}
