use anyhow::Result;
use eframe::egui::{
    self, CentralPanel, ComboBox, Frame, Rect, Sense, TextureHandle, TextureOptions,
    TopBottomPanel, Ui, Vec2, load::SizedTexture,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::analysis::ZoneAnalyzer;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{MapPair, ZoneLabel};
use crate::ui::config::{UI_CONFIG, UI_TEXT, zones_title};
use crate::ui::grid_image::{
    ElevationPalette, colorbar_colors, elevation_image, fit_to_texture_side, zone_image,
};
use crate::ui::styles::MapUiExt;
use crate::ui::utils::{fit_grid_size, section_heading, setup_custom_visuals};

/// Viewer preferences that survive restarts. Analysis results are never stored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub palette: ElevationPalette,
    pub highlight_largest: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            palette: ElevationPalette::default(),
            highlight_largest: true,
        }
    }
}

#[derive(Default)]
struct MapTextures {
    elevation: Option<TextureHandle>,
    zones: Option<TextureHandle>,
    colorbar: Vec<egui::Color32>,
}

/// Side-by-side elevation / zone viewer.
pub struct FloodZonesApp {
    maps: MapPair,
    background: ZoneLabel,
    largest_zone: Option<ZoneLabel>,
    zone_count: usize,
    settings: ViewerSettings,
    textures: MapTextures,
    // Set whenever settings change; textures are rebuilt on the next frame
    textures_dirty: bool,
    last_error: Option<String>,
}

impl FloodZonesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, maps: MapPair) -> Self {
        let settings: ViewerSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored viewer settings: {:?}", settings);
        }

        Self::with_settings(maps, settings)
    }

    pub fn with_settings(maps: MapPair, settings: ViewerSettings) -> Self {
        let analyzer = ZoneAnalyzer::default();
        let largest_zone = analyzer.find_largest_zone(maps.zones());
        let zone_count = analyzer.zone_sizes(maps.zones()).len();
        match largest_zone {
            Some(label) => log::info!("Largest zone: {} ({} zones total)", label, zone_count),
            None => log::warn!("Zone grid has no zones; nothing will be highlighted"),
        }

        Self {
            maps,
            background: analyzer.background(),
            largest_zone,
            zone_count,
            settings,
            textures: MapTextures::default(),
            textures_dirty: true,
            last_error: None,
        }
    }

    pub fn largest_zone(&self) -> Option<ZoneLabel> {
        self.largest_zone
    }

    fn rebuild_textures(&mut self, ctx: &egui::Context) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_texture_rebuilds {
            log::info!("Rebuilding map textures ({:?})", self.settings);
        }

        // Grids larger than the GPU texture limit are shown downsampled
        let max_side = ctx.input(|i| i.max_texture_side);

        match self.build_elevation_texture(ctx, max_side) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::error!("Failed to render elevation map: {:#}", e);
                self.last_error = Some(format!("{:#}", e));
                self.textures.elevation = None;
            }
        }

        let highlight = self
            .largest_zone
            .filter(|_| self.settings.highlight_largest);
        let zone_img = fit_to_texture_side(
            zone_image(self.maps.zones(), highlight, self.background),
            max_side,
        );
        self.textures.zones = Some(ctx.load_texture("zone_map", zone_img, TextureOptions::NEAREST));

        self.textures_dirty = false;
    }

    fn build_elevation_texture(&mut self, ctx: &egui::Context, max_side: usize) -> Result<()> {
        let image = fit_to_texture_side(
            elevation_image(self.maps.elevation(), self.settings.palette)?,
            max_side,
        );
        self.textures.colorbar = colorbar_colors(self.settings.palette, PLOT_CONFIG.colorbar_steps)?;
        self.textures.elevation =
            Some(ctx.load_texture("elevation_map", image, TextureOptions::NEAREST));
        Ok(())
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        let frame = Frame::new().fill(UI_CONFIG.colors.top_panel);
        TopBottomPanel::top("controls").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                let before = self.settings.clone();

                ComboBox::from_label(UI_TEXT.palette_label)
                    .selected_text(self.settings.palette.to_string())
                    .show_ui(ui, |ui| {
                        for palette in ElevationPalette::iter() {
                            ui.selectable_value(
                                &mut self.settings.palette,
                                palette,
                                palette.to_string(),
                            );
                        }
                    });
                ui.checkbox(&mut self.settings.highlight_largest, UI_TEXT.highlight_label);

                if self.settings != before {
                    self.textures_dirty = true;
                }

                ui.separator();
                let (rows, cols) = self.maps.shape();
                ui.map_metric(
                    UI_TEXT.shape_label,
                    format!("{} x {}", rows, cols),
                    UI_CONFIG.colors.heading,
                );
                ui.map_metric(
                    UI_TEXT.zone_count_label,
                    self.zone_count,
                    UI_CONFIG.colors.heading,
                );
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.last_error {
                ui.load_error(err);
            }
            ui.columns(2, |columns| {
                self.render_elevation_column(&mut columns[0]);
                self.render_zone_column(&mut columns[1]);
            });
        });
    }

    fn render_elevation_column(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.elevation_title);
        let (lo, hi) = self.maps.elevation().min_max();
        ui.map_metric(
            UI_TEXT.elevation_range_label,
            format!("{} .. {}", lo, hi),
            UI_CONFIG.colors.subsection_heading,
        );

        let Some(texture) = &self.textures.elevation else {
            return;
        };
        let (rows, cols) = self.maps.shape();
        let reserved = PLOT_CONFIG.colorbar_width + UI_CONFIG.colorbar_gap;
        let available = ui.available_size() - Vec2::new(reserved, 0.0);
        let size = fit_grid_size(rows, cols, available);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = UI_CONFIG.colorbar_gap;
            ui.image(SizedTexture::new(texture.id(), size));
            paint_colorbar(ui, &self.textures.colorbar, size.y);
        });
    }

    fn render_zone_column(&self, ui: &mut Ui) {
        section_heading(ui, zones_title(self.largest_zone));
        ui.largest_zone_badge(self.largest_zone, self.settings.highlight_largest);
        if !self.settings.highlight_largest {
            ui.map_hint(UI_TEXT.highlight_off_label);
        }

        let Some(texture) = &self.textures.zones else {
            return;
        };
        let (rows, cols) = self.maps.shape();
        let size = fit_grid_size(rows, cols, ui.available_size());
        ui.image(SizedTexture::new(texture.id(), size));
    }
}

/// Vertical colour bar, lowest elevation at the bottom.
fn paint_colorbar(ui: &mut Ui, colors: &[egui::Color32], height: f32) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(PLOT_CONFIG.colorbar_width, height),
        Sense::hover(),
    );
    if colors.is_empty() {
        return;
    }
    let step = rect.height() / colors.len() as f32;
    for (i, &color) in colors.iter().enumerate() {
        let bottom = rect.bottom() - i as f32 * step;
        let band = Rect::from_min_max(
            egui::pos2(rect.left(), bottom - step),
            egui::pos2(rect.right(), bottom),
        );
        ui.painter().rect_filled(band, 0.0, color);
    }
}

impl eframe::App for FloodZonesApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.textures = MapTextures::default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Viewer shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_custom_visuals(ctx);

        self.render_top_panel(ctx);
        if self.textures_dirty {
            self.rebuild_textures(ctx);
        }
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Grid};

    fn sample_maps() -> MapPair {
        let zones = Grid::from_rows(&[[1, 1, -1], [2, 1, 3]]).unwrap();
        let elevation = Grid::from_rows(&[[10, 20, 30], [40, 50, 60]]).unwrap();
        MapPair::new(zones, elevation).unwrap()
    }

    #[test]
    fn test_app_selects_largest_zone_on_creation() {
        let app = FloodZonesApp::with_settings(sample_maps(), ViewerSettings::default());
        assert_eq!(app.largest_zone(), Some(1));
        assert_eq!(app.zone_count, 3);
        assert!(app.textures_dirty, "First frame must build textures");
    }

    #[test]
    fn test_wide_grid_textures_stay_within_limit() {
        let cells: Vec<Cell> = (0..20_000).map(|i| if i % 3 == 0 { -1 } else { i % 7 }).collect();
        let zones = Grid::from_row_major(1, 20_000, cells.clone()).unwrap();
        let elevation = Grid::from_row_major(1, 20_000, cells).unwrap();
        let mut app = FloodZonesApp::with_settings(
            MapPair::new(zones, elevation).unwrap(),
            ViewerSettings::default(),
        );

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.rebuild_textures(ctx));

        let max_side = ctx.input(|i| i.max_texture_side);
        for texture in [&app.textures.zones, &app.textures.elevation] {
            let size = texture.as_ref().expect("texture should be built").size();
            assert!(
                size[0] <= max_side && size[1] <= max_side,
                "Texture {:?} exceeds side limit {}",
                size,
                max_side
            );
        }
        assert!(app.last_error.is_none());
        assert!(!app.textures_dirty);
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: ViewerSettings = serde_json::from_str(r#"{"palette":"Grayscale"}"#).unwrap();
        assert_eq!(settings.palette, ElevationPalette::Grayscale);
        assert!(settings.highlight_largest);
    }
}
