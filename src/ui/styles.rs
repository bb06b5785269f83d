use eframe::egui::{Color32, RichText, Sense, Ui, Vec2};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::ZoneLabel;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Map-viewer widgets added to `egui::Ui`.
pub trait MapUiExt {
    /// "Label value" on one line, label dimmed, value in `value_color`.
    fn map_metric(&mut self, label: &str, value: impl ToString, value_color: Color32);

    /// Colour swatch and text naming the largest zone. The swatch matches the
    /// zone panel: red when highlighted, background grey otherwise.
    fn largest_zone_badge(&mut self, largest: Option<ZoneLabel>, highlighted: bool);

    fn map_hint(&mut self, text: &str);

    /// Texture or load failure shown above the maps.
    fn load_error(&mut self, message: &str);
}

impl MapUiExt for Ui {
    fn map_metric(&mut self, label: &str, value: impl ToString, value_color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(label).small().color(UI_CONFIG.colors.label));
            ui.label(
                RichText::new(value.to_string())
                    .small()
                    .monospace()
                    .color(value_color),
            );
        });
    }

    fn largest_zone_badge(&mut self, largest: Option<ZoneLabel>, highlighted: bool) {
        let swatch = if highlighted && largest.is_some() {
            PLOT_CONFIG.largest_zone_color
        } else {
            PLOT_CONFIG.background_cell_color
        };
        self.horizontal(|ui| {
            let side = UI_CONFIG.badge_swatch_size;
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, swatch);
            ui.label(RichText::new(badge_text(largest)).color(UI_CONFIG.colors.subsection_heading));
        });
    }

    fn map_hint(&mut self, text: &str) {
        self.label(RichText::new(text).small().italics().color(UI_CONFIG.colors.label));
    }

    fn load_error(&mut self, message: &str) {
        self.label(RichText::new(message).strong().color(UI_CONFIG.colors.error));
    }
}

/// Text next to the largest-zone swatch.
pub fn badge_text(largest: Option<ZoneLabel>) -> String {
    match largest {
        Some(label) => format!("{} {}", UI_TEXT.largest_zone_label, label),
        None => UI_TEXT.no_zones_label.to_string(),
    }
}
