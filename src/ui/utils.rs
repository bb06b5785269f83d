use eframe::egui::{Context, RichText, Ui, Vec2, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Largest size with the grid's aspect ratio (one square per cell) that fits `available`.
pub fn fit_grid_size(rows: usize, cols: usize, available: Vec2) -> Vec2 {
    if rows == 0 || cols == 0 {
        return Vec2::ZERO;
    }
    let scale = (available.x / cols as f32)
        .min(available.y / rows as f32)
        .max(0.0);
    Vec2::new(cols as f32 * scale, rows as f32 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_keeps_square_cells() {
        let size = fit_grid_size(2, 4, Vec2::new(400.0, 400.0));
        assert_eq!(size, Vec2::new(400.0, 200.0));

        let tall = fit_grid_size(10, 1, Vec2::new(400.0, 100.0));
        assert_eq!(tall, Vec2::new(10.0, 100.0));
    }

    #[test]
    fn test_fit_never_negative() {
        let size = fit_grid_size(3, 3, Vec2::new(-5.0, 90.0));
        assert_eq!(size, Vec2::ZERO);
    }
}
