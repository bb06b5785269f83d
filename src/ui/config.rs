use eframe::egui::Color32;

use crate::domain::ZoneLabel;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    // Gap between the map image and its colour bar
    pub colorbar_gap: f32,
    // Side of the square next to the largest-zone label
    pub badge_swatch_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 30),
        top_panel: Color32::from_rgb(25, 25, 25),
        error: Color32::from_rgb(255, 100, 100),
    },
    colorbar_gap: 6.0,
    badge_swatch_size: 12.0,
};

/// User-facing strings
pub struct UiText {
    pub window_title: &'static str,
    pub elevation_title: &'static str,
    pub zones_title_prefix: &'static str,
    pub palette_label: &'static str,
    pub highlight_label: &'static str,
    pub highlight_off_label: &'static str,
    pub shape_label: &'static str,
    pub zone_count_label: &'static str,
    pub elevation_range_label: &'static str,
    pub largest_zone_label: &'static str,
    pub no_zones_label: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Flood Zones - Elevation vs. Zones",
    elevation_title: "Elevation Map",
    zones_title_prefix: "Flood Zones (Red = Largest: ",
    palette_label: "Elevation palette",
    highlight_label: "Highlight largest zone",
    highlight_off_label: "Largest zone highlight is off",
    shape_label: "Grid",
    zone_count_label: "Zones",
    elevation_range_label: "Elevation",
    largest_zone_label: "Largest zone",
    no_zones_label: "No zones",
};

/// Zone panel title, e.g. "Flood Zones (Red = Largest: 4)".
pub fn zones_title(largest: Option<ZoneLabel>) -> String {
    match largest {
        Some(label) => format!("{}{})", UI_TEXT.zones_title_prefix, label),
        None => format!("{}None)", UI_TEXT.zones_title_prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones_title() {
        assert_eq!(zones_title(Some(4)), "Flood Zones (Red = Largest: 4)");
        assert_eq!(zones_title(None), "Flood Zones (Red = Largest: None)");
    }
}
