//! Map visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // Colour painted over every cell of the largest zone
    pub largest_zone_color: Color32,
    // Colour for background (unassigned) cells in the zone panel
    pub background_cell_color: Color32,
    // Categorical palette for zone labels, indexed by label rank modulo its length
    pub zone_palette: &'static [Color32],
    // Terrain gradient stops, low to high elevation
    pub terrain_gradient_colors: &'static [&'static str],
    // Position of each terrain stop in [0, 1]; must match `terrain_gradient_colors` in length
    pub terrain_gradient_stops: &'static [f32],
    pub grayscale_gradient_colors: &'static [&'static str],
    /// Normalized position used when every elevation cell holds the same value
    pub flat_elevation_position: f32,
    /// Width of the elevation colour bar in points
    pub colorbar_width: f32,
    /// Number of samples drawn along the colour bar
    pub colorbar_steps: usize,
    /// Initial window size (width, height)
    pub window_size: [f32; 2],
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    largest_zone_color: Color32::from_rgb(255, 0, 0), // Red
    background_cell_color: Color32::from_rgb(235, 235, 235),
    // Tableau "tab20"
    zone_palette: &[
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(174, 199, 232),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(255, 187, 120),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(152, 223, 138),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(255, 152, 150),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(197, 176, 213),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(196, 156, 148),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(247, 182, 210),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(199, 199, 199),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(219, 219, 141),
        Color32::from_rgb(23, 190, 207),
        Color32::from_rgb(158, 218, 229),
    ],
    // Deep water blue -> shallow -> lowland green -> sand -> rock brown -> snow
    terrain_gradient_colors: &[
        "#333399", "#0099ff", "#00cc66", "#ffff99", "#805c54", "#ffffff",
    ],
    terrain_gradient_stops: &[0.0, 0.15, 0.25, 0.5, 0.75, 1.0],
    grayscale_gradient_colors: &["#000000", "#ffffff"],
    flat_elevation_position: 0.5,
    colorbar_width: 18.0,
    colorbar_steps: 64,
    window_size: [1400.0, 600.0],
};
