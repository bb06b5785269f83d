use anyhow::{Result, anyhow};
use colorgrad::Gradient;
use eframe::egui::{Color32, ColorImage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::ZoneAnalyzer;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{Grid, ZoneLabel};

/// Colour ramps available for the elevation panel.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ElevationPalette {
    #[default]
    Terrain,
    Grayscale,
}

impl fmt::Display for ElevationPalette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElevationPalette::Terrain => write!(f, "Terrain"),
            ElevationPalette::Grayscale => write!(f, "Grayscale"),
        }
    }
}

impl ElevationPalette {
    pub fn gradient(&self) -> Result<colorgrad::LinearGradient> {
        let built = match self {
            ElevationPalette::Terrain => colorgrad::GradientBuilder::new()
                .html_colors(PLOT_CONFIG.terrain_gradient_colors)
                .domain(PLOT_CONFIG.terrain_gradient_stops)
                .build::<colorgrad::LinearGradient>(),
            ElevationPalette::Grayscale => colorgrad::GradientBuilder::new()
                .html_colors(PLOT_CONFIG.grayscale_gradient_colors)
                .build::<colorgrad::LinearGradient>(),
        };
        built.map_err(|e| anyhow!("Failed to create {} colour gradient: {}", self, e))
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn to_color_image(grid: &Grid, pixels: impl Iterator<Item = Color32>) -> ColorImage {
    let rgba: Vec<u8> = pixels.flat_map(|c| c.to_array()).collect();
    ColorImage::from_rgba_unmultiplied([grid.cols(), grid.rows()], &rgba)
}

/// Shrinks an image so neither side exceeds `max_side`.
/// Each output pixel takes the top-left cell of its square block (nearest neighbour).
pub fn fit_to_texture_side(image: ColorImage, max_side: usize) -> ColorImage {
    let [width, height] = image.size;
    let max_side = max_side.max(1);
    if width <= max_side && height <= max_side {
        return image;
    }
    let block = width.max(height).div_ceil(max_side);
    let (out_w, out_h) = (width.div_ceil(block), height.div_ceil(block));

    let mut rgba: Vec<u8> = Vec::with_capacity(out_w * out_h * 4);
    for y in 0..out_h {
        for x in 0..out_w {
            rgba.extend_from_slice(&image.pixels[y * block * width + x * block].to_array());
        }
    }
    ColorImage::from_rgba_unmultiplied([out_w, out_h], &rgba)
}

/// Paints each elevation cell from the palette, scaled between the grid's min and max.
pub fn elevation_image(elevation: &Grid, palette: ElevationPalette) -> Result<ColorImage> {
    let grad = palette.gradient()?;
    let (lo, hi) = elevation.min_max();
    // Float math so extreme i64 ranges cannot overflow
    let span = hi as f64 - lo as f64;

    let pixels = elevation.cells().iter().map(|&v| {
        let t = if span > 0.0 {
            ((v as f64 - lo as f64) / span) as f32
        } else {
            PLOT_CONFIG.flat_elevation_position
        };
        to_egui_color(grad.at(t))
    });
    Ok(to_color_image(elevation, pixels))
}

/// Colour bar samples from the lowest to the highest elevation.
pub fn colorbar_colors(palette: ElevationPalette, steps: usize) -> Result<Vec<Color32>> {
    let grad = palette.gradient()?;
    let last = steps.saturating_sub(1).max(1) as f32;
    Ok((0..steps)
        .map(|i| to_egui_color(grad.at(i as f32 / last)))
        .collect())
}

/// Paints zone cells with a categorical palette and the highlighted label in red.
///
/// Labels get palette slots by their rank among the grid's distinct labels, so
/// colours stay stable for a given grid whatever the label magnitudes are.
pub fn zone_image(zones: &Grid, highlight: Option<ZoneLabel>, background: ZoneLabel) -> ColorImage {
    let rank: BTreeMap<ZoneLabel, usize> = ZoneAnalyzer::new(background)
        .zone_sizes(zones)
        .keys()
        .enumerate()
        .map(|(i, &label)| (label, i))
        .collect();

    let palette = PLOT_CONFIG.zone_palette;
    let pixels = zones.cells().iter().map(|&label| {
        if label == background {
            PLOT_CONFIG.background_cell_color
        } else if Some(label) == highlight {
            PLOT_CONFIG.largest_zone_color
        } else {
            let slot = rank.get(&label).copied().unwrap_or(0);
            palette[slot % palette.len()]
        }
    });
    to_color_image(zones, pixels)
}
