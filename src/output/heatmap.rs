//! Heatmap rendering of substrate slices
//!
//! Renders one z-slice of one substrate as a PNG heatmap, cold blue at the
//! slice minimum to warm red at the maximum. Meant for quick visual
//! inspection of a running simulation, not for quantitative readout; use
//! [`super::grid_text`] for that.
//!
//! # Example
//!
//! ```rust,ignore
//! use diffuse_rs::output::heatmap::{render_heatmap, HeatmapConfig};
//!
//! // Middle slice of the first substrate
//! render_heatmap(solver.grid(), 0, nz / 2, "oxygen.png", None)?;
//! ```

use std::error::Error;

use plotters::prelude::*;

use crate::physics::{Real, SubstrateGrid};

/// Configuration for the rendered image.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Image width in pixels (default: 800).
    pub width: u32,

    /// Image height in pixels (default: 600).
    pub height: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Render one z-slice of one substrate to a PNG file.
///
/// The colour scale is linear between the slice's own minimum and maximum;
/// a flat slice renders entirely in the cold colour.
///
/// # Errors
///
/// Fails on out-of-range `substrate`/`z` or on backend I/O errors.
pub fn render_heatmap<R: Real>(
    grid: &SubstrateGrid<R>,
    substrate: usize,
    z: usize,
    path: &str,
    config: Option<&HeatmapConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = HeatmapConfig::default();
    let config = config.unwrap_or(&default_config);

    if substrate >= grid.substrates_count() {
        return Err(format!(
            "substrate index {substrate} out of range (grid has {})",
            grid.substrates_count()
        )
        .into());
    }
    if z >= grid.nz() {
        return Err(format!("z slice {z} out of range (grid has {})", grid.nz()).into());
    }

    let (nx, ny) = (grid.nx(), grid.ny());

    // Value range of the slice
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for y in 0..ny {
        for x in 0..nx {
            let v = grid.get(substrate, x, y, z).into_f64();
            min = min.min(v);
            max = max.max(v);
        }
    }
    let span = if max > min { max - min } else { 1.0 };

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let cell_w = config.width as f64 / nx as f64;
    let cell_h = config.height as f64 / ny as f64;

    for y in 0..ny {
        for x in 0..nx {
            let v = grid.get(substrate, x, y, z).into_f64();
            let t = (v - min) / span;
            let color = RGBColor((255.0 * t) as u8, 48, (255.0 * (1.0 - t)) as u8);

            let x0 = (x as f64 * cell_w) as i32;
            let y0 = (y as f64 * cell_h) as i32;
            let x1 = ((x + 1) as f64 * cell_w) as i32;
            let y1 = ((y + 1) as f64 * cell_h) as i32;
            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], color.filled()))?;
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
