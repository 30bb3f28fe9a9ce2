//! Output of simulation state
//!
//! Two consumers, two submodules:
//!
//! - [`grid_text`]: plain-text export of the whole grid, meant for diffing
//!   one solver's result against another's. Not a checkpoint format.
//! - [`heatmap`] (feature `visualization`): PNG rendering of one substrate
//!   slice for human inspection.

pub mod grid_text;

#[cfg(feature = "visualization")]
pub mod heatmap;

// Re-export commonly used items for convenience
pub use grid_text::{save_grid, write_grid, GridTextError};

#[cfg(feature = "visualization")]
pub use heatmap::{render_heatmap, HeatmapConfig};
