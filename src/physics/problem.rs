//! Problem description
//!
//! A [`Problem`] is the immutable input of a simulation: the grid geometry,
//! the time step, and one [`SubstrateSpec`] per chemical substrate. It is
//! plain data; the solver reads it but never writes it back.
//!
//! # Loading from JSON
//!
//! Problems derive `serde::Deserialize`, so they can be read from JSON
//! benchmark files:
//!
//! ```rust
//! use diffuse_rs::physics::Problem;
//!
//! let problem = Problem::from_json_str(r#"{
//!     "dims": 2,
//!     "nx": 32, "ny": 32,
//!     "dx": 20.0, "dy": 20.0,
//!     "dt": 0.01,
//!     "substrates": [
//!         { "name": "oxygen", "diffusion": 1000.0, "decay": 0.1, "initial": 38.0 }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(problem.cells(), 32 * 32);
//! ```
//!
//! Validation is deliberately separate from parsing: the solver façade
//! validates on `prepare`, so a hand-built or deserialized `Problem` is
//! checked exactly once, at the point it is installed.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

// =================================================================================================
// Dimensionality
// =================================================================================================

/// Number of active spatial axes of a problem.
///
/// Axes activate in x, y, z order: a 2D problem spans x and y, never x and z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Dimensionality {
    One,
    Two,
    Three,
}

impl Dimensionality {
    /// Number of active axes, as used in the reaction-term splitting.
    pub fn axes(self) -> usize {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensionality::One),
            2 => Ok(Dimensionality::Two),
            3 => Ok(Dimensionality::Three),
            other => Err(format!("dims must be 1, 2 or 3, got {other}")),
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

// =================================================================================================
// SubstrateSpec - physical parameters of one substrate
// =================================================================================================

/// Physical parameters of one chemical substrate.
///
/// Each substrate diffuses and decays independently; the coefficients are
/// constant over the whole grid.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstrateSpec {
    /// Human-readable name, used in logs and exports.
    pub name: String,

    /// Diffusion coefficient `D` (length squared per unit time, >= 0).
    pub diffusion: f64,

    /// First-order decay rate `lambda` (per unit time, >= 0).
    pub decay: f64,

    /// Uniform initial density written into every cell on `prepare`.
    #[serde(default)]
    pub initial: f64,
}

impl SubstrateSpec {
    /// Create a substrate description.
    pub fn new(name: impl Into<String>, diffusion: f64, decay: f64, initial: f64) -> Self {
        Self {
            name: name.into(),
            diffusion,
            decay,
            initial,
        }
    }
}

// =================================================================================================
// Seed - point overwrite on top of the uniform initial condition
// =================================================================================================

/// A single-cell density overwrite applied after the uniform fill.
///
/// Seeds are how localized initial conditions (an injection spot, a hot
/// cell) are expressed without the core knowing about profiles.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    /// Index of the substrate the seed applies to.
    pub substrate: usize,

    pub x: usize,
    #[serde(default)]
    pub y: usize,
    #[serde(default)]
    pub z: usize,

    /// Density value written into the cell.
    pub value: f64,
}

// =================================================================================================
// Problem
// =================================================================================================

/// Immutable description of a reaction-diffusion problem.
///
/// Extents of inactive axes are 1; cell sizes are per axis. The solver
/// treats all boundaries as zero-flux.
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub dims: Dimensionality,

    pub nx: usize,
    #[serde(default = "one")]
    pub ny: usize,
    #[serde(default = "one")]
    pub nz: usize,

    pub dx: f64,
    #[serde(default = "unit")]
    pub dy: f64,
    #[serde(default = "unit")]
    pub dz: f64,

    /// Time step, strictly positive.
    pub dt: f64,

    /// One entry per substrate, in storage order.
    pub substrates: Vec<SubstrateSpec>,

    /// Point overwrites applied on top of the uniform initial densities.
    #[serde(default)]
    pub seeds: Vec<Seed>,
}

fn one() -> usize {
    1
}

fn unit() -> f64 {
    1.0
}

impl Problem {
    /// Create a problem, forcing the extents of inactive axes to 1.
    pub fn new(
        dims: Dimensionality,
        (nx, ny, nz): (usize, usize, usize),
        (dx, dy, dz): (f64, f64, f64),
        dt: f64,
        substrates: Vec<SubstrateSpec>,
    ) -> Self {
        let ny = if dims.axes() >= 2 { ny } else { 1 };
        let nz = if dims.axes() >= 3 { nz } else { 1 };
        Self {
            dims,
            nx,
            ny,
            nz,
            dx,
            dy,
            dz,
            dt,
            substrates,
            seeds: Vec::new(),
        }
    }

    /// Attach initial-condition seeds.
    pub fn with_seeds(mut self, seeds: Vec<Seed>) -> Self {
        self.seeds = seeds;
        self
    }

    /// Parse a problem from a JSON string. Parsing does not validate;
    /// validation happens when the problem is installed into a solver.
    pub fn from_json_str(json: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a problem from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of substrates.
    pub fn substrates_count(&self) -> usize {
        self.substrates.len()
    }

    /// Number of grid cells (per substrate).
    pub fn cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Extent along an active axis, by index 0..dims.
    pub fn extent(&self, axis: usize) -> usize {
        match axis {
            0 => self.nx,
            1 => self.ny,
            _ => self.nz,
        }
    }

    /// Cell size along an active axis, by index 0..dims.
    pub fn spacing(&self, axis: usize) -> f64 {
        match axis {
            0 => self.dx,
            1 => self.dy,
            _ => self.dz,
        }
    }

    /// Check the problem is well-formed.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: active extents below 3,
    /// inactive extents other than 1, non-positive cell sizes or time step,
    /// negative coefficients, an empty substrate list, or a seed outside
    /// the grid.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let axes = self.dims.axes();

        for (axis, name) in ['x', 'y', 'z'].into_iter().enumerate().take(axes) {
            let n = self.extent(axis);
            if n < 3 {
                return Err(ProblemError::Extent { axis: name, n });
            }
            let h = self.spacing(axis);
            if !(h > 0.0) {
                return Err(ProblemError::Spacing {
                    axis: name,
                    value: h,
                });
            }
        }
        if axes < 2 && self.ny != 1 {
            return Err(ProblemError::InactiveAxis {
                axis: 'y',
                n: self.ny,
            });
        }
        if axes < 3 && self.nz != 1 {
            return Err(ProblemError::InactiveAxis {
                axis: 'z',
                n: self.nz,
            });
        }

        if !(self.dt > 0.0) {
            return Err(ProblemError::TimeStep { value: self.dt });
        }

        if self.substrates.is_empty() {
            return Err(ProblemError::NoSubstrates);
        }
        for spec in &self.substrates {
            if spec.diffusion < 0.0 {
                return Err(ProblemError::NegativeCoefficient {
                    substrate: spec.name.clone(),
                    kind: "diffusion",
                    value: spec.diffusion,
                });
            }
            if spec.decay < 0.0 {
                return Err(ProblemError::NegativeCoefficient {
                    substrate: spec.name.clone(),
                    kind: "decay",
                    value: spec.decay,
                });
            }
        }

        for (index, seed) in self.seeds.iter().enumerate() {
            let inside = seed.substrate < self.substrates.len()
                && seed.x < self.nx
                && seed.y < self.ny
                && seed.z < self.nz;
            if !inside {
                return Err(ProblemError::SeedOutOfBounds { index });
            }
        }

        Ok(())
    }
}

// =================================================================================================
// ProblemError
// =================================================================================================

/// Possible errors when building or installing a problem.
///
/// The variants distinguish failure causes so a caller can react precisely
/// (fix the geometry on `Extent`, the coefficients on `NegativeCoefficient`,
/// the file on `Io`/`Json`).
#[derive(Debug)]
pub enum ProblemError {
    /// An active axis spans fewer than 3 cells.
    Extent { axis: char, n: usize },

    /// An inactive axis was given an extent other than 1.
    InactiveAxis { axis: char, n: usize },

    /// A cell size is zero, negative or NaN.
    Spacing { axis: char, value: f64 },

    /// The time step is zero, negative or NaN.
    TimeStep { value: f64 },

    /// The substrate list is empty.
    NoSubstrates,

    /// A diffusion or decay coefficient is negative.
    NegativeCoefficient {
        substrate: String,
        kind: &'static str,
        value: f64,
    },

    /// A seed addresses a cell or substrate outside the grid.
    SeedOutOfBounds { index: usize },

    /// The problem file could not be read.
    Io(std::io::Error),

    /// The problem file is not valid JSON for this schema.
    Json(serde_json::Error),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::Extent { axis, n } => {
                write!(f, "axis {axis} spans {n} cells, at least 3 are required")
            }
            ProblemError::InactiveAxis { axis, n } => {
                write!(f, "axis {axis} is inactive but spans {n} cells instead of 1")
            }
            ProblemError::Spacing { axis, value } => {
                write!(f, "cell size along {axis} must be positive, got {value}")
            }
            ProblemError::TimeStep { value } => {
                write!(f, "time step must be positive, got {value}")
            }
            ProblemError::NoSubstrates => write!(f, "problem declares no substrates"),
            ProblemError::NegativeCoefficient {
                substrate,
                kind,
                value,
            } => {
                write!(f, "substrate '{substrate}' has negative {kind} {value}")
            }
            ProblemError::SeedOutOfBounds { index } => {
                write!(f, "seed #{index} lies outside the grid")
            }
            ProblemError::Io(e) => write!(f, "problem I/O error: {e}"),
            ProblemError::Json(e) => write!(f, "problem JSON error: {e}"),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::Io(e) => Some(e),
            ProblemError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProblemError {
    fn from(e: std::io::Error) -> Self {
        ProblemError::Io(e)
    }
}

impl From<serde_json::Error> for ProblemError {
    fn from(e: serde_json::Error) -> Self {
        ProblemError::Json(e)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
