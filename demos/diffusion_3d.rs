//! Oxygen and glucose diffusing from a point source in a 3D tissue cube
//!
//! Builds a two-substrate problem, runs a few hundred implicit steps and
//! writes the final grid next to the working directory. Run with:
//!
//! ```text
//! cargo run --example diffusion_3d
//! ```

use diffuse_rs::physics::{Dimensionality, Problem, Seed, SubstrateSpec};
use diffuse_rs::solver::{DiffusionSolver, Tuning};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let n = 48;

    // Coefficients in micrometers and minutes, oxygen-like and
    // glucose-like orders of magnitude.
    let problem = Problem::new(
        Dimensionality::Three,
        (n, n, n),
        (20.0, 20.0, 20.0),
        0.01,
        vec![
            SubstrateSpec::new("oxygen", 100_000.0, 0.1, 38.0),
            SubstrateSpec::new("glucose", 60_000.0, 0.0, 5.5),
        ],
    )
    .with_seeds(vec![
        Seed {
            substrate: 0,
            x: n / 2,
            y: n / 2,
            z: n / 2,
            value: 70.0,
        },
        Seed {
            substrate: 1,
            x: n / 4,
            y: n / 2,
            z: n / 2,
            value: 20.0,
        },
    ]);

    let mut solver: DiffusionSolver<f64> = DiffusionSolver::prepare(problem)?;
    solver.tune(&Tuning { work_items: 4 });
    solver.initialize();

    let oxygen_before = solver.grid().total(0);
    for _ in 0..300 {
        solver.step();
    }

    println!("oxygen mass:  {:.3} -> {:.3}", oxygen_before, solver.grid().total(0));
    println!(
        "center cell:  oxygen {:.4}, glucose {:.4}",
        solver.access(0, n / 2, n / 2, n / 2),
        solver.access(1, n / 2, n / 2, n / 2),
    );

    solver.save("diffusion_3d.txt")?;
    println!("final grid written to diffusion_3d.txt");

    #[cfg(feature = "visualization")]
    {
        diffuse_rs::output::heatmap::render_heatmap(
            solver.grid(),
            0,
            n / 2,
            "diffusion_3d_oxygen.png",
            None,
        )?;
        println!("midplane heatmap written to diffusion_3d_oxygen.png");
    }

    Ok(())
}
