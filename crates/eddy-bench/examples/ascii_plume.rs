//! Headless plume demo.
//!
//! Demonstrates: build config → FluidSim → inject impulses → step → read
//! density → reset. Prints a coarse ASCII rendering every 40 steps.

use eddy_core::Impulse;
use eddy_engine::{FluidConfig, FluidSim, Stage};

const RAMP: &[u8] = b" .:-=+*#%@";

fn render(sim: &FluidSim, cols: usize) {
    let n = sim.grid().size();
    let cell = n / cols;
    let density = sim.density();
    for by in 0..cols / 2 {
        let line: String = (0..cols)
            .map(|bx| {
                let mut sum = 0.0f32;
                for j in by * 2 * cell..(by * 2 + 2) * cell {
                    for i in bx * cell..(bx + 1) * cell {
                        sum += density[j * n + i];
                    }
                }
                let mean = sum / (2 * cell * cell) as f32;
                let level = ((mean / 2.0).clamp(0.0, 1.0) * (RAMP.len() - 1) as f32) as usize;
                RAMP[level] as char
            })
            .collect();
        println!("  |{line}|");
    }
}

fn main() {
    println!("=== Eddy Plume Example ===\n");

    let mut sim = FluidSim::new(FluidConfig {
        max_dt: Some(0.05),
        check_finite: true,
        ..FluidConfig::default()
    })
    .unwrap();

    for step in 0..160 {
        // A source near the bottom pushing up and slightly right.
        let sway = (step as f32 * 0.05).sin();
        sim.apply(&[
            Impulse::Density {
                col: 64,
                row: 110,
                amount: 60.0,
            },
            Impulse::Velocity {
                col: 64,
                row: 110,
                dx: 2.0 * sway,
                dy: -6.0,
            },
        ]);
        let metrics = sim.step_with_defaults(0.016).unwrap();
        let project_us = metrics.stage_total_us(Stage::Project);
        let total_us = metrics.total_us;

        if (step + 1) % 40 == 0 {
            println!(
                "tick {:>3}: mass={:>9.2}, energy={:>8.5}, div={:.2e}, time={:>5}μs (project {:>5}μs)",
                sim.tick(),
                sim.total_density(),
                sim.kinetic_energy(),
                sim.max_divergence(),
                total_us,
                project_us,
            );
            render(&sim, 64);
            println!();
        }
    }

    println!("Resetting...");
    sim.init();
    println!("tick {} mass {}", sim.tick(), sim.total_density());
}
