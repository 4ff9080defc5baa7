use std::time::Instant;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::scenario::Scenario;

/// Time `perform_step` over growing debris counts
///
/// The domain grows with the debris count so the field keeps roughly the
/// same density; only the O(N^2) pair sweep should show up in the numbers.
pub fn bench_step() -> anyhow::Result<()> {
    let ns = [20, 80, 320, 1280];
    let steps = 200; // sub-steps timed per debris count

    for n in ns {
        let scale = (n as f64 / 20.0).sqrt();

        let mut cfg = ScenarioConfig::default();
        cfg.debris.count = n;
        let b = &mut cfg.parameters.bounds;
        b.min_x *= scale;
        b.max_x *= scale;
        b.min_y *= scale;
        b.max_y *= scale;

        let mut scenario = Scenario::build_scenario(&cfg)?;

        // Warm up
        scenario.step();

        let mut contacts = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            contacts += scenario.step().contacts;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, per step = {:10.8} s, contacts = {contacts}", per_step);
    }
    Ok(())
}
