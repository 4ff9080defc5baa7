use ufosim::{ScenarioConfig, Scenario, SceneView, Key};
use ufosim::{bench_step, init_logging};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the crate's `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Wall-clock seconds to simulate
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Frames per second of the driving clock
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Keys held down for the whole run
    #[arg(long, value_enum)]
    hold: Vec<Key>,

    /// Print the final scene as YAML
    #[arg(long)]
    dump: bool,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let src = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    ScenarioConfig::from_yaml(&src)
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    if args.bench {
        return bench_step();
    }

    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)?;

    for &key in &args.hold {
        scenario.press(key);
    }

    let frame_dt = args.fps.recip();
    let frames = (args.seconds * args.fps).round() as usize;
    let mut landed_at = None;
    let (mut contacts, mut resets) = (0, 0);

    for frame in 0..frames {
        let report = scenario.advance(frame_dt);
        contacts += report.contacts;
        resets += report.ship_resets;
        if report.landed && landed_at.is_none() {
            landed_at = Some(frame);
            info!(frame, t = scenario.scene.t, "landed on the target");
        }
    }

    info!(
        frames,
        t = scenario.scene.t,
        contacts,
        ship_resets = resets,
        landed = landed_at.is_some(),
        "run finished"
    );

    if args.dump {
        print!("{}", SceneView::capture(&scenario).to_yaml()?);
    }

    Ok(())
}
