pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod logging;

pub use simulation::states::{Body, Target, Scene, DebrisId, NVec2};
pub use simulation::params::{Bounds, Parameters, ShipParams, DebrisParams, TargetParams};
pub use simulation::engine::Engine;
pub use simulation::integrator::symplectic_euler;
pub use simulation::collision::{resolve_pair, Contact};
pub use simulation::boundary::{wrap_debris, reset_ship};
pub use simulation::step::{perform_step, advance_frame, StepReport, FrameReport};
pub use simulation::scenario::{Scenario, spawn_debris};
pub use simulation::controls::{Key, Thrusters};
pub use simulation::goal::ship_has_landed;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, ShipConfig, DebrisConfig, TargetConfig, DegenerateContactConfig};

pub use visualization::view::{SceneView, BodyView};

pub use benchmark::benchmark::bench_step;

pub use logging::init_logging;
