pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod collision;
pub mod boundary;
pub mod step;
pub mod scenario;
pub mod controls;
pub mod goal;
