pub mod error;
pub mod states;
pub mod params;
pub mod boundary;
pub mod integrator;
pub mod trajectory;
pub mod engine;
pub mod scenario;
pub mod frame;
pub mod sweep;
