//! Application systems
//!
//! The host loop is split into a simulation step and a render step so each
//! can be tested without the other.

mod render;
mod simulation;

pub use render::RenderSystem;
pub use simulation::SimulationSystem;
