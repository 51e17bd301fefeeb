//! WebGPU presentation layer
//!
//! Consumes `GameState` snapshots and produces frames. Nothing in here feeds
//! back into the simulation.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod starfield;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use starfield::Starfield;
pub use vertex::Vertex;
