// Scene domain — camera discovery and render primitives of the host engine.

pub mod backend;
pub mod dummy;
pub mod error;
pub mod types;
