//! Rendering and export for swarm snapshots.
//!
//! Turns `SwarmSnapshot`s into raster images of the view volume, collects
//! them into animations, and formats plain-text state reports. Nothing here
//! touches the controller; it only reads snapshots.

pub mod error;
pub mod export;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod report;

pub use error::ExportError;
pub use export::AnimationExporter;
pub use renderer::{RenderConfig, Renderer};
