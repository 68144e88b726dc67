//! wgpu rendering module
//!
//! The scene is tessellated on the CPU into flat-colour triangles in field
//! coordinates; the pipeline maps them to clip space and draws them.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::{CONTROLS_HELP, HudView, TextLine};
pub use pipeline::{RenderError, RenderState};
pub use scene::build_frame;
pub use vertex::Vertex;
