//! wgpu side of the shockwave compositor.
//!
//! [`ShockwavePostProcessor`] is the piece a host embeds: trigger waves from
//! input handlers, call `on_update` once per frame, then `render` with the
//! previous pass bound as source. [`ShockwaveRenderer`] wires it to a demo
//! checkerboard scene.

pub mod helpers;
pub mod processor;
pub mod program;
pub mod quad;
pub mod renderer;
pub mod scene;
pub mod targets;

pub use processor::ShockwavePostProcessor;
pub use program::ShockwaveProgram;
pub use quad::{QuadVertex, FULLSCREEN_QUAD};
pub use renderer::ShockwaveRenderer;
pub use scene::ScenePass;
pub use targets::SceneTarget;
