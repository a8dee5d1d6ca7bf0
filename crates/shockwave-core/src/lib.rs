pub mod compositor;
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod packer;
pub mod registry;
pub mod uniforms;

pub use compositor::*;
pub use config::*;
pub use constants::*;
pub use effect::*;
pub use error::ShockwaveError;
pub use packer::*;
pub use registry::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static SHOCKWAVE_WGSL: &str = include_str!("../shaders/shockwave.wgsl");
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
