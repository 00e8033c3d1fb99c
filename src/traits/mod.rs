pub mod renderer;
pub mod scene;

pub use renderer::*;
pub use scene::*;
