use glam::{Mat4, Vec3};

pub const VIEW_NAME: &str = "view";
pub const PROJECTION_NAME: &str = "projection";
pub const VIEW_POSITION_NAME: &str = "viewPosition";

/// Render/shader collaborator - receives named uniforms once per frame
pub trait ShaderSink {
    fn set_mat4(&mut self, name: &str, value: Mat4);

    fn set_vec3(&mut self, name: &str, value: Vec3);
}
