use glam::{Mat4, Vec3};
use log::warn;

use crate::traits::{ShaderSink, PROJECTION_NAME, VIEW_NAME, VIEW_POSITION_NAME};

/// Per-frame camera uniform block, laid out for a std140 uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad: f32,
}

impl ViewUniform {
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }

    pub fn view_position(&self) -> Vec3 {
        Vec3::from_array(self.view_position)
    }
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderSink for ViewUniform {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        match name {
            VIEW_NAME => self.view = value.to_cols_array_2d(),
            PROJECTION_NAME => self.projection = value.to_cols_array_2d(),
            _ => warn!("view uniform has no matrix named {name:?}"),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        match name {
            VIEW_POSITION_NAME => self.view_position = value.to_array(),
            _ => warn!("view uniform has no vector named {name:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_size_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<ViewUniform>(), 144);
        assert_eq!(bytemuck::bytes_of(&ViewUniform::new()).len(), 144);
    }

    #[test]
    fn named_uniforms_land_in_their_slots() {
        let mut uniform = ViewUniform::new();
        let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let projection = Mat4::from_scale(Vec3::splat(2.0));

        uniform.set_mat4(VIEW_NAME, view);
        uniform.set_mat4(PROJECTION_NAME, projection);
        uniform.set_vec3(VIEW_POSITION_NAME, Vec3::new(4.0, 5.0, 6.0));

        assert_eq!(uniform.view(), view);
        assert_eq!(uniform.projection(), projection);
        assert_eq!(uniform.view_position(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut uniform = ViewUniform::new();
        uniform.set_mat4("model", Mat4::ZERO);
        uniform.set_vec3("lightPosition", Vec3::ONE);
        assert_eq!(uniform, ViewUniform::new());
    }
}
