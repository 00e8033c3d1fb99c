use glam::Mat4;

use crate::camera::CameraPose;
use crate::config::ProjectionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// Pose the camera snaps to when this mode is selected
    pub fn default_pose(self) -> CameraPose {
        match self {
            ProjectionMode::Perspective => CameraPose::PERSPECTIVE,
            ProjectionMode::Orthographic => CameraPose::ORTHOGRAPHIC,
        }
    }

    /// OpenGL-style clip-space projection; `fov_degrees` is only used in perspective
    pub fn matrix(self, fov_degrees: f32, aspect: f32, config: &ProjectionConfig) -> Mat4 {
        match self {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, config.near, config.far)
            }
            ProjectionMode::Orthographic => {
                let half_height = config.ortho_half_height;
                let half_width = half_height * aspect;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    config.near,
                    config.far,
                )
            }
        }
    }
}
