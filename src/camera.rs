use glam::{Mat4, Vec3};

pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 80.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 90.0;
pub const PITCH_LIMIT: f32 = 89.0;

/// Direction fed to the keyboard motion primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Position and orientation basis the viewport restores on mode switches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    pub const PERSPECTIVE: Self = Self {
        position: Vec3::new(0.0, 5.0, 12.0),
        front: Vec3::new(0.0, -0.5, -2.0),
        up: Vec3::Y,
    };

    pub const ORTHOGRAPHIC: Self = Self {
        position: Vec3::new(0.0, 0.0, 10.0),
        front: Vec3::NEG_Z,
        up: Vec3::Y,
    };
}

/// Free-look fly camera.
///
/// `front` is stored exactly as it was last set; motion uses its normalized
/// direction. Yaw and pitch are kept in degrees and drive `front` whenever the
/// mouse reorients the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Camera {
    pub fn new(pose: CameraPose) -> Self {
        let mut camera = Self {
            position: pose.position,
            front: pose.front,
            up: pose.up,
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            zoom: DEFAULT_ZOOM,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        };
        camera.set_pose(pose);
        camera
    }

    /// Jump to `pose`, keeping zoom and tuning untouched
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.front = pose.front;
        self.up = pose.up;

        let dir = pose.front.normalize_or_zero();
        if dir != Vec3::ZERO {
            self.pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees();
            // Straight up or down leaves yaw undefined; keep the old one
            if dir.x != 0.0 || dir.z != 0.0 {
                self.yaw = dir.z.atan2(dir.x).to_degrees();
            }
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            front: self.front,
            up: self.up,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.front.normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.world_up).normalize_or_zero()
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let displacement = match direction {
            CameraMovement::Forward => self.forward() * velocity,
            CameraMovement::Backward => -self.forward() * velocity,
            CameraMovement::Left => -self.right() * velocity,
            CameraMovement::Right => self.right() * velocity,
            CameraMovement::Up => self.up * velocity,
            CameraMovement::Down => -self.up * velocity,
        };
        self.position += displacement;
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        let right = self.right();
        self.up = right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraPose::PERSPECTIVE)
    }
}
