//! Per-frame camera controller.
//!
//! The [`Viewport`] owns the single live [`Camera`] and everything that mutates
//! it: held-key motion, mouse reorientation, scroll zoom and projection mode
//! toggles. Each frame it moves the camera, pushes the result through the
//! [`Collider`], and publishes view/projection uniforms to a [`ShaderSink`].
//!
//! Wall-clock frame deltas are capped at [`MAX_FRAME_DELTA`] so a stall
//! (window creation, a breakpoint, a dragged title bar) cannot move the camera
//! far enough in one step to pass through thin geometry.
//!
//! Input callbacks and frame steps run on the same thread, so the viewport is
//! plain `&mut self` state with no interior locking.

use glam::{Mat4, Vec3};
use log::{debug, trace};

use crate::camera::Camera;
use crate::collision::Collider;
use crate::config::ViewportConfig;
use crate::core::{Action, Clock, Controller, MouseTracker};
use crate::projection::ProjectionMode;
use crate::traits::{CollisionSource, ShaderSink, PROJECTION_NAME, VIEW_NAME, VIEW_POSITION_NAME};

/// Longest wall-clock delta, in seconds, a single frame may consume
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// What happened during one frame step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutcome {
    /// A movement key fired this frame
    pub moved: bool,
    /// The moved position collided and was replaced by the resolver
    pub collided: bool,
    /// Projection mode switched this frame
    pub mode_changed: bool,
    /// The quit action is held
    pub should_close: bool,
}

pub struct Viewport {
    camera: Option<Camera>,
    mode: ProjectionMode,
    collider: Collider,
    mouse: MouseTracker,
    clock: Clock,
    /// Surface width over height; follows resizes, independent of `config.window`
    aspect: f32,
    config: ViewportConfig,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        let mode = ProjectionMode::default();
        let mut camera = Camera::new(mode.default_pose());
        camera.zoom = config.camera.zoom;
        camera.movement_speed = config.camera.movement_speed;
        camera.mouse_sensitivity = config.camera.mouse_sensitivity;

        Self {
            camera: Some(camera),
            mode,
            collider: Collider::new(config.camera.collision_radius),
            mouse: MouseTracker::new(),
            clock: Clock::new(),
            aspect: config.window.aspect_ratio(),
            config,
        }
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Restart frame timing and re-anchor the mouse.
    ///
    /// Call once the window is up and whenever it regains focus, so time spent
    /// without frames is not replayed as motion.
    pub fn resume(&mut self) {
        self.clock.reset();
        self.mouse.reset();
        trace!("viewport clock and mouse reset");
    }

    /// Drop the camera; later frames and input callbacks become no-ops
    pub fn teardown(&mut self) {
        if self.camera.take().is_some() {
            debug!("viewport camera released");
        }
    }

    /// Run one frame using the wall-clock time since the previous call,
    /// capped at [`MAX_FRAME_DELTA`]
    pub fn prepare_scene_view<C, S, R>(&mut self, input: &C, scene: &S, sink: &mut R) -> FrameOutcome
    where
        C: Controller + ?Sized,
        S: CollisionSource + ?Sized,
        R: ShaderSink + ?Sized,
    {
        let elapsed = self.clock.tick();
        if elapsed > MAX_FRAME_DELTA {
            debug!("frame delta {elapsed:.3}s capped to {MAX_FRAME_DELTA}s");
        }
        self.step(elapsed.min(MAX_FRAME_DELTA), input, scene, sink)
    }

    /// Run one frame with an explicit delta in seconds
    pub fn step<C, S, R>(&mut self, delta: f32, input: &C, scene: &S, sink: &mut R) -> FrameOutcome
    where
        C: Controller + ?Sized,
        S: CollisionSource + ?Sized,
        R: ShaderSink + ?Sized,
    {
        let outcome = self.process_keyboard(delta, input, scene);

        let Some(camera) = &self.camera else {
            return outcome;
        };

        sink.set_mat4(VIEW_NAME, camera.view_matrix());
        sink.set_mat4(PROJECTION_NAME, self.projection_matrix());
        sink.set_vec3(VIEW_POSITION_NAME, camera.position);
        outcome
    }

    /// Apply held keys: motion, collision resolution, then mode toggles
    pub fn process_keyboard<C, S>(&mut self, delta: f32, input: &C, scene: &S) -> FrameOutcome
    where
        C: Controller + ?Sized,
        S: CollisionSource + ?Sized,
    {
        let mut outcome = FrameOutcome {
            should_close: input.is_down(Action::Quit),
            ..FrameOutcome::default()
        };

        let Some(camera) = self.camera.as_mut() else {
            return outcome;
        };

        let previous = camera.position;
        for direction in Action::MOVEMENT
            .into_iter()
            .filter(|&action| input.is_down(action))
            .filter_map(Action::movement)
        {
            camera.process_keyboard(direction, delta);
            outcome.moved = true;
        }

        if outcome.moved {
            let boxes = scene.collision_boxes();
            if self.collider.is_colliding(camera.position, boxes) {
                let resolved = self.collider.resolve(camera.position, previous, boxes);
                trace!(
                    "camera blocked in scene {:?}: {} -> {}",
                    scene.name(),
                    camera.position,
                    resolved
                );
                camera.position = resolved;
                outcome.collided = true;
            }
        }

        // Perspective wins when both toggles are held
        if input.is_down(Action::ToggleOrthographic) {
            outcome.mode_changed |= self.toggle_projection_mode(ProjectionMode::Orthographic);
        }
        if input.is_down(Action::TogglePerspective) {
            outcome.mode_changed |= self.toggle_projection_mode(ProjectionMode::Perspective);
        }

        outcome
    }

    /// Select `mode` and snap the camera to its default pose.
    ///
    /// Returns true if the mode actually changed. The pose is reset either way.
    pub fn toggle_projection_mode(&mut self, mode: ProjectionMode) -> bool {
        let Some(camera) = self.camera.as_mut() else {
            return false;
        };

        camera.set_pose(mode.default_pose());
        let changed = self.mode != mode;
        if changed {
            debug!("projection mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        changed
    }

    /// Cursor-moved callback with raw window coordinates
    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };
        if let Some((x_offset, y_offset)) = self.mouse.offset(x as f32, y as f32) {
            camera.process_mouse_movement(x_offset, y_offset, true);
        }
    }

    /// Relative pointer motion in screen pixels (Y down), e.g. raw device
    /// deltas while the cursor is grabbed. No anchoring is needed.
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        if let Some(camera) = self.camera.as_mut() {
            camera.process_mouse_movement(dx as f32, -dy as f32, true);
        }
    }

    /// Scroll callback; only the vertical offset zooms
    pub fn on_scroll(&mut self, _x_offset: f64, y_offset: f64) {
        if let Some(camera) = self.camera.as_mut() {
            camera.process_mouse_scroll(y_offset as f32);
        }
    }

    /// Re-anchor the mouse, e.g. after the cursor leaves and re-enters the window
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Update the aspect ratio from the new surface size; zero sizes are ignored.
    ///
    /// Only the ratio is kept, so physical and logical pixels both work.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_matrix(&self) -> Option<Mat4> {
        self.camera.as_ref().map(Camera::view_matrix)
    }

    /// Projection for the current mode, using the camera zoom as vertical FOV
    pub fn projection_matrix(&self) -> Mat4 {
        let fov = self
            .camera
            .as_ref()
            .map_or(self.config.camera.zoom, |camera| camera.zoom);
        self.mode
            .matrix(fov, self.aspect, &self.config.projection)
    }

    pub fn position(&self) -> Option<Vec3> {
        self.camera.as_ref().map(|camera| camera.position)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}
