use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use scene_viewport::cli::Cli;
use scene_viewport::core::WinitController;
use scene_viewport::types::ViewUniform;
use scene_viewport::{Scene, Viewport, ViewportConfig};

// Pixels per scroll line when the platform reports pixel deltas
const PIXELS_PER_LINE: f64 = 20.0;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    viewport: Viewport,
    controller: WinitController,
    scene: Scene,
    uniform: ViewUniform,
    /// Cursor is grabbed; mouse look reads raw device motion instead of positions
    mouse_captured: bool,
}

impl App {
    fn new(config: ViewportConfig) -> Self {
        let scene = Scene::from_config(&config.scene);
        info!(
            "Scene '{}' with {} collision boxes",
            scene.name,
            scene.boxes.len()
        );
        Self {
            window: None,
            viewport: Viewport::new(config),
            controller: WinitController::new(),
            scene,
            uniform: ViewUniform::new(),
            mouse_captured: false,
        }
    }

    /// Grab and hide the cursor. Returns false if neither grab mode is supported.
    fn capture_cursor(window: &Window) -> bool {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
        window.set_cursor_visible(false);
        match grabbed {
            Ok(()) => true,
            Err(e) => {
                warn!("Cursor capture unavailable, using cursor positions: {}", e);
                false
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let outcome = self
            .viewport
            .prepare_scene_view(&self.controller, &self.scene, &mut self.uniform);

        if outcome.should_close {
            event_loop.exit();
            return;
        }

        trace!(
            "frame published: position={} mode={:?} collided={}",
            self.uniform.view_position(),
            self.viewport.mode(),
            outcome.collided
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_config = &self.viewport.config().window;
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(window_config.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    window_config.width,
                    window_config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.mouse_captured = Self::capture_cursor(&window);
        self.window = Some(window);
        self.viewport.resume();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                self.controller.process_event(&event);
            }
            WindowEvent::CursorMoved { position, .. } if !self.mouse_captured => {
                self.viewport.on_mouse_move(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => self.viewport.reset_mouse(),
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (f64::from(x), f64::from(y)),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x / PIXELS_PER_LINE, pos.y / PIXELS_PER_LINE)
                    }
                };
                self.viewport.on_scroll(x, y);
            }
            WindowEvent::Focused(false) => self.controller.release_all(),
            WindowEvent::Focused(true) => self.viewport.resume(),
            WindowEvent::Resized(size) => self.viewport.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.mouse_captured {
                self.viewport.on_mouse_motion(delta.0, delta.1);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.viewport.teardown();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.viewport_config()?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    info!(
        "Scene Viewport - Controls: WASD move, Q/E down/up, mouse look, scroll zoom, O/P ortho/perspective, Escape to quit"
    );
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    Ok(())
}
