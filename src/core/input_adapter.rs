use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Action, Controller};

/// Adapter that turns Winit keyboard events into held logical actions
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held actions
    held: HashSet<Action>,
    /// Held actions in press order (for get_down_keys)
    held_vec: Vec<Action>,
}

impl WinitController {
    /// Create a new WinitController with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state.
    ///
    /// Returns true if the event was a mapped key.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return false;
        };
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return false;
        };
        let Some(action) = Self::keycode_to_action(keycode) else {
            return false;
        };
        self.set_state(action, event.state);
        true
    }

    /// Record a press or release of `action`
    pub fn set_state(&mut self, action: Action, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.held.insert(action) {
                    self.held_vec.push(action);
                }
            }
            ElementState::Released => {
                if self.held.remove(&action) {
                    self.held_vec.retain(|&a| a != action);
                }
            }
        }
    }

    /// Drop every held action, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
        self.held_vec.clear();
    }

    /// Map Winit KeyCode to Action
    pub fn keycode_to_action(keycode: KeyCode) -> Option<Action> {
        match keycode {
            KeyCode::KeyW => Some(Action::MoveForward),
            KeyCode::KeyS => Some(Action::MoveBackward),
            KeyCode::KeyA => Some(Action::MoveLeft),
            KeyCode::KeyD => Some(Action::MoveRight),
            KeyCode::KeyQ => Some(Action::MoveDown),
            KeyCode::KeyE => Some(Action::MoveUp),
            KeyCode::KeyP => Some(Action::TogglePerspective),
            KeyCode::KeyO => Some(Action::ToggleOrthographic),
            KeyCode::Escape => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    fn get_down_keys(&self) -> &[Action] {
        &self.held_vec
    }
}
