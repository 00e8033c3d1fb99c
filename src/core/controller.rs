use crate::camera::CameraMovement;

/// Logical input action the viewport polls each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveDown,
    MoveUp,
    TogglePerspective,
    ToggleOrthographic,
    Quit,
}

impl Action {
    /// Movement actions in the order the viewport applies them
    pub const MOVEMENT: [Action; 6] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::MoveUp,
    ];

    /// Camera direction for movement actions, `None` for everything else
    pub const fn movement(self) -> Option<CameraMovement> {
        match self {
            Action::MoveForward => Some(CameraMovement::Forward),
            Action::MoveBackward => Some(CameraMovement::Backward),
            Action::MoveLeft => Some(CameraMovement::Left),
            Action::MoveRight => Some(CameraMovement::Right),
            Action::MoveDown => Some(CameraMovement::Down),
            Action::MoveUp => Some(CameraMovement::Up),
            Action::TogglePerspective | Action::ToggleOrthographic | Action::Quit => None,
        }
    }
}

/// Controller - key-state queries over logical actions
pub trait Controller {
    /// Check if the action's key is currently down
    fn is_down(&self, action: Action) -> bool;

    /// Get all currently held actions
    fn get_down_keys(&self) -> &[Action];
}

impl Controller for [Action] {
    fn is_down(&self, action: Action) -> bool {
        self.contains(&action)
    }

    fn get_down_keys(&self) -> &[Action] {
        self
    }
}

impl Controller for Vec<Action> {
    fn is_down(&self, action: Action) -> bool {
        self.contains(&action)
    }

    fn get_down_keys(&self) -> &[Action] {
        self
    }
}
