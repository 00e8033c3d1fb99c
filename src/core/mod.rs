pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod mouse;

pub use clock::Clock;
pub use controller::{Action, Controller};
pub use input_adapter::WinitController;
pub use mouse::MouseTracker;
