/// Turns absolute cursor positions into screen-space offsets
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    /// Reference position; `None` until the first event arrives
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset since the previous cursor event, with Y pointing up.
    ///
    /// The first event only records the reference position and yields `None`.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let offset = self.last.map(|(last_x, last_y)| (x - last_x, last_y - y));
        self.last = Some((x, y));
        offset
    }

    /// Forget the reference position so the next event re-anchors
    pub fn reset(&mut self) {
        self.last = None;
    }
}
