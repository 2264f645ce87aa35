//! Sprite facing

/// The flip flag a 2D renderer exposes for a character sprite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sprite {
    /// Mirror horizontally (character faces left)
    pub flip_x: bool,
}

impl Sprite {
    /// Face the direction of a horizontal axis value. Zero keeps the current facing.
    pub fn face(&mut self, axis: f32) {
        if axis > 0.0 {
            self.flip_x = false;
        } else if axis < 0.0 {
            self.flip_x = true;
        }
    }
}
