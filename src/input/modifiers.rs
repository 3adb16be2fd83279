//! Keyboard modifier state tracking.

/// What a pointer-down does, decided by the held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Append a procedurally drawn figure (Shift)
    Shape,
    /// Append a bitmap stamp if the image is loaded (Ctrl)
    Image,
    /// Clear every placement and the surface (no modifier)
    Reset,
}

impl PlacementMode {
    /// Resolves the mode for a click.
    ///
    /// # Priority
    /// 1. Shift → Shape (wins even when Ctrl is also held)
    /// 2. Ctrl → Image
    /// 3. None → Reset
    pub fn for_click(shift: bool, ctrl: bool) -> Self {
        if shift {
            PlacementMode::Shape
        } else if ctrl {
            PlacementMode::Image
        } else {
            PlacementMode::Reset
        }
    }
}

/// Keyboard modifier state.
///
/// Tracks which modifier keys are currently pressed. The backend attaches
/// Shift and Ctrl to each pointer-down it forwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_takes_priority_over_ctrl() {
        assert_eq!(PlacementMode::for_click(true, true), PlacementMode::Shape);
        assert_eq!(PlacementMode::for_click(true, false), PlacementMode::Shape);
    }

    #[test]
    fn ctrl_alone_stamps_image() {
        assert_eq!(PlacementMode::for_click(false, true), PlacementMode::Image);
    }

    #[test]
    fn no_modifier_resets() {
        assert_eq!(PlacementMode::for_click(false, false), PlacementMode::Reset);
    }
}
