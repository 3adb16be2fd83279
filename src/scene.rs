//! Placement bookkeeping for the two kinds of Red Box Man.

/// A placement anchor in surface pixels (top-left corner of the figure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Everything that has been placed on the canvas so far.
///
/// Both sequences are append-only and keep click order, which is also the
/// draw order. The only removal is [`Scene::clear`], which empties both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shape_placements: Vec<Location>,
    image_placements: Vec<Location>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors for procedurally drawn figures, in placement order.
    pub fn shape_placements(&self) -> &[Location] {
        &self.shape_placements
    }

    /// Anchors for bitmap-stamped figures, in placement order.
    pub fn image_placements(&self) -> &[Location] {
        &self.image_placements
    }

    pub fn push_shape(&mut self, location: Location) {
        self.shape_placements.push(location);
    }

    pub fn push_image(&mut self, location: Location) {
        self.image_placements.push(location);
    }

    /// Empties both sequences.
    pub fn clear(&mut self) {
        self.shape_placements.clear();
        self.image_placements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shape_placements.is_empty() && self.image_placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_keep_append_order() {
        let mut scene = Scene::new();
        scene.push_shape(Location::new(1.0, 2.0));
        scene.push_shape(Location::new(3.0, 4.0));
        scene.push_image(Location::new(5.0, 6.0));

        assert_eq!(
            scene.shape_placements(),
            &[Location::new(1.0, 2.0), Location::new(3.0, 4.0)]
        );
        assert_eq!(scene.image_placements(), &[Location::new(5.0, 6.0)]);
    }

    #[test]
    fn clear_empties_both_sequences() {
        let mut scene = Scene::new();
        scene.push_shape((10.0, 10.0).into());
        scene.push_image((20.0, 20.0).into());
        assert!(!scene.is_empty());

        scene.clear();
        assert!(scene.shape_placements().is_empty());
        assert!(scene.image_placements().is_empty());
        assert!(scene.is_empty());
    }
}
