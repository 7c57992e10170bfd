//! Globe view state: rotation and drag interaction.

use super::settings::GlobePosition;
use crate::geo::{OrthographicProjection, Rotation, DEFAULT_DIAMETER};
use crate::globe::{DragOutcome, GlobeInteraction, PointerEvent};

#[derive(Debug, Clone)]
pub struct GlobeState {
    pub rotation: Rotation,
    pub interaction: GlobeInteraction,
    /// Set when the rotation changed and the new position has not been saved.
    pub position_dirty: bool,
}

impl Default for GlobeState {
    fn default() -> Self {
        Self::new(Rotation::default())
    }
}

impl GlobeState {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            interaction: GlobeInteraction::new(DEFAULT_DIAMETER),
            position_dirty: false,
        }
    }

    pub fn projection(&self) -> OrthographicProjection {
        OrthographicProjection::new(DEFAULT_DIAMETER, self.rotation)
    }

    /// Feeds a pointer event to the drag interaction. The position is saved
    /// when a drag ends.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> DragOutcome {
        let outcome = self.interaction.handle(event, &mut self.rotation);
        match outcome {
            DragOutcome::Rotated(rotation) => {
                log::trace!("Globe rotated to {:?}", rotation);
                self.position_dirty = true;
            }
            DragOutcome::Ended if self.position_dirty => self.save_position(),
            _ => {}
        }
        outcome
    }

    /// Jumps to `rotation` and saves it.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
        self.save_position();
    }

    pub fn save_position(&mut self) {
        GlobePosition::new(self.rotation).save();
        self.position_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_drag_marks_and_clears_dirty() {
        let mut globe = GlobeState::new(Rotation::new(0.0, 0.0));
        globe.handle_pointer(PointerEvent::Down(DVec2::new(300.0, 300.0)));
        assert!(!globe.position_dirty);
        globe.handle_pointer(PointerEvent::Move(DVec2::new(320.0, 300.0)));
        assert!(globe.position_dirty);
        assert!((globe.rotation.lambda - 6.0).abs() < 1e-9);
        assert_eq!(globe.handle_pointer(PointerEvent::Up), DragOutcome::Ended);
        assert!(!globe.position_dirty);
    }

    #[test]
    fn test_projection_follows_rotation() {
        let mut globe = GlobeState::default();
        globe.set_rotation(Rotation::new(-18.0, -59.0));
        let center = globe.projection().project(Rotation::new(-18.0, -59.0).center());
        assert!(center.is_some_and(|p| (p - DVec2::splat(300.0)).length() < 1e-6));
    }
}
