//! Drag-to-rotate interaction.
//!
//! Pointer positions are in globe pixels (0..diameter on both axes). A drag
//! across the full diameter spins the globe by 180°. Touch input arrives as
//! pointer events for the first touch.

use crate::geo::Rotation;
use glam::DVec2;

/// Pointer input, already mapped into globe pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(DVec2),
    Move(DVec2),
    Up,
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Offsets between the pointer's scaled position and the rotation at
    /// the moment the drag started.
    Dragging { offset_lambda: f64, offset_phi: f64 },
}

/// What an event did to the interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Started,
    Rotated(Rotation),
    Ended,
    Ignored,
}

/// Converts pointer events into rotation changes.
#[derive(Debug, Clone)]
pub struct GlobeInteraction {
    diameter: f64,
    state: DragState,
}

impl GlobeInteraction {
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Maps x in [0, diameter] to [-90°, 90°], extrapolating beyond.
    fn lambda_at(&self, x: f64) -> f64 {
        -90.0 + 180.0 * x / self.diameter
    }

    /// Maps y in [0, diameter] to [90°, -90°], extrapolating beyond.
    fn phi_at(&self, y: f64) -> f64 {
        90.0 - 180.0 * y / self.diameter
    }

    /// Applies `event`, updating `rotation` while dragging.
    pub fn handle(&mut self, event: PointerEvent, rotation: &mut Rotation) -> DragOutcome {
        match (event, self.state) {
            (PointerEvent::Down(pos), _) => {
                self.state = DragState::Dragging {
                    offset_lambda: self.lambda_at(pos.x) - rotation.lambda,
                    offset_phi: self.phi_at(pos.y) - rotation.phi,
                };
                DragOutcome::Started
            }
            (
                PointerEvent::Move(pos),
                DragState::Dragging {
                    offset_lambda,
                    mut offset_phi,
                },
            ) => {
                let pointer_phi = self.phi_at(pos.y);
                let limit = Rotation::PHI_LIMIT;

                // Re-anchor on overshoot so reversing direction responds at once.
                let candidate = pointer_phi - offset_phi;
                if candidate < -limit {
                    offset_phi = pointer_phi + limit;
                } else if candidate > limit {
                    offset_phi = pointer_phi - limit;
                }
                self.state = DragState::Dragging {
                    offset_lambda,
                    offset_phi,
                };

                rotation.lambda = self.lambda_at(pos.x) - offset_lambda;
                rotation.phi = (pointer_phi - offset_phi).clamp(-limit, limit);
                DragOutcome::Rotated(*rotation)
            }
            (PointerEvent::Up, DragState::Dragging { .. }) => {
                self.state = DragState::Idle;
                DragOutcome::Ended
            }
            (PointerEvent::Move(_), DragState::Idle) | (PointerEvent::Up, DragState::Idle) => {
                DragOutcome::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn test_idle_moves_are_ignored() {
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(10.0, 20.0);
        assert_eq!(
            interaction.handle(PointerEvent::Move(p(100.0, 100.0)), &mut rotation),
            DragOutcome::Ignored
        );
        assert_eq!(interaction.handle(PointerEvent::Up, &mut rotation), DragOutcome::Ignored);
        assert_eq!(rotation, Rotation::new(10.0, 20.0));
    }

    #[test]
    fn test_drag_rotates_relative_to_start() {
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(10.0, 20.0);

        assert_eq!(
            interaction.handle(PointerEvent::Down(p(300.0, 300.0)), &mut rotation),
            DragOutcome::Started
        );
        // No movement yet: rotation unchanged.
        interaction.handle(PointerEvent::Move(p(300.0, 300.0)), &mut rotation);
        assert!((rotation.lambda - 10.0).abs() < 1e-9);
        assert!((rotation.phi - 20.0).abs() < 1e-9);

        // 60 px right = +18°, 30 px down = -9°.
        interaction.handle(PointerEvent::Move(p(360.0, 330.0)), &mut rotation);
        assert!((rotation.lambda - 28.0).abs() < 1e-9);
        assert!((rotation.phi - 11.0).abs() < 1e-9);

        assert_eq!(interaction.handle(PointerEvent::Up, &mut rotation), DragOutcome::Ended);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn test_zero_offset_drag_still_rotates() {
        // Pointer position that maps exactly onto the current rotation.
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(0.0, 0.0);
        interaction.handle(PointerEvent::Down(p(300.0, 300.0)), &mut rotation);
        assert_eq!(
            interaction.state,
            DragState::Dragging {
                offset_lambda: 0.0,
                offset_phi: 0.0
            }
        );
        let outcome = interaction.handle(PointerEvent::Move(p(330.0, 300.0)), &mut rotation);
        assert!(matches!(outcome, DragOutcome::Rotated(_)));
        assert!((rotation.lambda - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_lambda_is_unbounded() {
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(170.0, 0.0);
        interaction.handle(PointerEvent::Down(p(0.0, 300.0)), &mut rotation);
        interaction.handle(PointerEvent::Move(p(600.0, 300.0)), &mut rotation);
        assert!((rotation.lambda - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_phi_never_leaves_limits() {
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(0.0, 0.0);
        interaction.handle(PointerEvent::Down(p(300.0, 300.0)), &mut rotation);

        let path = (0..=40)
            .map(|i| i as f64 * 50.0 - 1000.0)
            .chain((0..=40).map(|i| 1000.0 - i as f64 * 50.0));
        for y in path {
            interaction.handle(PointerEvent::Move(p(300.0, y)), &mut rotation);
            assert!(
                (-Rotation::PHI_LIMIT..=Rotation::PHI_LIMIT).contains(&rotation.phi),
                "phi {} at y {}",
                rotation.phi,
                y
            );
        }
    }

    #[test]
    fn test_overshoot_reanchors_for_immediate_reversal() {
        let mut interaction = GlobeInteraction::new(600.0);
        let mut rotation = Rotation::new(0.0, 60.0);
        interaction.handle(PointerEvent::Down(p(300.0, 300.0)), &mut rotation);

        // Drag far up: phi would be 60 + 60 = 120, clamped to 65.
        interaction.handle(PointerEvent::Move(p(300.0, 100.0)), &mut rotation);
        assert!((rotation.phi - 65.0).abs() < 1e-9);

        // Moving back down 10 px lowers phi by 3° right away.
        interaction.handle(PointerEvent::Move(p(300.0, 110.0)), &mut rotation);
        assert!((rotation.phi - 62.0).abs() < 1e-9);
    }
}
